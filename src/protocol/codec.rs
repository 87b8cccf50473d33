//! Protocol codec
//!
//! Line framing for both sides of the connection.
//!
//! ## Framing
//! - A request is everything up to and including the next `\n`; surrounding
//!   whitespace (including a `\r`) is stripped before parsing.
//! - Bytes after the last `\n` at end-of-stream never form a request.
//! - A reply is either a single line, or a `BEGIN LIST ...` line followed by
//!   data lines up to and including the matching `END LIST ...` line.

use std::io::{BufRead, Write};

use crate::error::{FakeNutError, Result};
use super::Response;

// =============================================================================
// Server side
// =============================================================================

/// Read one request line
///
/// Returns `Ok(None)` at end-of-stream, including when the peer closes with
/// an unterminated partial line. Blocks without a timeout.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    let n = reader.read_until(b'\n', &mut buf)?;
    if n == 0 || buf.last() != Some(&b'\n') {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim().to_string()))
}

/// Write a complete response and flush it
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    writer.write_all(response.as_bytes())?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// Client side
// =============================================================================

/// Send one request line, appending the `\n`
pub fn write_command<W: Write>(writer: &mut W, line: &str) -> Result<()> {
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Read one complete reply, returning its lines without terminators
pub fn read_reply<R: BufRead>(reader: &mut R) -> Result<Vec<String>> {
    let first = read_reply_line(reader)?;

    if !first.starts_with("BEGIN LIST ") {
        return Ok(vec![first]);
    }
    let end = first.replacen("BEGIN", "END", 1);

    let mut lines = vec![first];
    loop {
        let line = read_reply_line(reader)?;
        let done = line == end;
        lines.push(line);
        if done {
            return Ok(lines);
        }
    }
}

fn read_reply_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(FakeNutError::Protocol(
            "connection closed before reply was complete".to_string(),
        ));
    }
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}
