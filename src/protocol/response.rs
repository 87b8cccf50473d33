//! Response definitions
//!
//! A response is the complete, newline-terminated text for one request.
//! It is assembled in a single buffer so the connection can write it in
//! one piece.

use std::borrow::Cow;

use bytes::{BufMut, Bytes, BytesMut};

// =============================================================================
// Wire Literals
// =============================================================================

pub const OK: &str = "OK";
pub const ERR_INVALID_ARGUMENT: &str = "ERR INVALID-ARGUMENT";
/// SET's refusal uses a space, not a hyphen. Clients match on this exact text.
pub const ERR_SET_INVALID_ARGUMENT: &str = "ERR INVALID ARGUMENT";
/// Followed by a space and the offending name
pub const ERR_NOSUCHCMD: &str = "ERR NOSUCHCMD";
pub const ERR_USERNAME_REQUIRED: &str = "ERR USERNAME-REQUIRED";
pub const ERR_FEATURE_NOT_CONFIGURED: &str = "ERR FEATURE-NOT-CONFIGURED";
pub const ERR_UNKNOWN_COMMAND: &str = "ERR UNKNOWN-COMMAND";

/// A response to send to the client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    buf: BytesMut,
}

impl Response {
    /// Create an empty response
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a single-line response
    pub fn line(line: &str) -> Self {
        let mut response = Self::new();
        response.push_line(line);
        response
    }

    /// Append one line, adding the trailing `\n`
    pub fn push_line(&mut self, line: &str) -> &mut Self {
        self.buf.reserve(line.len() + 1);
        self.buf.put_slice(line.as_bytes());
        self.buf.put_u8(b'\n');
        self
    }

    /// `BEGIN LIST <sub>[ <target>]`
    pub fn begin_list(&mut self, subcommand: &str, target: Option<&str>) -> &mut Self {
        self.push_line(&list_header("BEGIN", subcommand, target))
    }

    /// `END LIST <sub>[ <target>]`
    pub fn end_list(&mut self, subcommand: &str, target: Option<&str>) -> &mut Self {
        self.push_line(&list_header("END", subcommand, target))
    }

    /// Raw bytes as they go on the wire
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }

    /// Response text; always valid UTF-8 since it is built from `&str`
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.buf)
    }

    /// Lines without their terminators
    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_string).collect()
    }

    /// True if the first line is an `ERR` line
    pub fn is_error(&self) -> bool {
        self.buf.starts_with(b"ERR ")
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

fn list_header(keyword: &str, subcommand: &str, target: Option<&str>) -> String {
    match target {
        Some(target) => format!("{} LIST {} {}", keyword, subcommand, target),
        None => format!("{} LIST {}", keyword, subcommand),
    }
}
