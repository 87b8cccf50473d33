//! Connection Handler
//!
//! Handles individual client connections.

use std::io::{BufReader, BufWriter, ErrorKind};
use std::net::TcpStream;
use std::sync::Arc;

use crate::device::DeviceRegistry;
use crate::error::{FakeNutError, Result};
use crate::protocol::{dispatch, parse_line, read_line, write_response};

/// Handles a single client connection
///
/// The only per-connection state is the socket itself. Nothing about
/// earlier commands (logins included) is remembered.
pub struct Connection {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered for efficiency)
    writer: BufWriter<TcpStream>,

    /// Devices to answer for
    registry: Arc<DeviceRegistry>,

    /// Peer address for logging
    peer_addr: String,

    /// Log each received command at info level
    verbose: bool,
}

impl Connection {
    /// Create a new connection handler
    ///
    /// No read or write timeouts are set: a silent peer holds its thread
    /// until it disconnects.
    pub fn new(stream: TcpStream, registry: Arc<DeviceRegistry>, verbose: bool) -> Result<Self> {
        // Get peer address for logging before we split the stream
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            registry,
            peer_addr,
            verbose,
        })
    }

    /// Handle the connection (blocking until closed)
    ///
    /// Reads one line, dispatches it, writes the whole reply, repeats.
    /// Returns when the client disconnects or a transport error occurs.
    pub fn handle(&mut self) -> Result<()> {
        tracing::debug!("Connection established from {}", self.peer_addr);

        loop {
            let line = match read_line(&mut self.reader) {
                Ok(Some(line)) => line,
                Ok(None) => {
                    tracing::debug!("Client {} disconnected", self.peer_addr);
                    return Ok(());
                }
                Err(FakeNutError::Io(ref e)) if is_disconnect(e.kind()) => {
                    tracing::debug!("Connection to {} dropped: {}", self.peer_addr, e);
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!("Error reading from {}: {}", self.peer_addr, e);
                    return Err(e);
                }
            };

            if self.verbose {
                tracing::info!("Received command from {}: {}", self.peer_addr, line);
            } else {
                tracing::trace!("Received command from {}: {}", self.peer_addr, line);
            }

            let command = parse_line(&line);
            let response = dispatch(&command, &self.registry);

            if let Err(e) = write_response(&mut self.writer, &response) {
                if let FakeNutError::Io(ref io_err) = e {
                    if is_disconnect(io_err.kind()) {
                        tracing::debug!(
                            "Client {} disconnected before response could be sent: {}",
                            self.peer_addr,
                            e
                        );
                        return Ok(());
                    }
                }
                tracing::warn!("Error writing to {}: {}", self.peer_addr, e);
                return Err(e);
            }
        }
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

fn is_disconnect(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::ConnectionReset | ErrorKind::ConnectionAborted | ErrorKind::BrokenPipe
    )
}
