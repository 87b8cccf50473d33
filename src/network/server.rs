//! TCP Server
//!
//! Accepts connections and hands each one to its own thread.

use std::net::{SocketAddr, TcpListener};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

use crate::config::Config;
use crate::device::DeviceRegistry;
use crate::error::{FakeNutError, Result};
use super::Connection;

/// TCP server for FakeNUT
///
/// Owns its config and registry, so independent instances can run side by
/// side in one process.
pub struct Server {
    config: Config,
    registry: Arc<DeviceRegistry>,
    listener: TcpListener,
    connection_counter: AtomicU64,
}

impl Server {
    /// Bind the listener described by `config`
    ///
    /// Binding happens here rather than in `run` so callers can learn the
    /// actual address (port 0) before serving.
    pub fn bind(config: Config, registry: DeviceRegistry) -> Result<Self> {
        let addr = config.listen_addr();
        let listener = TcpListener::bind(&addr)
            .map_err(|e| FakeNutError::Network(format!("failed to bind {}: {}", addr, e)))?;
        tracing::info!(
            "Fake NUT server listening on {} ({} device(s))",
            listener.local_addr()?,
            registry.len()
        );

        Ok(Self {
            config,
            registry: Arc::new(registry),
            listener,
            connection_counter: AtomicU64::new(0),
        })
    }

    /// Address the listener is bound to
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &Arc<DeviceRegistry> {
        &self.registry
    }

    /// Accept connections forever (blocking)
    ///
    /// Accept failures are logged and skipped. There is no connection limit.
    pub fn run(&self) -> Result<()> {
        for stream in self.listener.incoming() {
            let stream = match stream {
                Ok(stream) => stream,
                Err(e) => {
                    tracing::warn!("Error accepting connection: {}", e);
                    continue;
                }
            };

            let id = self.connection_counter.fetch_add(1, Ordering::Relaxed);
            let registry = Arc::clone(&self.registry);
            let verbose = self.config.verbose;

            let spawned = thread::Builder::new()
                .name(format!("nut-conn-{}", id))
                .spawn(move || {
                    let mut connection = match Connection::new(stream, registry, verbose) {
                        Ok(connection) => connection,
                        Err(e) => {
                            tracing::warn!("Failed to set up connection {}: {}", id, e);
                            return;
                        }
                    };
                    if let Err(e) = connection.handle() {
                        tracing::debug!("Connection {} ({}) closed: {}", id, connection.peer_addr(), e);
                    }
                });

            if let Err(e) = spawned {
                tracing::warn!("Failed to spawn thread for connection {}: {}", id, e);
            }
        }

        Ok(())
    }

    /// Placeholder for graceful shutdown
    ///
    /// Does not stop the accept loop or drain open connections.
    pub fn stop(&self) -> Result<()> {
        tracing::warn!("NOTICE: graceful shutdown is not implemented; connections are not drained");
        Ok(())
    }
}
