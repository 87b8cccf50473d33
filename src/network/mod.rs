//! Network Module
//!
//! TCP server and client handling.
//!
//! ## Architecture
//! - Single acceptor loop
//! - One thread per connection, unbounded
//! - Each connection handles its commands strictly in order
//! - The registry is shared read-only, so there is no locking

mod server;
mod connection;

pub use server::Server;
pub use connection::Connection;
