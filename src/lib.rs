//! # FakeNUT
//!
//! A stand-in for the Network UPS Tools `upsd` daemon:
//! - Speaks the newline-delimited NUT text protocol over TCP
//! - Serves a static telemetry snapshot for one or more simulated UPS devices
//! - Accepts login/credential commands without enforcing them
//! - Refuses mutations (SET, INSTCMD) and STARTTLS deterministically
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                              │
//! │            (one thread per client connection)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ line
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Command Parser                             │
//! │              (command token + 3 positionals)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ ParsedCommand
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Command Dispatcher                           │
//! │               (pure, returns Response)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ read-only
//!                       ▼
//!               ┌───────────────┐
//!               │DeviceRegistry │
//!               │ (Arc, no lock)│
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod device;
pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FakeNutError, Result};
pub use config::Config;
pub use device::{DeviceModel, DeviceRegistry, Value};
pub use network::Server;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of FakeNUT
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
