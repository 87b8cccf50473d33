//! Device Module
//!
//! The simulated UPS devices served over the protocol.
//!
//! ## Responsibilities
//! - Hold each device's telemetry as an ordered (name, value) table
//! - Map device names to models, built once before the server starts
//!
//! Nothing here is mutable after construction, so connection threads share
//! a registry through an `Arc` without any locking.

mod model;
mod registry;

pub use model::{DeviceModel, Value, Variable};
pub use registry::{DeviceRegistry, DeviceRegistryBuilder, DEFAULT_DEVICE_NAME};
