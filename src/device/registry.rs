//! Device registry
//!
//! Immutable name → model mapping. Built once, then shared read-only.

use std::collections::BTreeMap;

use super::DeviceModel;

/// Name of the single device in the default registry
pub const DEFAULT_DEVICE_NAME: &str = "FakeUPS";

/// All devices a server instance answers for
///
/// Backed by a `BTreeMap`, so iteration (and therefore `LIST UPS`) is
/// sorted by device name.
#[derive(Debug, Clone, Default)]
pub struct DeviceRegistry {
    devices: BTreeMap<String, DeviceModel>,
}

impl DeviceRegistry {
    /// Start assembling a registry
    pub fn builder() -> DeviceRegistryBuilder {
        DeviceRegistryBuilder::default()
    }

    /// One device, `FakeUPS`, holding the baseline snapshot
    pub fn default_registry() -> Self {
        Self::builder()
            .device(DEFAULT_DEVICE_NAME, DeviceModel::default())
            .build()
    }

    /// Look up a device by name
    pub fn lookup(&self, name: &str) -> Option<&DeviceModel> {
        self.devices.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.devices.contains_key(name)
    }

    /// Device names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.devices.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}

/// Builder for DeviceRegistry
#[derive(Default)]
pub struct DeviceRegistryBuilder {
    devices: BTreeMap<String, DeviceModel>,
}

impl DeviceRegistryBuilder {
    /// Add (or replace) a device
    pub fn device(mut self, name: impl Into<String>, model: DeviceModel) -> Self {
        self.devices.insert(name.into(), model);
        self
    }

    pub fn build(self) -> DeviceRegistry {
        DeviceRegistry {
            devices: self.devices,
        }
    }
}
