//! Device model
//!
//! A UPS is a fixed, ordered table of named variables. Order is the
//! declaration order of the table and is what `LIST VAR` emits.

use std::fmt;

/// A typed telemetry value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// NUT-ish type label, used for diagnostics and the CLI
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "NUMBER",
            Value::Float(_) => "NUMBER",
            Value::Str(_) => "STRING",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            // Floats always carry one decimal digit: 50.0, 232.6
            Value::Float(v) => write!(f, "{:.1}", v),
            Value::Str(v) => f.write_str(v),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

/// One named variable, e.g. `battery.charge`
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub value: Value,
}

/// Telemetry snapshot of a single UPS
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceModel {
    variables: Vec<Variable>,
}

impl DeviceModel {
    /// Build a model from an explicit (name, value) table
    pub fn new<N, V>(table: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<Value>,
    {
        let variables = table
            .into_iter()
            .map(|(name, value)| Variable {
                name: name.into(),
                value: value.into(),
            })
            .collect();
        Self { variables }
    }

    /// Look up a variable's value by its dotted name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables
            .iter()
            .find(|v| v.name == name)
            .map(|v| &v.value)
    }

    /// Variables in declaration order
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Variable names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variables.iter().map(|v| v.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

impl Default for DeviceModel {
    /// Baseline snapshot of an on-line 2200VA unit with a full battery
    fn default() -> Self {
        use Value::{Float, Int};

        let s = |v: &str| Value::Str(v.to_string());

        Self::new([
            // battery
            ("battery.charge", Int(100)),
            ("battery.charge.low", Int(20)),
            ("battery.charge.warning", Int(25)),
            ("battery.mfr.date", s("1")),
            ("battery.runtime", Int(1620)),
            ("battery.runtime.low", Int(300)),
            ("battery.type", s("PbAcid")),
            ("battery.voltage", Int(26)),
            ("battery.voltage.nominal", Int(24)),
            // device
            ("device.mfr", s("1")),
            ("device.model", s("FakeNUT Server")),
            ("device.serial", s("000000000000")),
            ("device.type", s("ups")),
            // driver
            ("driver.name", s("usbhid-ups")),
            ("driver.parameter.pollfreq", Int(40)),
            ("driver.parameter.pollinterval", Int(2)),
            ("driver.parameter.port", s("auto")),
            ("driver.parameter.synchronous", s("auto")),
            ("driver.version", s("2.8.0")),
            ("driver.version.data", s("FakeNUT Server")),
            ("driver.version.internal", s("0.47")),
            ("driver.version.usb", s("libusb-1.0.0 (API: 0x1000102)")),
            // input
            ("input.frequency", Float(50.0)),
            ("input.transfer.high", Int(290)),
            ("input.transfer.low", Int(165)),
            ("input.voltage", Float(232.6)),
            ("input.voltage.nominal", Int(230)),
            // output
            ("output.frequency", Float(50.0)),
            ("output.voltage", Float(2.3)),
            // ups
            ("ups.beeper.status", s("disabled")),
            ("ups.delay.shutdown", Int(20)),
            ("ups.delay.start", Int(30)),
            ("ups.load", Int(12)),
            ("ups.mfr", s("1")),
            ("ups.model", s("2200R")),
            ("ups.productid", s("0601")),
            ("ups.realpower.nominal", Int(1320)),
            ("ups.serial", s("000000000000")),
            ("ups.status", s("OL")),
            ("ups.timer.shutdown", Int(-60)),
            ("ups.timer.start", Int(-60)),
            ("ups.vendorid", s("0764")),
        ])
    }
}
