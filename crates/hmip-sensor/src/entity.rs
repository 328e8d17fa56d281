//! The read-only entity interface exposed to the hosting framework

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// State value of a sensor entity, either textual or numeric.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StateValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateValue::Text(s) => write!(f, "{s}"),
            StateValue::Int(n) => write!(f, "{n}"),
            StateValue::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        StateValue::Text(value.to_string())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        StateValue::Text(value)
    }
}

impl From<i64> for StateValue {
    fn from(value: i64) -> Self {
        StateValue::Int(value)
    }
}

impl From<f64> for StateValue {
    fn from(value: f64) -> Self {
        StateValue::Float(value)
    }
}

/// Device class of a sensor, in Home Assistant's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Temperature,
    Humidity,
    Illuminance,
}

impl DeviceClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceClass::Temperature => "temperature",
            DeviceClass::Humidity => "humidity",
            DeviceClass::Illuminance => "illuminance",
        }
    }
}

/// Read-only presentation of one sensor.
///
/// The hosting framework owns the entity lifecycle (registration, update
/// scheduling); it calls back through this trait whenever it needs current
/// values. Implementations re-read the live client objects on every call
/// and hold no state of their own.
pub trait SensorEntity: Send + Sync {
    /// Display name, device label plus a metric suffix.
    fn name(&self) -> String;

    /// MDI icon name, if the entity overrides the frontend default.
    fn icon(&self) -> Option<&'static str> {
        None
    }

    /// Current state value.
    fn state(&self) -> StateValue;

    /// Unit the state is expressed in, if any.
    fn unit_of_measurement(&self) -> Option<&'static str> {
        None
    }

    /// Device class, if the sensor maps onto one.
    fn device_class(&self) -> Option<DeviceClass> {
        None
    }

    /// Whether the entity should be shown as reachable.
    fn available(&self) -> bool {
        true
    }

    /// Extra state attributes.
    fn state_attributes(&self) -> HashMap<String, serde_json::Value> {
        HashMap::new()
    }
}

/// Registration callback handed to the platform by the hosting framework.
pub type AddEntities = Box<dyn Fn(Vec<Box<dyn SensorEntity>>) + Send + Sync>;
