//! Sensor entities for HomematicIP Cloud devices
//!
//! Translates the devices of a connected HomematicIP access point into
//! read-only sensor entities: valve state for heating thermostats,
//! temperature and humidity for climate sensors, illuminance for indoor
//! motion detectors, plus one status entity for the access point itself.
//!
//! Nothing here talks to the cloud. Session handling, discovery and event
//! delivery live in `hmip-client`; registration and update scheduling live
//! in the hosting framework, reached through the [`SensorEntity`] trait.
//! Every accessor reads through to the live client objects, so states are
//! never cached in this crate.

mod entity;
mod sensors;
mod setup;
mod status;

pub use entity::{AddEntities, DeviceClass, SensorEntity, StateValue};
pub use sensors::{
    AccesspointStatus, DeviceStatus, HeatingThermostat, HumiditySensor, IlluminanceSensor,
    TemperatureSensor,
};
pub use setup::{async_setup_entry, build_entities, SetupError, SetupResult};
pub use status::Health;

/// Integration this platform belongs to, resolved by the host at load time
pub const DOMAIN: &str = "homematicip_cloud";

/// Update state reported when a device's firmware is current
pub const HMIP_UPTODATE: &str = "up_to_date";

/// Valve state reported once a thermostat has calibrated its valve
pub const HMIP_VALVE_DONE: &str = "adaption_done";

/// Sabotage field value reported while a device's tamper contact is open
pub const HMIP_SABOTAGE: &str = "sabotage";

/// Derived status for a healthy device
pub const STATE_OK: &str = "ok";

/// Derived status for a device with a low battery
pub const STATE_LOW_BATTERY: &str = "low_battery";

/// Derived status for a tampered device
pub const STATE_SABOTAGE: &str = "sabotage";

/// Unit for temperature states
pub const UNIT_CELSIUS: &str = "°C";

/// Unit for humidity and valve position states
pub const UNIT_PERCENT: &str = "%";

/// Unit for illuminance states
pub const UNIT_LUX: &str = "lx";
