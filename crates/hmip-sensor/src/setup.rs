//! Platform setup: classify devices and hand entities to the host

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use hmip_client::{DeviceKind, HapRegistry, Home};

use crate::entity::{AddEntities, SensorEntity};
use crate::sensors::{
    AccesspointStatus, HeatingThermostat, HumiditySensor, IlluminanceSensor, TemperatureSensor,
};
use crate::DOMAIN;

/// Setup errors
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("No connected access point registered under id {0}")]
    UnknownAccessPoint(String),
}

pub type SetupResult<T> = Result<T, SetupError>;

/// Build the sensor entities for a connected home.
///
/// The access point status entity always comes first; device entities
/// follow in device-list order. A climate sensor yields a temperature and
/// a humidity entity over the same device handle. Device kinds without a
/// sensor representation are skipped.
pub fn build_entities(home: &Arc<Home>) -> Vec<Box<dyn SensorEntity>> {
    let mut entities: Vec<Box<dyn SensorEntity>> =
        vec![Box::new(AccesspointStatus::new(home.clone()))];

    for device in home.devices() {
        match device.kind() {
            DeviceKind::HeatingThermostat => {
                debug!(label = device.label(), "adding heating sensor");
                entities.push(Box::new(HeatingThermostat::new(device)));
            }
            DeviceKind::TemperatureHumiditySensorDisplay
            | DeviceKind::TemperatureHumiditySensorWithoutDisplay => {
                debug!(label = device.label(), "adding temperature and humidity sensors");
                entities.push(Box::new(TemperatureSensor::new(device.clone())));
                entities.push(Box::new(HumiditySensor::new(device)));
            }
            DeviceKind::MotionDetectorIndoor => {
                debug!(label = device.label(), "adding illuminance sensor");
                entities.push(Box::new(IlluminanceSensor::new(device)));
            }
            // No sensor representation for these kinds
            DeviceKind::ShutterContact | DeviceKind::PluggableSwitch => {}
        }
    }

    entities
}

/// Set up the sensor platform for one access point.
///
/// Resolves the access point identifier from the hub integration's
/// registry, builds the entity list and registers it with the host.
pub async fn async_setup_entry(
    registry: &HapRegistry,
    hap_id: &str,
    add_entities: AddEntities,
) -> SetupResult<()> {
    let home = registry
        .get(hap_id)
        .ok_or_else(|| SetupError::UnknownAccessPoint(hap_id.to_string()))?;

    let entities = build_entities(&home);
    info!(
        domain = DOMAIN,
        hap_id,
        count = entities.len(),
        "setting up sensor entities"
    );
    add_entities(entities);
    Ok(())
}
