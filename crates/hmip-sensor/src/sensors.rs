//! Sensor wrappers, one per descriptor kind
//!
//! Each wrapper holds a non-owning handle to the live client object and
//! recomputes everything on read. The client's event handling keeps that
//! object current; the hosting framework decides when to re-poll.

use std::sync::Arc;

use hmip_client::{Device, Home};

use crate::entity::{DeviceClass, SensorEntity, StateValue};
use crate::status::Health;
use crate::{HMIP_VALVE_DONE, UNIT_CELSIUS, UNIT_LUX, UNIT_PERCENT};

/// Status of the access point itself: duty cycle as state, cloud
/// connectivity as availability.
pub struct AccesspointStatus {
    home: Arc<Home>,
}

impl AccesspointStatus {
    pub fn new(home: Arc<Home>) -> Self {
        Self { home }
    }
}

impl SensorEntity for AccesspointStatus {
    fn name(&self) -> String {
        self.home.label().to_string()
    }

    fn icon(&self) -> Option<&'static str> {
        Some("mdi:access-point-network")
    }

    fn state(&self) -> StateValue {
        StateValue::Float(self.home.duty_cycle())
    }

    fn available(&self) -> bool {
        self.home.connected()
    }
}

/// Generic device status, derived from sabotage, battery and update fields.
pub struct DeviceStatus {
    device: Arc<Device>,
}

impl DeviceStatus {
    pub fn new(device: Arc<Device>) -> Self {
        Self { device }
    }
}

impl SensorEntity for DeviceStatus {
    fn name(&self) -> String {
        format!("{} Status", self.device.label())
    }

    fn icon(&self) -> Option<&'static str> {
        Some(Health::of(&self.device).icon())
    }

    fn state(&self) -> StateValue {
        Health::of(&self.device).state()
    }
}

/// Radiator valve of a heating thermostat.
///
/// While the valve is calibrating the raw valve state passes through as
/// text; once adaption is done the state is the valve opening as an
/// integer percentage, rounded half away from zero.
pub struct HeatingThermostat {
    device: Arc<Device>,
}

impl HeatingThermostat {
    pub fn new(device: Arc<Device>) -> Self {
        Self { device }
    }

    fn valve_done(&self) -> bool {
        self.device.valve_state().to_lowercase() == HMIP_VALVE_DONE
    }
}

impl SensorEntity for HeatingThermostat {
    fn name(&self) -> String {
        format!("{} Heating", self.device.label())
    }

    fn icon(&self) -> Option<&'static str> {
        if self.valve_done() {
            Some("mdi:radiator")
        } else {
            Some("mdi:alert")
        }
    }

    fn state(&self) -> StateValue {
        if self.valve_done() {
            StateValue::Int((self.device.valve_position() * 100.0).round() as i64)
        } else {
            StateValue::Text(self.device.valve_state().to_lowercase())
        }
    }

    fn unit_of_measurement(&self) -> Option<&'static str> {
        Some(UNIT_PERCENT)
    }
}

/// Measured temperature of a climate sensor.
pub struct TemperatureSensor {
    device: Arc<Device>,
}

impl TemperatureSensor {
    pub fn new(device: Arc<Device>) -> Self {
        Self { device }
    }
}

impl SensorEntity for TemperatureSensor {
    fn name(&self) -> String {
        format!("{} Temperature", self.device.label())
    }

    fn icon(&self) -> Option<&'static str> {
        Some("mdi:thermometer")
    }

    fn state(&self) -> StateValue {
        StateValue::Float(self.device.actual_temperature())
    }

    fn unit_of_measurement(&self) -> Option<&'static str> {
        Some(UNIT_CELSIUS)
    }

    fn device_class(&self) -> Option<DeviceClass> {
        Some(DeviceClass::Temperature)
    }
}

/// Measured relative humidity of a climate sensor.
pub struct HumiditySensor {
    device: Arc<Device>,
}

impl HumiditySensor {
    pub fn new(device: Arc<Device>) -> Self {
        Self { device }
    }
}

impl SensorEntity for HumiditySensor {
    fn name(&self) -> String {
        format!("{} Humidity", self.device.label())
    }

    fn icon(&self) -> Option<&'static str> {
        Some("mdi:water-percent")
    }

    fn state(&self) -> StateValue {
        StateValue::Float(self.device.humidity())
    }

    fn unit_of_measurement(&self) -> Option<&'static str> {
        Some(UNIT_PERCENT)
    }

    fn device_class(&self) -> Option<DeviceClass> {
        Some(DeviceClass::Humidity)
    }
}

/// Ambient brightness reported by an indoor motion detector.
pub struct IlluminanceSensor {
    device: Arc<Device>,
}

impl IlluminanceSensor {
    pub fn new(device: Arc<Device>) -> Self {
        Self { device }
    }
}

impl SensorEntity for IlluminanceSensor {
    fn name(&self) -> String {
        format!("{} Illuminance", self.device.label())
    }

    fn state(&self) -> StateValue {
        StateValue::Float(self.device.illumination())
    }

    fn unit_of_measurement(&self) -> Option<&'static str> {
        Some(UNIT_LUX)
    }

    fn device_class(&self) -> Option<DeviceClass> {
        Some(DeviceClass::Illuminance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hmip_client::DeviceKind;

    fn thermostat() -> Arc<Device> {
        Arc::new(Device::new(DeviceKind::HeatingThermostat, "Radiator"))
    }

    #[test]
    fn adapted_valve_reports_rounded_percent() {
        let device = thermostat();
        device.apply(|f| {
            f.valve_state = "ADAPTION_DONE".to_string();
            f.valve_position = 0.755;
        });

        let sensor = HeatingThermostat::new(device);
        // Rounds half away from zero: 75.5 -> 76
        assert_eq!(sensor.state(), StateValue::Int(76));
        assert_eq!(sensor.icon(), Some("mdi:radiator"));
        assert_eq!(sensor.unit_of_measurement(), Some("%"));
    }

    #[test]
    fn unadapted_valve_passes_state_through() {
        let device = thermostat();
        device.apply(|f| {
            f.valve_state = "ADAPTION_IN_PROGRESS".to_string();
            f.valve_position = 0.5;
        });

        let sensor = HeatingThermostat::new(device);
        assert_eq!(
            sensor.state(),
            StateValue::Text("adaption_in_progress".to_string())
        );
        assert_eq!(sensor.icon(), Some("mdi:alert"));
        assert_eq!(sensor.unit_of_measurement(), Some("%"));
    }

    #[test]
    fn valve_edge_positions() {
        let device = thermostat();
        let sensor = HeatingThermostat::new(device.clone());

        device.apply(|f| f.valve_position = 0.0);
        assert_eq!(sensor.state(), StateValue::Int(0));

        device.apply(|f| f.valve_position = 1.0);
        assert_eq!(sensor.state(), StateValue::Int(100));
    }

    #[test]
    fn climate_sensor_passes_measurements_through() {
        let device = Arc::new(Device::new(
            DeviceKind::TemperatureHumiditySensorDisplay,
            "Living Room",
        ));
        device.apply(|f| {
            f.actual_temperature = 21.5;
            f.humidity = 48.0;
        });

        let temperature = TemperatureSensor::new(device.clone());
        assert_eq!(temperature.name(), "Living Room Temperature");
        assert_eq!(temperature.state(), StateValue::Float(21.5));
        assert_eq!(temperature.unit_of_measurement(), Some("°C"));
        assert_eq!(temperature.device_class(), Some(DeviceClass::Temperature));

        let humidity = HumiditySensor::new(device);
        assert_eq!(humidity.name(), "Living Room Humidity");
        assert_eq!(humidity.state(), StateValue::Float(48.0));
        assert_eq!(humidity.unit_of_measurement(), Some("%"));
        assert_eq!(humidity.device_class(), Some(DeviceClass::Humidity));
    }

    #[test]
    fn illuminance_sensor_has_no_icon_override() {
        let device = Arc::new(Device::new(DeviceKind::MotionDetectorIndoor, "Hallway"));
        device.apply(|f| f.illumination = 785.2);

        let sensor = IlluminanceSensor::new(device);
        assert_eq!(sensor.state(), StateValue::Float(785.2));
        assert_eq!(sensor.unit_of_measurement(), Some("lx"));
        assert_eq!(sensor.device_class(), Some(DeviceClass::Illuminance));
        assert_eq!(sensor.icon(), None);
    }

    #[test]
    fn access_point_mirrors_home_verbatim() {
        let home = Arc::new(Home::new("Apartment"));
        home.set_duty_cycle(4.2);

        let sensor = AccesspointStatus::new(home.clone());
        assert_eq!(sensor.name(), "Apartment");
        assert_eq!(sensor.state(), StateValue::Float(4.2));
        assert_eq!(sensor.icon(), Some("mdi:access-point-network"));
        assert!(sensor.available());
        assert!(sensor.state_attributes().is_empty());

        home.set_connected(false);
        assert!(!sensor.available());
    }

    #[test]
    fn device_status_follows_health() {
        let device = Arc::new(Device::new(DeviceKind::ShutterContact, "Front Door"));
        let sensor = DeviceStatus::new(device.clone());

        assert_eq!(sensor.name(), "Front Door Status");
        assert_eq!(sensor.state(), StateValue::Text("ok".to_string()));
        assert_eq!(sensor.icon(), Some("mdi:check"));

        device.apply(|f| f.low_bat = true);
        assert_eq!(sensor.state(), StateValue::Text("low_battery".to_string()));
        assert_eq!(sensor.icon(), Some("mdi:battery-outline"));
    }
}
