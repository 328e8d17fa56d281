//! Devices reported by a HomematicIP access point

use std::sync::RwLock;

/// Capability tag of a HomematicIP device.
///
/// The cloud reports each device with exactly one type; platforms match on
/// this tag to decide which entities to create. The enumeration is closed so
/// that classification stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Radiator thermostat with a motorized valve (HmIP-eTRV)
    HeatingThermostat,
    /// Wall-mount climate sensor with display (HmIP-STHD)
    TemperatureHumiditySensorDisplay,
    /// Wall-mount climate sensor without display (HmIP-STH)
    TemperatureHumiditySensorWithoutDisplay,
    /// Indoor motion detector with brightness sensor (HmIP-SMI)
    MotionDetectorIndoor,
    /// Window/door contact (HmIP-SWDO)
    ShutterContact,
    /// Switched plug adapter (HmIP-PS)
    PluggableSwitch,
}

/// Raw fields pushed by the cloud for a device.
///
/// Which fields a device actually reports depends on its [`DeviceKind`];
/// the client guarantees the fields implied by the capability tag are
/// populated before the device is handed out.
#[derive(Debug, Clone)]
pub struct DeviceFields {
    /// Battery-low warning flag
    pub low_bat: bool,
    /// Tamper indicator; the literal `"sabotage"` when tripped
    pub sabotage: Option<String>,
    /// Firmware update state as reported (e.g. `"UP_TO_DATE"`)
    pub update_state: String,
    /// Valve calibration state as reported (e.g. `"ADAPTION_DONE"`)
    pub valve_state: String,
    /// Valve opening, 0.0 (closed) to 1.0 (fully open)
    pub valve_position: f64,
    /// Measured temperature in °C
    pub actual_temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Ambient brightness in lux
    pub illumination: f64,
}

impl Default for DeviceFields {
    fn default() -> Self {
        Self {
            low_bat: false,
            sabotage: None,
            update_state: "UP_TO_DATE".to_string(),
            valve_state: "ADAPTION_DONE".to_string(),
            valve_position: 0.0,
            actual_temperature: 0.0,
            humidity: 0.0,
            illumination: 0.0,
        }
    }
}

/// A single physical device behind an access point.
///
/// The client's event handling mutates the fields in place through
/// [`Device::apply`]; every accessor reads the current value. Entities hold
/// a non-owning `Arc<Device>` and read through on each state query.
#[derive(Debug)]
pub struct Device {
    label: String,
    kind: DeviceKind,
    fields: RwLock<DeviceFields>,
}

impl Device {
    /// Create a device with default fields.
    pub fn new(kind: DeviceKind, label: impl Into<String>) -> Self {
        Self::with_fields(kind, label, DeviceFields::default())
    }

    /// Create a device with explicit initial fields.
    pub fn with_fields(
        kind: DeviceKind,
        label: impl Into<String>,
        fields: DeviceFields,
    ) -> Self {
        Self {
            label: label.into(),
            kind,
            fields: RwLock::new(fields),
        }
    }

    /// User-assigned device name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Capability tag of this device.
    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    /// Mutate the raw fields, as done by the client when the cloud pushes
    /// an update event for this device.
    pub fn apply(&self, f: impl FnOnce(&mut DeviceFields)) {
        let mut fields = self.fields.write().unwrap();
        f(&mut fields);
    }

    pub fn low_bat(&self) -> bool {
        self.fields.read().unwrap().low_bat
    }

    pub fn sabotage(&self) -> Option<String> {
        self.fields.read().unwrap().sabotage.clone()
    }

    pub fn update_state(&self) -> String {
        self.fields.read().unwrap().update_state.clone()
    }

    pub fn valve_state(&self) -> String {
        self.fields.read().unwrap().valve_state.clone()
    }

    pub fn valve_position(&self) -> f64 {
        self.fields.read().unwrap().valve_position
    }

    pub fn actual_temperature(&self) -> f64 {
        self.fields.read().unwrap().actual_temperature
    }

    pub fn humidity(&self) -> f64 {
        self.fields.read().unwrap().humidity
    }

    pub fn illumination(&self) -> f64 {
        self.fields.read().unwrap().illumination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_is_visible_on_next_read() {
        let device = Device::new(DeviceKind::HeatingThermostat, "Radiator");
        assert_eq!(device.valve_position(), 0.0);

        device.apply(|f| f.valve_position = 0.4);
        assert_eq!(device.valve_position(), 0.4);
    }

    #[test]
    fn default_fields_report_nominal_states() {
        let fields = DeviceFields::default();
        assert_eq!(fields.update_state, "UP_TO_DATE");
        assert_eq!(fields.valve_state, "ADAPTION_DONE");
        assert!(fields.sabotage.is_none());
        assert!(!fields.low_bat);
    }
}
