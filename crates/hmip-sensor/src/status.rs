//! Health derivation for status-bearing devices

use hmip_client::Device;

use crate::{HMIP_SABOTAGE, HMIP_UPTODATE, STATE_LOW_BATTERY, STATE_OK, STATE_SABOTAGE};
use crate::entity::StateValue;

/// Derived health of a device, in order of severity.
///
/// The precedence is a contract: sabotage outranks a low battery, which
/// outranks a pending firmware update, which outranks nominal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Health {
    /// Tamper contact open
    Sabotage,
    /// Battery needs replacing
    LowBattery,
    /// Firmware not current; carries the lower-cased raw update state
    UpdatePending(String),
    Ok,
}

impl Health {
    /// Derive the health of a device from its raw fields, first match wins.
    pub fn of(device: &Device) -> Self {
        if device.sabotage().as_deref() == Some(HMIP_SABOTAGE) {
            return Health::Sabotage;
        }
        if device.low_bat() {
            return Health::LowBattery;
        }
        let update_state = device.update_state().to_lowercase();
        if update_state != HMIP_UPTODATE {
            return Health::UpdatePending(update_state);
        }
        Health::Ok
    }

    /// State value shown for this health.
    pub fn state(&self) -> StateValue {
        match self {
            Health::Sabotage => StateValue::from(STATE_SABOTAGE),
            Health::LowBattery => StateValue::from(STATE_LOW_BATTERY),
            Health::UpdatePending(raw) => StateValue::from(raw.clone()),
            Health::Ok => StateValue::from(STATE_OK),
        }
    }

    /// Icon shown for this health.
    pub fn icon(&self) -> &'static str {
        match self {
            Health::Sabotage => "mdi:alert",
            Health::LowBattery => "mdi:battery-outline",
            Health::UpdatePending(_) => "mdi:refresh",
            Health::Ok => "mdi:check",
        }
    }
}
