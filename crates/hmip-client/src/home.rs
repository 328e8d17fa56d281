//! The connected access point and its device list

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::Device;

struct ConnectionState {
    connected: bool,
    duty_cycle: f64,
}

/// A home behind one HomematicIP access point.
///
/// Owned by the client; the platform only reads it. `connected` and
/// `duty_cycle` track the access point itself, `devices` the physical
/// devices it has discovered. Setters model the client's event handling
/// and are what tests use to simulate cloud pushes.
pub struct Home {
    label: String,
    state: RwLock<ConnectionState>,
    devices: RwLock<Vec<Arc<Device>>>,
}

impl Home {
    /// Create a connected home with an empty device list.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: RwLock::new(ConnectionState {
                connected: true,
                duty_cycle: 0.0,
            }),
            devices: RwLock::new(Vec::new()),
        }
    }

    /// User-assigned name of the access point.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the cloud session to the access point is up.
    pub fn connected(&self) -> bool {
        self.state.read().unwrap().connected
    }

    /// Radio duty cycle usage reported by the access point, in percent.
    pub fn duty_cycle(&self) -> f64 {
        self.state.read().unwrap().duty_cycle
    }

    /// Snapshot of the device list, in discovery order.
    pub fn devices(&self) -> Vec<Arc<Device>> {
        self.devices.read().unwrap().clone()
    }

    /// Record a connection state change pushed by the cloud.
    pub fn set_connected(&self, connected: bool) {
        self.state.write().unwrap().connected = connected;
    }

    /// Record a duty cycle report pushed by the cloud.
    pub fn set_duty_cycle(&self, duty_cycle: f64) {
        self.state.write().unwrap().duty_cycle = duty_cycle;
    }

    /// Append a newly discovered device.
    pub fn add_device(&self, device: Arc<Device>) {
        debug!(label = device.label(), kind = ?device.kind(), "device discovered");
        self.devices.write().unwrap().push(device);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeviceKind;

    #[test]
    fn connection_updates_read_through() {
        let home = Home::new("Apartment");
        assert!(home.connected());
        assert_eq!(home.duty_cycle(), 0.0);

        home.set_connected(false);
        home.set_duty_cycle(4.2);
        assert!(!home.connected());
        assert_eq!(home.duty_cycle(), 4.2);
    }

    #[test]
    fn devices_keep_discovery_order() {
        let home = Home::new("Apartment");
        home.add_device(Arc::new(Device::new(DeviceKind::ShutterContact, "Door")));
        home.add_device(Arc::new(Device::new(DeviceKind::PluggableSwitch, "Lamp")));

        let labels: Vec<_> = home.devices().iter().map(|d| d.label().to_string()).collect();
        assert_eq!(labels, ["Door", "Lamp"]);
    }
}
