//! Read surface of the HomematicIP Cloud client
//!
//! This crate models the slice of the cloud client that entity platforms
//! consume: the connected access point ([`Home`]), the devices it reports
//! ([`Device`] with a closed [`DeviceKind`] capability enumeration), and a
//! registry resolving access point identifiers to connected homes
//! ([`HapRegistry`]).
//!
//! The client's event handling pushes raw field updates into these objects;
//! everything here is a live view. Readers always go through to the current
//! values, so a platform built on top never caches.

mod device;
mod home;
mod registry;

pub use device::{Device, DeviceFields, DeviceKind};
pub use home::Home;
pub use registry::HapRegistry;
