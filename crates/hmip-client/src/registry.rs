//! Registry of connected access points, keyed by identifier

use std::sync::Arc;

use dashmap::DashMap;
use tracing::info;

use crate::Home;

/// Maps access point identifiers (SGTINs) to their connected [`Home`].
///
/// Populated by the hub integration when an access point finishes its
/// session setup; entity platforms resolve the identifier they were
/// configured with through this registry.
#[derive(Default)]
pub struct HapRegistry {
    homes: DashMap<String, Arc<Home>>,
}

impl HapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a connected home under its access point identifier.
    pub fn insert(&self, hap_id: impl Into<String>, home: Arc<Home>) {
        let hap_id = hap_id.into();
        info!(hap_id, label = home.label(), "access point registered");
        self.homes.insert(hap_id, home);
    }

    /// Resolve an access point identifier to its home, if registered.
    pub fn get(&self, hap_id: &str) -> Option<Arc<Home>> {
        self.homes.get(hap_id).map(|entry| entry.value().clone())
    }

    /// Drop an access point, e.g. when its config entry is unloaded.
    pub fn remove(&self, hap_id: &str) -> Option<Arc<Home>> {
        self.homes.remove(hap_id).map(|(_, home)| home)
    }
}
