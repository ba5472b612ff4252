//! Session-wide directory of fleet registries

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use stowage_domain::{CarrierClaims, FleetRegistry};
use stowage_types::{Error, Result};

/// All fleets of one session, sharing a single carrier id claims set
///
/// Fleets are keyed by the canonical name the registry itself stores, so
/// lookups accept any casing or padding of the name.
pub struct FleetDirectory {
    claims: CarrierClaims,
    fleets: HashMap<String, FleetRegistry>,
}

impl FleetDirectory {
    pub fn new() -> Self {
        Self {
            claims: CarrierClaims::new(),
            fleets: HashMap::new(),
        }
    }

    /// Create a fleet wired to the shared claims set
    pub fn create_fleet(&mut self, name: &str) -> Result<&mut FleetRegistry> {
        let fleet = FleetRegistry::new(name, self.claims.clone())?;
        match self.fleets.entry(fleet.name().to_string()) {
            Entry::Occupied(entry) => Err(Error::InvalidArgument(format!(
                "fleet already exists: {}",
                entry.key()
            ))),
            Entry::Vacant(entry) => Ok(entry.insert(fleet)),
        }
    }

    pub fn fleet(&self, name: &str) -> Option<&FleetRegistry> {
        self.fleets.get(&canonical(name))
    }

    pub fn fleet_mut(&mut self, name: &str) -> Option<&mut FleetRegistry> {
        self.fleets.get_mut(&canonical(name))
    }

    /// Fleet names, sorted
    pub fn fleet_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.fleets.keys().map(String::as_str).collect();
        names.sort();
        names
    }

    pub fn fleet_count(&self) -> usize {
        self.fleets.len()
    }

    /// Handle to the claims set shared by every fleet in this directory
    pub fn claims(&self) -> &CarrierClaims {
        &self.claims
    }
}

impl Default for FleetDirectory {
    fn default() -> Self {
        Self::new()
    }
}

fn canonical(name: &str) -> String {
    name.trim().to_uppercase()
}
