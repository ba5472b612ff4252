//! Fleet registry: a named owner of carriers with globally unique ids

use std::collections::HashMap;

use stowage_types::{CargoItem, Error, Result};

use crate::model::carrier::Carrier;
use crate::service::claims::CarrierClaims;

/// A named registry owning carriers
///
/// Carrier ids are unique within the registry and, through the shared
/// [`CarrierClaims`] set, across every registry built on the same handle.
#[derive(Debug)]
pub struct FleetRegistry {
    name: String,
    carriers: HashMap<String, Carrier>,
    claims: CarrierClaims,
}

impl FleetRegistry {
    /// Create a registry; the name is stored trimmed and uppercased
    pub fn new(name: &str, claims: CarrierClaims) -> Result<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidArgument(
                "fleet name cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            name: trimmed.to_uppercase(),
            carriers: HashMap::new(),
            claims,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a carrier; its id must be free here and in every sibling registry
    ///
    /// The local check runs first, so re-adding an id this registry already
    /// holds never touches the shared claims set.
    pub fn add_carrier(&mut self, carrier: Carrier) -> Result<()> {
        if self.carriers.contains_key(carrier.id()) {
            return Err(Error::InvalidArgument(format!(
                "carrier id already managed by this fleet: {}",
                carrier.id()
            )));
        }
        if !self.claims.claim(carrier.id()) {
            return Err(Error::InvalidArgument(format!(
                "carrier id already in use: {}",
                carrier.id()
            )));
        }
        self.carriers.insert(carrier.id().to_string(), carrier);
        Ok(())
    }

    /// Remove a carrier and release its id for reuse
    pub fn remove_carrier(&mut self, id: &str) -> Result<Carrier> {
        if id.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "carrier id cannot be empty".to_string(),
            ));
        }
        match self.carriers.remove(id) {
            Some(carrier) => {
                self.claims.release(id);
                Ok(carrier)
            }
            None => Err(Error::InvalidArgument(format!(
                "carrier id not managed by this fleet: {}",
                id
            ))),
        }
    }

    /// Load an item onto a registered carrier
    ///
    /// Capacity is the carrier's own business; this layer only resolves the id.
    pub fn load_item(&mut self, carrier_id: &str, item: CargoItem) -> Result<()> {
        match self.carriers.get_mut(carrier_id) {
            Some(carrier) => carrier.load(item),
            None => Err(Error::CarrierNotRegistered(carrier_id.to_string())),
        }
    }

    /// Unload an item from a registered carrier, returning what was removed
    pub fn unload_item(&mut self, carrier_id: &str, item: &CargoItem) -> Result<CargoItem> {
        match self.carriers.get_mut(carrier_id) {
            Some(carrier) => carrier.unload(item),
            None => Err(Error::InvalidArgument(format!(
                "no carrier registered with id: {}",
                carrier_id
            ))),
        }
    }

    /// Look up a carrier by id
    pub fn carrier(&self, id: &str) -> Option<&Carrier> {
        self.carriers.get(id)
    }

    /// All carriers sorted by id
    pub fn all_carriers(&self) -> Vec<&Carrier> {
        let mut carriers: Vec<_> = self.carriers.values().collect();
        carriers.sort_by(|a, b| a.id().cmp(b.id()));
        carriers
    }

    pub fn count(&self) -> usize {
        self.carriers.len()
    }
}
