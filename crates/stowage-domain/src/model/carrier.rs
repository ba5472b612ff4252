//! Carrier model: a capacity-capped vehicle accumulating cargo

use serde::Serialize;

use stowage_types::{CapacityKind, CargoItem, Error, Result};

use crate::model::fleet::FleetRegistry;

/// A carrier with fixed weight and volume caps and a running load
///
/// The running totals always equal the sums over the loaded items, and
/// never exceed the caps. Items are kept in the order they were loaded.
#[derive(Debug, Serialize)]
pub struct Carrier {
    id: String,
    fleet: String,
    max_weight: u32,
    max_volume: f64,
    current_weight: u32,
    current_volume: f64,
    items: Vec<CargoItem>,
}

impl Carrier {
    /// Create an empty carrier owned by the given registry
    pub fn new(id: &str, max_weight: u32, max_volume: f64, owner: &FleetRegistry) -> Result<Self> {
        if id.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "carrier id cannot be empty".to_string(),
            ));
        }
        if max_volume < 0.0 || max_volume.is_nan() {
            return Err(Error::InvalidArgument(
                "carrier max volume must be a non-negative number".to_string(),
            ));
        }
        Ok(Self {
            id: id.to_string(),
            fleet: owner.name().to_string(),
            max_weight,
            max_volume,
            current_weight: 0,
            current_volume: 0.0,
            items: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the fleet registry this carrier was created for
    pub fn fleet(&self) -> &str {
        &self.fleet
    }

    pub fn max_weight(&self) -> u32 {
        self.max_weight
    }

    pub fn max_volume(&self) -> f64 {
        self.max_volume
    }

    pub fn current_weight(&self) -> u32 {
        self.current_weight
    }

    pub fn current_volume(&self) -> f64 {
        self.current_volume
    }

    pub fn remaining_weight(&self) -> u32 {
        self.max_weight - self.current_weight
    }

    pub fn remaining_volume(&self) -> f64 {
        self.max_volume - self.current_volume
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Load an item; the weight cap is checked before the volume cap
    ///
    /// A rejected item is handed back inside the error and the carrier is
    /// left untouched. When both caps would be exceeded, only the weight
    /// violation is reported.
    pub fn load(&mut self, item: CargoItem) -> Result<()> {
        // Sums widened to u64 so a cap near u32::MAX cannot wrap
        if self.current_weight as u64 + item.weight() as u64 > self.max_weight as u64 {
            return Err(Error::CapacityExceeded {
                kind: CapacityKind::Weight,
                item,
            });
        }
        if self.current_volume + item.volume() > self.max_volume {
            return Err(Error::CapacityExceeded {
                kind: CapacityKind::Volume,
                item,
            });
        }
        self.current_weight += item.weight();
        self.current_volume += item.volume();
        self.items.push(item);
        Ok(())
    }

    /// Unload the first loaded item the probe matches, under the probe's rule
    ///
    /// Totals are decremented by the removed item's own weight and volume,
    /// which may differ from the probe's. The removed item is returned.
    pub fn unload(&mut self, item: &CargoItem) -> Result<CargoItem> {
        match self.items.iter().position(|loaded| item.matches(loaded)) {
            Some(index) => {
                let removed = self.items.remove(index);
                self.current_weight -= removed.weight();
                self.current_volume -= removed.volume();
                Ok(removed)
            }
            None => Err(Error::NotFound { item: item.clone() }),
        }
    }

    /// Items in load order
    pub fn items(&self) -> Vec<CargoItem> {
        self.items.clone()
    }

    /// Items sorted by id, ascending
    pub fn items_by_id(&self) -> Vec<CargoItem> {
        let mut items = self.items.clone();
        items.sort_by(|a, b| a.id().cmp(b.id()));
        items
    }

    /// Items sorted by weight, heaviest first; ties keep load order
    pub fn items_by_weight_desc(&self) -> Vec<CargoItem> {
        let mut items = self.items.clone();
        items.sort_by(|a, b| b.weight().cmp(&a.weight()));
        items
    }

    /// Items sorted by volume, largest first; ties keep load order
    pub fn items_by_volume_desc(&self) -> Vec<CargoItem> {
        let mut items = self.items.clone();
        items.sort_by(|a, b| b.volume().total_cmp(&a.volume()));
        items
    }
}
