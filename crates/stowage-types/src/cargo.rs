//! Cargo item types and their matching rules

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::error::{Error, Result};

/// Process-wide counter stamping each ad hoc item with a distinct identity
static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

/// Kind of cargo, deciding how an item compares and prints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CargoKind {
    /// Interchangeable goods tracked by id alone
    Bulk,
    /// A packed unit; id, weight and volume all identify it
    Pallet,
    /// One-off cargo matched only against itself
    AdHoc { serial: u64 },
}

impl CargoKind {
    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            CargoKind::Bulk => "bulk",
            CargoKind::Pallet => "pallet",
            CargoKind::AdHoc { .. } => "custom",
        }
    }
}

/// A unit of cargo with an id, a weight in kilograms and a volume in cubic meters
///
/// There is no `PartialEq`; items compare through [`CargoItem::matches`],
/// whose rule depends on the kind of the item it is called on.
#[derive(Debug, Clone, Serialize)]
pub struct CargoItem {
    kind: CargoKind,
    id: String,
    weight: u32,
    volume: f64,
}

impl CargoItem {
    /// Bulk cargo, identified by id alone
    pub fn bulk(id: &str, weight: u32, volume: f64) -> Result<Self> {
        Self::validated(CargoKind::Bulk, id, weight, volume)
    }

    /// Palletized cargo; id, weight and volume together identify it
    pub fn pallet(id: &str, weight: u32, volume: f64) -> Result<Self> {
        if id.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "item id cannot be empty".to_string(),
            ));
        }
        if weight == 0 {
            return Err(Error::InvalidArgument(
                "pallet weight cannot be zero".to_string(),
            ));
        }
        Self::validated(CargoKind::Pallet, id, weight, volume)
    }

    /// One-off cargo with its own identity; only the item itself or a clone matches it
    pub fn ad_hoc(id: &str, weight: u32, volume: f64) -> Result<Self> {
        let serial = NEXT_SERIAL.fetch_add(1, Ordering::Relaxed);
        Self::validated(CargoKind::AdHoc { serial }, id, weight, volume)
    }

    fn validated(kind: CargoKind, id: &str, weight: u32, volume: f64) -> Result<Self> {
        if id.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "item id cannot be empty".to_string(),
            ));
        }
        if weight == 0 {
            return Err(Error::InvalidArgument(
                "item weight must be greater than zero".to_string(),
            ));
        }
        if volume <= 0.0 || volume.is_nan() {
            return Err(Error::InvalidArgument(
                "item volume must be a positive number".to_string(),
            ));
        }
        Ok(Self {
            kind,
            id: id.to_string(),
            weight,
            volume,
        })
    }

    pub fn kind(&self) -> &CargoKind {
        &self.kind
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Whether `other` counts as the same cargo under this item's rule
    ///
    /// Bulk matches any bulk item with the same id. Pallet requires id,
    /// weight and volume to all agree. Ad hoc matches only its own clones.
    /// Items of different kinds never match.
    pub fn matches(&self, other: &CargoItem) -> bool {
        match (&self.kind, &other.kind) {
            (CargoKind::Bulk, CargoKind::Bulk) => self.id == other.id,
            (CargoKind::Pallet, CargoKind::Pallet) => {
                self.id == other.id && self.weight == other.weight && self.volume == other.volume
            }
            (CargoKind::AdHoc { serial: a }, CargoKind::AdHoc { serial: b }) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for CargoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CargoKind::Bulk => write!(
                f,
                "Bulk [ID={}, Weight={}.00 kg, Volume={:.2} m³]",
                self.id, self.weight, self.volume
            ),
            CargoKind::Pallet => write!(
                f,
                "Pallet [ID={}, Weight={}.00 kg, Volume={:.2} m³]",
                self.id, self.weight, self.volume
            ),
            CargoKind::AdHoc { .. } => write!(
                f,
                "Custom [ID={}, Weight={} kg, Volume={:.2} m³]",
                self.id, self.weight, self.volume
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_valid() {
        let item = CargoItem::bulk("V001", 10, 20.0).unwrap();
        assert_eq!(item.id(), "V001");
        assert_eq!(item.weight(), 10);
        assert!((item.volume() - 20.0).abs() < 0.01);
        assert_eq!(item.kind().label(), "bulk");
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = CargoItem::bulk("   ", 10, 20.0).unwrap_err();
        assert!(err.to_string().contains("id cannot be empty"));
    }

    #[test]
    fn test_id_kept_as_given() {
        let item = CargoItem::bulk(" V001 ", 10, 20.0).unwrap();
        assert_eq!(item.id(), " V001 ");
    }

    #[test]
    fn test_zero_weight_rejected() {
        let err = CargoItem::bulk("V001", 0, 20.0).unwrap_err();
        assert!(err.to_string().contains("weight must be greater than zero"));
    }

    #[test]
    fn test_bad_volume_rejected() {
        assert!(CargoItem::bulk("V001", 10, 0.0).is_err());
        assert!(CargoItem::bulk("V001", 10, -1.5).is_err());
        assert!(CargoItem::bulk("V001", 10, f64::NAN).is_err());
    }

    #[test]
    fn test_pallet_zero_weight_has_own_message() {
        let err = CargoItem::pallet("P001", 0, 10.0).unwrap_err();
        assert!(err.to_string().contains("pallet weight cannot be zero"));
    }

    #[test]
    fn test_id_checked_before_weight_and_volume() {
        let err = CargoItem::pallet("", 0, -1.0).unwrap_err();
        assert!(err.to_string().contains("id cannot be empty"));

        let err = CargoItem::pallet("P001", 0, -1.0).unwrap_err();
        assert!(err.to_string().contains("pallet weight cannot be zero"));
    }

    #[test]
    fn test_bulk_matches_by_id_alone() {
        let a = CargoItem::bulk("V001", 10, 20.0).unwrap();
        let b = CargoItem::bulk("V001", 99, 2.5).unwrap();
        let c = CargoItem::bulk("V002", 10, 20.0).unwrap();
        assert!(a.matches(&b));
        assert!(b.matches(&a));
        assert!(!a.matches(&c));
    }

    #[test]
    fn test_pallet_matches_all_fields() {
        let a = CargoItem::pallet("P001", 5, 10.0).unwrap();
        let same = CargoItem::pallet("P001", 5, 10.0).unwrap();
        let heavier = CargoItem::pallet("P001", 6, 10.0).unwrap();
        let bigger = CargoItem::pallet("P001", 5, 10.5).unwrap();
        assert!(a.matches(&same));
        assert!(!a.matches(&heavier));
        assert!(!a.matches(&bigger));
    }

    #[test]
    fn test_kinds_never_cross_match() {
        let bulk = CargoItem::bulk("X1", 5, 1.0).unwrap();
        let pallet = CargoItem::pallet("X1", 5, 1.0).unwrap();
        assert!(!bulk.matches(&pallet));
        assert!(!pallet.matches(&bulk));
    }

    #[test]
    fn test_ad_hoc_matches_only_itself() {
        let a = CargoItem::ad_hoc("CUSTOM", 7, 3.0).unwrap();
        let twin = CargoItem::ad_hoc("CUSTOM", 7, 3.0).unwrap();
        assert!(!a.matches(&twin));
        assert!(a.matches(&a.clone()));
    }

    #[test]
    fn test_display_per_kind() {
        let bulk = CargoItem::bulk("V001", 10, 20.0).unwrap();
        assert_eq!(
            bulk.to_string(),
            "Bulk [ID=V001, Weight=10.00 kg, Volume=20.00 m³]"
        );

        let pallet = CargoItem::pallet("P001", 5, 10.5).unwrap();
        assert_eq!(
            pallet.to_string(),
            "Pallet [ID=P001, Weight=5.00 kg, Volume=10.50 m³]"
        );

        let custom = CargoItem::ad_hoc("C01", 7, 3.0).unwrap();
        assert_eq!(
            custom.to_string(),
            "Custom [ID=C01, Weight=7 kg, Volume=3.00 m³]"
        );
    }
}
