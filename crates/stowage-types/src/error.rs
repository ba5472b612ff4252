//! Error types for stowage

use serde::Serialize;
use thiserror::Error;

use crate::cargo::CargoItem;

/// Capacity dimension violated by a rejected load
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CapacityKind {
    Weight,
    Volume,
}

impl std::fmt::Display for CapacityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapacityKind::Weight => write!(f, "weight"),
            CapacityKind::Volume => write!(f, "volume"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{kind} capacity exceeded by item: {item}")]
    CapacityExceeded { kind: CapacityKind, item: CargoItem },

    #[error("Item not found in the load: {item}")]
    NotFound { item: CargoItem },

    #[error("No carrier registered with id: {0}")]
    CarrierNotRegistered(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The cargo item carried by capacity and not-found errors
    pub fn item(&self) -> Option<&CargoItem> {
        match self {
            Error::CapacityExceeded { item, .. } | Error::NotFound { item } => Some(item),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
