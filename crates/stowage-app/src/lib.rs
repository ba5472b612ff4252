//! Application service layer - fleet sessions, manifest loading, config

pub mod config;
pub mod directory;
pub mod manifest;

pub use config::Config;
pub use directory::FleetDirectory;
pub use manifest::{load_manifest, ManifestError};
