//! Domain model types

pub mod carrier;
pub mod fleet;

pub use carrier::Carrier;
pub use fleet::FleetRegistry;
