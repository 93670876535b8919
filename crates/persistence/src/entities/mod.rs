//! Entity definitions (database row mappings).

pub mod owner;
pub mod vehicle;

pub use owner::OwnerEntity;
pub use vehicle::VehicleEntity;
