//! Domain models for the Vehicle Registry.

pub mod owner;
pub mod vehicle;

pub use owner::{Owner, OwnerWithVehicles};
pub use vehicle::{Vehicle, VehicleWithOwner};
