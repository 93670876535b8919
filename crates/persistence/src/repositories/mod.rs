//! Repository implementations for database operations.

pub mod owner;
pub mod vehicle;

pub use owner::OwnerRepository;
pub use vehicle::VehicleRepository;
