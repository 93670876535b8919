//! Domain layer for the Vehicle Registry backend.
//!
//! This crate contains:
//! - Domain models (Owner, Vehicle) and their composed with-relationship shapes
//! - Request payload types with presence validation

pub mod models;
