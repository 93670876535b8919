//! Persistence layer for the Vehicle Registry backend.
//!
//! This crate contains:
//! - Database connection management
//! - Schema synchronization run at startup
//! - Entity definitions (database row mappings)
//! - Repository implementations

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
pub mod schema;
