//! HTTP route handlers.

pub mod health;
pub mod owners;
pub mod vehicles;
