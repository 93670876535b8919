//! Owner domain model.
//!
//! Wire field names follow the service's original JSON contract:
//! `nome` for the name and `carros` for the embedded vehicle collection.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Vehicle;

/// Represents an owner record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
}

/// An owner with its vehicles eagerly loaded.
#[derive(Debug, Clone, Serialize)]
pub struct OwnerWithVehicles {
    #[serde(flatten)]
    pub owner: Owner,
    #[serde(rename = "carros")]
    pub vehicles: Vec<Vehicle>,
}

/// Request payload for creating an owner.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOwnerRequest {
    #[serde(rename = "nome", default)]
    #[validate(length(min = 1, message = "nome must not be empty"))]
    pub name: String,
}

/// Request payload for updating an owner.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateOwnerRequest {
    #[serde(rename = "nome", default)]
    #[validate(length(min = 1, message = "nome must not be empty"))]
    pub name: String,
}
