//! Vehicle domain model.
//!
//! Wire field names follow the service's original JSON contract:
//! `nome`, `placa`, `donoId`, and `dono` for the embedded owner.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Owner;

/// Represents a vehicle record.
///
/// `owner_id` is nullable; a vehicle may exist without an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "placa")]
    pub plate: String,
    #[serde(rename = "donoId")]
    pub owner_id: Option<i32>,
}

/// A vehicle with its owner eagerly loaded.
///
/// `owner` is `None` when the vehicle has no owner association.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleWithOwner {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    #[serde(rename = "dono")]
    pub owner: Option<Owner>,
}

/// Request payload for creating a vehicle.
///
/// The owner association is supplied by the caller; existence of the
/// referenced owner is enforced by the database's foreign key, not here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[serde(rename = "nome", default)]
    #[validate(length(min = 1, message = "nome must not be empty"))]
    pub name: String,

    #[serde(rename = "placa", default)]
    #[validate(length(min = 1, message = "placa must not be empty"))]
    pub plate: String,

    #[serde(rename = "donoId", default)]
    pub owner_id: Option<i32>,
}

/// Request payload for updating a vehicle.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[serde(rename = "nome", default)]
    #[validate(length(min = 1, message = "nome must not be empty"))]
    pub name: String,

    #[serde(rename = "placa", default)]
    #[validate(length(min = 1, message = "placa must not be empty"))]
    pub plate: String,

    #[serde(rename = "donoId", default)]
    pub owner_id: Option<i32>,
}
