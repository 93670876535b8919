//! Vehicle endpoint handlers.
//!
//! Success bodies speak the original wire contract (`nome`, `placa`,
//! `donoId`, `dono`); missing records answer 404 with an empty JSON object.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::VehicleRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest};
use domain::models::{Vehicle, VehicleWithOwner};

/// Create a new vehicle.
///
/// POST /vehicle/
///
/// The owner association comes from the caller; a `donoId` matching no
/// owner is rejected by the database's foreign key and surfaced as a
/// validation failure.
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<Vehicle>, ApiError> {
    request.validate()?;

    let repo = VehicleRepository::new(state.pool.clone());
    let entity = repo
        .create(&request.name, &request.plate, request.owner_id)
        .await?;
    let vehicle: Vehicle = entity.into();

    info!(vehicle_id = vehicle.id, "Vehicle created");
    Ok(Json(vehicle))
}

/// List all vehicles.
///
/// GET /vehicle/
pub async fn list_vehicles(State(state): State<AppState>) -> Result<Json<Vec<Vehicle>>, ApiError> {
    let repo = VehicleRepository::new(state.pool.clone());
    let vehicles = repo
        .find_all()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(vehicles))
}

/// Get a vehicle by id, owner included.
///
/// GET /vehicle/:id
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VehicleWithOwner>, ApiError> {
    let repo = VehicleRepository::new(state.pool.clone());
    let (vehicle, owner) = repo
        .find_by_id_with_owner(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(VehicleWithOwner {
        vehicle: vehicle.into(),
        owner: owner.map(Into::into),
    }))
}

/// List vehicles by exact name, owners included.
///
/// GET /vehicle/name/:name
///
/// An empty match set is the not-found signal.
pub async fn list_vehicles_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<VehicleWithOwner>>, ApiError> {
    let repo = VehicleRepository::new(state.pool.clone());
    let rows = repo.find_all_by_name_with_owner(&name).await?;

    if rows.is_empty() {
        return Err(ApiError::NotFound);
    }

    let vehicles = rows
        .into_iter()
        .map(|(vehicle, owner)| VehicleWithOwner {
            vehicle: vehicle.into(),
            owner: owner.map(Into::into),
        })
        .collect();

    Ok(Json(vehicles))
}

/// Update a vehicle's name, plate, and owner association.
///
/// PUT /vehicle/:id
///
/// Zero rows affected is the not-found signal, not an error.
pub async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<Vehicle>, ApiError> {
    request.validate()?;

    let repo = VehicleRepository::new(state.pool.clone());
    let entity = repo
        .update(id, &request.name, &request.plate, request.owner_id)
        .await?
        .ok_or(ApiError::NotFound)?;

    info!(vehicle_id = id, "Vehicle updated");
    Ok(Json(entity.into()))
}

/// Delete a vehicle.
///
/// DELETE /vehicle/:id
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let repo = VehicleRepository::new(state.pool.clone());
    let deleted = repo.delete(id).await?;

    if deleted == 0 {
        return Err(ApiError::NotFound);
    }

    info!(vehicle_id = id, "Vehicle deleted");
    Ok(StatusCode::NO_CONTENT)
}
