//! Owner endpoint handlers.
//!
//! Success bodies speak the original wire contract (`nome`, `carros`);
//! missing records answer 404 with an empty JSON object.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::OwnerRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::owner::{CreateOwnerRequest, UpdateOwnerRequest};
use domain::models::{Owner, OwnerWithVehicles};

/// Create a new owner.
///
/// POST /owner/
pub async fn create_owner(
    State(state): State<AppState>,
    Json(request): Json<CreateOwnerRequest>,
) -> Result<Json<Owner>, ApiError> {
    request.validate()?;

    let repo = OwnerRepository::new(state.pool.clone());
    let entity = repo.create(&request.name).await?;
    let owner: Owner = entity.into();

    info!(owner_id = owner.id, "Owner created");
    Ok(Json(owner))
}

/// List all owners.
///
/// GET /owner/
pub async fn list_owners(State(state): State<AppState>) -> Result<Json<Vec<Owner>>, ApiError> {
    let repo = OwnerRepository::new(state.pool.clone());
    let owners = repo
        .find_all()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(owners))
}

/// Get an owner by id, vehicles included.
///
/// GET /owner/:id
pub async fn get_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<OwnerWithVehicles>, ApiError> {
    let repo = OwnerRepository::new(state.pool.clone());
    let entity = repo.find_by_id(id).await?.ok_or(ApiError::NotFound)?;
    let vehicles = repo.find_vehicles(entity.id).await?;

    Ok(Json(OwnerWithVehicles {
        owner: entity.into(),
        vehicles: vehicles.into_iter().map(Into::into).collect(),
    }))
}

/// List owners by exact name, vehicles included.
///
/// GET /owner/name/:name
///
/// An empty match set is the not-found signal.
pub async fn list_owners_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<OwnerWithVehicles>>, ApiError> {
    let repo = OwnerRepository::new(state.pool.clone());
    let entities = repo.find_all_by_name(&name).await?;

    if entities.is_empty() {
        return Err(ApiError::NotFound);
    }

    let mut owners = Vec::with_capacity(entities.len());
    for entity in entities {
        let vehicles = repo.find_vehicles(entity.id).await?;
        owners.push(OwnerWithVehicles {
            owner: entity.into(),
            vehicles: vehicles.into_iter().map(Into::into).collect(),
        });
    }

    Ok(Json(owners))
}

/// Update an owner's name.
///
/// PUT /owner/:id
///
/// Zero rows affected is the not-found signal, not an error.
pub async fn update_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateOwnerRequest>,
) -> Result<Json<Owner>, ApiError> {
    request.validate()?;

    let repo = OwnerRepository::new(state.pool.clone());
    let entity = repo
        .update(id, &request.name)
        .await?
        .ok_or(ApiError::NotFound)?;

    info!(owner_id = id, "Owner updated");
    Ok(Json(entity.into()))
}

/// Delete an owner.
///
/// DELETE /owner/:id
///
/// The foreign key orphans the owner's vehicles (owner_id set to null).
pub async fn delete_owner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let repo = OwnerRepository::new(state.pool.clone());
    let deleted = repo.delete(id).await?;

    if deleted == 0 {
        return Err(ApiError::NotFound);
    }

    info!(owner_id = id, "Owner deleted");
    Ok(StatusCode::NO_CONTENT)
}
