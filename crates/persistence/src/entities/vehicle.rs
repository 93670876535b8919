//! Vehicle entity (database row mapping).

use sqlx::FromRow;

use domain::models::Vehicle;

/// Database row mapping for the vehicles table.
#[derive(Debug, Clone, FromRow)]
pub struct VehicleEntity {
    pub id: i32,
    pub name: String,
    pub plate: String,
    pub owner_id: Option<i32>,
}

impl From<VehicleEntity> for Vehicle {
    fn from(entity: VehicleEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            plate: entity.plate,
            owner_id: entity.owner_id,
        }
    }
}
