//! Vehicle repository for database operations.

use sqlx::{FromRow, PgPool};

use crate::entities::{OwnerEntity, VehicleEntity};
use crate::metrics::QueryTimer;

/// Flattened row for vehicle queries that LEFT JOIN the owner.
///
/// The foreign key guarantees `owner_name` is present exactly when
/// `owner_id` is.
#[derive(Debug, FromRow)]
struct VehicleWithOwnerRow {
    id: i32,
    name: String,
    plate: String,
    owner_id: Option<i32>,
    owner_name: Option<String>,
}

impl From<VehicleWithOwnerRow> for (VehicleEntity, Option<OwnerEntity>) {
    fn from(row: VehicleWithOwnerRow) -> Self {
        let owner = match (row.owner_id, row.owner_name) {
            (Some(id), Some(name)) => Some(OwnerEntity { id, name }),
            _ => None,
        };
        let vehicle = VehicleEntity {
            id: row.id,
            name: row.name,
            plate: row.plate,
            owner_id: row.owner_id,
        };
        (vehicle, owner)
    }
}

/// Repository for vehicle-related database operations.
#[derive(Clone)]
pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    /// Creates a new VehicleRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new vehicle.
    ///
    /// `owner_id` is not checked for existence here; the foreign-key
    /// constraint rejects an unknown owner.
    pub async fn create(
        &self,
        name: &str,
        plate: &str,
        owner_id: Option<i32>,
    ) -> Result<VehicleEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_vehicle");
        let result = sqlx::query_as::<_, VehicleEntity>(
            r#"
            INSERT INTO vehicles (name, plate, owner_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(plate)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find all vehicles, unfiltered, in database order.
    pub async fn find_all(&self) -> Result<Vec<VehicleEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_vehicles");
        let result = sqlx::query_as::<_, VehicleEntity>(
            r#"
            SELECT * FROM vehicles
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find vehicle by id with its owner eagerly loaded.
    pub async fn find_by_id_with_owner(
        &self,
        id: i32,
    ) -> Result<Option<(VehicleEntity, Option<OwnerEntity>)>, sqlx::Error> {
        let timer = QueryTimer::new("find_vehicle_by_id_with_owner");
        let result = sqlx::query_as::<_, VehicleWithOwnerRow>(
            r#"
            SELECT v.id, v.name, v.plate, v.owner_id, o.name AS owner_name
            FROM vehicles v
            LEFT JOIN owners o ON o.id = v.owner_id
            WHERE v.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result.map(|row| row.map(Into::into))
    }

    /// Find all vehicles whose name exactly matches, owners eagerly loaded.
    pub async fn find_all_by_name_with_owner(
        &self,
        name: &str,
    ) -> Result<Vec<(VehicleEntity, Option<OwnerEntity>)>, sqlx::Error> {
        let timer = QueryTimer::new("find_vehicles_by_name_with_owner");
        let result = sqlx::query_as::<_, VehicleWithOwnerRow>(
            r#"
            SELECT v.id, v.name, v.plate, v.owner_id, o.name AS owner_name
            FROM vehicles v
            LEFT JOIN owners o ON o.id = v.owner_id
            WHERE v.name = $1
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result.map(|rows| rows.into_iter().map(Into::into).collect())
    }

    /// Update a vehicle's name, plate, and owner association.
    /// Returns `None` when no row with that id exists.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        plate: &str,
        owner_id: Option<i32>,
    ) -> Result<Option<VehicleEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_vehicle");
        let result = sqlx::query_as::<_, VehicleEntity>(
            r#"
            UPDATE vehicles SET name = $2, plate = $3, owner_id = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(plate)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a vehicle.
    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_vehicle");
        let result = sqlx::query(
            r#"
            DELETE FROM vehicles WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
