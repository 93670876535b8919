//! Owner repository for database operations.

use sqlx::PgPool;

use crate::entities::{OwnerEntity, VehicleEntity};
use crate::metrics::QueryTimer;

/// Repository for owner-related database operations.
#[derive(Clone)]
pub struct OwnerRepository {
    pool: PgPool,
}

impl OwnerRepository {
    /// Creates a new OwnerRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new owner.
    pub async fn create(&self, name: &str) -> Result<OwnerEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_owner");
        let result = sqlx::query_as::<_, OwnerEntity>(
            r#"
            INSERT INTO owners (name)
            VALUES ($1)
            RETURNING *
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find all owners, unfiltered, in database order.
    pub async fn find_all(&self) -> Result<Vec<OwnerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_owners");
        let result = sqlx::query_as::<_, OwnerEntity>(
            r#"
            SELECT * FROM owners
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find owner by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<OwnerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_owner_by_id");
        let result = sqlx::query_as::<_, OwnerEntity>(
            r#"
            SELECT * FROM owners WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find all owners whose name exactly matches.
    pub async fn find_all_by_name(&self, name: &str) -> Result<Vec<OwnerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_owners_by_name");
        let result = sqlx::query_as::<_, OwnerEntity>(
            r#"
            SELECT * FROM owners WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find all vehicles associated with an owner (the eager-loading include).
    pub async fn find_vehicles(&self, owner_id: i32) -> Result<Vec<VehicleEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_owner_vehicles");
        let result = sqlx::query_as::<_, VehicleEntity>(
            r#"
            SELECT * FROM vehicles WHERE owner_id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update an owner's name.
    /// Returns `None` when no row with that id exists.
    pub async fn update(&self, id: i32, name: &str) -> Result<Option<OwnerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_owner");
        let result = sqlx::query_as::<_, OwnerEntity>(
            r#"
            UPDATE owners SET name = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete an owner.
    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_owner");
        let result = sqlx::query(
            r#"
            DELETE FROM owners WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
