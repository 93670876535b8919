//! Schema synchronization.
//!
//! Runs once at startup, before the HTTP listener accepts traffic. The
//! statements are idempotent; there is no migrations engine.

use sqlx::PgPool;
use tracing::info;

const CREATE_OWNERS: &str = r#"
CREATE TABLE IF NOT EXISTS owners (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL
)
"#;

// ON DELETE SET NULL: deleting an owner orphans its vehicles instead of
// cascading or restricting.
const CREATE_VEHICLES: &str = r#"
CREATE TABLE IF NOT EXISTS vehicles (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    plate TEXT NOT NULL,
    owner_id INTEGER REFERENCES owners (id) ON DELETE SET NULL
)
"#;

/// Creates or verifies the tables for both entities and their relationship.
pub async fn sync(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_OWNERS).execute(pool).await?;
    sqlx::query(CREATE_VEHICLES).execute(pool).await?;

    info!("Database schema synchronized");
    Ok(())
}
