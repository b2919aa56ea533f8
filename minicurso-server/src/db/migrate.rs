//! Schema migrations
//!
//! The SQL lives in the workspace `migrations/` directory and is embedded
//! at compile time.

use sqlx::migrate::Migrator;
use sqlx::PgPool;

use super::DbError;

/// Embedded migrations for the students/courses/enrollments schema.
pub static MIGRATOR: Migrator = sqlx::migrate!("../migrations");

/// Apply all pending migrations.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running migrations...");
    MIGRATOR.run(pool).await?;
    tracing::info!("Migrations complete");
    Ok(())
}

/// Revert every applied migration, dropping the schema.
pub async fn revert(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Reverting migrations...");
    MIGRATOR.undo(pool, 0).await?;
    tracing::info!("Migrations reverted");
    Ok(())
}
