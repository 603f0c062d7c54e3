//! Database migration runner.

use sqlx::PgPool;
use tracing::info;

use gameshelf_core::error::{AppError, ErrorKind};

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    let migrator = sqlx::migrate!("../../migrations");
    let pending = migrator.iter().count();

    migrator.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!(known = pending, "Database migrations completed successfully");
    Ok(())
}
