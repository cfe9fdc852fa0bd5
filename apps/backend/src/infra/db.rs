use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::config::db::db_url;
use crate::error::AppError;

/// Connect to the database. Does NOT run migrations.
pub async fn connect_db() -> Result<DatabaseConnection, AppError> {
    let database_url = db_url()?;
    Database::connect(&database_url)
        .await
        .map_err(|e| AppError::DbUnavailable {
            detail: format!("Failed to connect to database: {e}"),
        })
}

/// Single bootstrap entrypoint: connect, then bring the schema up to date.
pub async fn bootstrap_db() -> Result<DatabaseConnection, AppError> {
    let conn = connect_db().await?;
    Migrator::up(&conn, None)
        .await
        .map_err(|e| AppError::internal(format!("Migrations failed: {e}")))?;
    Ok(conn)
}
