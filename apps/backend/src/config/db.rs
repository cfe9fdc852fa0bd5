use std::env;

use crate::error::AppError;

/// Build the database URL from the environment.
///
/// `DATABASE_URL` wins when set; otherwise the URL is assembled from
/// `POSTGRES_HOST`/`POSTGRES_PORT` (with localhost defaults) plus the
/// required `POSTGRES_DB`/`POSTGRES_USER`/`POSTGRES_PASSWORD`.
pub fn db_url() -> Result<String, AppError> {
    if let Ok(url) = env::var("DATABASE_URL") {
        return Ok(url);
    }

    let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
    let db_name = must_var("POSTGRES_DB")?;
    let username = must_var("POSTGRES_USER")?;
    let password = must_var("POSTGRES_PASSWORD")?;

    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
