use std::sync::Arc;

use crate::adapters::sessions_sea::SessionStoreSea;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;
use crate::ws::hub::SessionHub;

/// Build the production AppState: connected store, fresh hub.
pub async fn build_state(security: SecurityConfig) -> Result<AppState, AppError> {
    let conn = bootstrap_db().await?;
    let store = Arc::new(SessionStoreSea::new(conn));
    let hub = Arc::new(SessionHub::new());
    Ok(AppState::new(store, hub, security))
}
