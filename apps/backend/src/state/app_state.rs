use std::sync::Arc;

use crate::repos::sessions::SessionStore;
use crate::state::security_config::SecurityConfig;
use crate::ws::hub::SessionHub;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Session persistence collaborator
    pub store: Arc<dyn SessionStore>,
    /// In-process subscriber registry for change notifications
    pub hub: Arc<SessionHub>,
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn SessionStore>, hub: Arc<SessionHub>, security: SecurityConfig) -> Self {
        Self {
            store,
            hub,
            security,
        }
    }
}
