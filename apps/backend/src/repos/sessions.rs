//! Persistence collaborator for game sessions.

use async_trait::async_trait;

use crate::domain::commands::SessionUpdate;
use crate::domain::state::GameSession;
use crate::errors::domain::DomainError;

/// Storage seam for the session aggregate.
///
/// `apply` executes exactly one atomic conditional delta. `Ok(false)`
/// means the update's guard matched nothing (a concurrent first-write or
/// a stale round), never an operational failure; infra errors come back
/// as `Err`. There is deliberately no broader transaction primitive:
/// every mutation in the system is a single statement.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn find(&self, id: &str) -> Result<Option<GameSession>, DomainError>;

    async fn insert(&self, session: &GameSession) -> Result<(), DomainError>;

    async fn apply(&self, id: &str, update: &SessionUpdate) -> Result<bool, DomainError>;
}
