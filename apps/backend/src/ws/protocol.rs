//! Wire protocol for session subscribers.

use serde::{Deserialize, Serialize};

use crate::domain::role::Seat;

/// Messages pushed to subscribers of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    /// The session changed; re-fetch your projected view. Never carries
    /// the content of the change.
    StateChanged { session_id: String, acted: Seat },
}
