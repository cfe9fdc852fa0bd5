//! Seat resolution: which of the two seats (if any) an identity occupies.

use serde::{Deserialize, Serialize};

use crate::domain::state::GameSession;

/// A participant's seat in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    Creator,
    Opponent,
}

impl Seat {
    /// The other participant's seat. Total: creator ↔ opponent.
    pub fn other(self) -> Self {
        match self {
            Seat::Creator => Seat::Opponent,
            Seat::Opponent => Seat::Creator,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Seat::Creator => "creator",
            Seat::Opponent => "opponent",
        }
    }
}

/// Resolve an identity to a seat.
///
/// Returns `None` for anyone who is not seated, including an identity
/// that would become the opponent but has not joined yet. A `None`
/// resolution is an authorization failure and must be rejected before
/// any state mutation is attempted.
pub fn resolve(email: &str, session: &GameSession) -> Option<Seat> {
    if session.creator.email == email {
        return Some(Seat::Creator);
    }
    if session
        .opponent
        .as_ref()
        .is_some_and(|p| p.email == email)
    {
        return Some(Seat::Opponent);
    }
    None
}
