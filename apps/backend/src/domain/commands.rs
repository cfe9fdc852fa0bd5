//! Typed command set: every legal mutation of a session, as data.
//!
//! Each variant compiles to a single atomic statement in the persistence
//! adapter. Guarded variants carry their sentinel in the statement itself
//! (`IS NULL` for write-once fields, `round = from` for advancement, the
//! unique seat index for joining), so two concurrent first-writes can
//! never both pass: the loser's statement matches zero rows and the
//! guard failure is surfaced as the same rejection a stale snapshot
//! would have produced.

use crate::domain::role::Seat;
use crate::domain::state::{PlayerState, SchemeCard};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    /// Seat the opponent. Guard: the opponent seat is still empty.
    SeatOpponent { player: PlayerState },
    /// Set faction and advance the sub-phase. Guard: faction unset.
    SetFaction { seat: Seat, value: String },
    /// Set leader and advance the sub-phase. Guard: leader unset.
    SetLeader { seat: Seat, value: String },
    /// Set the crew list and advance the sub-phase. Guard: list unset.
    SetCrewList { seat: Seat, value: String },
    /// Set both schemes and move the player to SCORE. Guard: schemes unset.
    SetSchemes { seat: Seat, schemes: Vec<SchemeCard> },
    /// Advance the session round. Guard: round still equals `from`.
    AdvanceRound { from: u8, to: u8 },
    /// Overwrite the strategy score. Unguarded: re-scoring is legal.
    SetStrategyScore { seat: Seat, score: i32 },
    /// Overwrite the schemes array with reveal/score bits flipped.
    /// Unguarded: both bits are overwrite-permissive, ids never change.
    ReplaceSchemes { seat: Seat, schemes: Vec<SchemeCard> },
    /// Move the player to FINISHED_GAME. Unguarded.
    FinishPlayer { seat: Seat },
}

impl SessionUpdate {
    /// The rejection surfaced when this update's guard matched zero rows.
    ///
    /// For guarded variants that is a concurrent-writer conflict; for
    /// unguarded variants a zero-row update means the player row itself
    /// is missing.
    pub fn guard_failure(&self) -> DomainError {
        match self {
            SessionUpdate::SeatOpponent { .. } => DomainError::conflict(
                ConflictKind::SeatTaken,
                "opponent seat already taken",
            ),
            SessionUpdate::SetFaction { .. } => DomainError::conflict(
                ConflictKind::AlreadyChosen,
                "faction already chosen",
            ),
            SessionUpdate::SetLeader { .. } => DomainError::conflict(
                ConflictKind::AlreadyChosen,
                "leader already chosen",
            ),
            SessionUpdate::SetCrewList { .. } => DomainError::conflict(
                ConflictKind::AlreadyChosen,
                "crew list already chosen",
            ),
            SessionUpdate::SetSchemes { .. } => DomainError::conflict(
                ConflictKind::AlreadyChosen,
                "schemes already chosen",
            ),
            SessionUpdate::AdvanceRound { to, .. } => DomainError::conflict(
                ConflictKind::IncorrectRound,
                format!("round advanced concurrently; {to} is no longer next"),
            ),
            SessionUpdate::SetStrategyScore { seat, .. }
            | SessionUpdate::ReplaceSchemes { seat, .. }
            | SessionUpdate::FinishPlayer { seat } => DomainError::not_found(
                NotFoundKind::Player,
                format!("no {} row to update", seat.as_str()),
            ),
        }
    }
}
