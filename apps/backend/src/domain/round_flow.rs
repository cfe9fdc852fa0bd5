//! Round and scoring state machine.
//!
//! Independent of crew setup: these operations assume the caller is a
//! seated participant and otherwise validate only against the session
//! snapshot. Strategy score and the per-scheme bits are overwrite-
//! permissive; only round advancement carries a stale-snapshot guard.

use crate::domain::commands::SessionUpdate;
use crate::domain::crew_setup::{ensure_active, require_player};
use crate::domain::role::Seat;
use crate::domain::state::{EncounterStep, GameSession, SchemeCard};
use crate::errors::domain::{ConflictKind, DomainError};

/// Advance the session round.
///
/// Accepted only when `requested` is exactly the current round plus one.
/// There is deliberately no completion gate: whether the previous
/// round's schemes and scores were filled in is the players' business.
pub fn advance_round(session: &GameSession, requested: u8) -> Result<SessionUpdate, DomainError> {
    if session.is_finished() {
        return Err(DomainError::conflict(
            ConflictKind::GameFinished,
            "game already finished",
        ));
    }
    let expected = session.round + 1;
    if requested != expected {
        return Err(DomainError::conflict(
            ConflictKind::IncorrectRound,
            format!("incorrect round: expected {expected}, got {requested}"),
        ));
    }
    Ok(SessionUpdate::AdvanceRound {
        from: session.round,
        to: requested,
    })
}

/// Overwrite the player's strategy score. Repeatable.
pub fn set_strategy_score(
    session: &GameSession,
    seat: Seat,
    score: i32,
) -> Result<SessionUpdate, DomainError> {
    let player = require_player(session, seat)?;
    ensure_active(player)?;
    Ok(SessionUpdate::SetStrategyScore { seat, score })
}

/// Flip the `revealed` bit on the scheme matching `scheme_id`.
pub fn reveal_scheme(
    session: &GameSession,
    seat: Seat,
    scheme_id: u8,
) -> Result<SessionUpdate, DomainError> {
    let schemes = with_scheme(session, seat, scheme_id, |card| card.revealed = true)?;
    Ok(SessionUpdate::ReplaceSchemes { seat, schemes })
}

/// Set the score on the scheme matching `scheme_id`.
///
/// Scoring does not require the scheme to be revealed first; the two
/// bits are independent.
pub fn score_scheme(
    session: &GameSession,
    seat: Seat,
    scheme_id: u8,
    score: i32,
) -> Result<SessionUpdate, DomainError> {
    let schemes = with_scheme(session, seat, scheme_id, |card| card.score = Some(score))?;
    Ok(SessionUpdate::ReplaceSchemes { seat, schemes })
}

/// Close out the acting player's side of the game.
///
/// Per-player, not session-wide: the other participant keeps playing
/// until they end their own game.
pub fn end_game(session: &GameSession, seat: Seat) -> Result<SessionUpdate, DomainError> {
    let player = require_player(session, seat)?;
    if player.step == EncounterStep::FinishedGame {
        return Err(DomainError::conflict(
            ConflictKind::GameFinished,
            "game already finished for this player",
        ));
    }
    Ok(SessionUpdate::FinishPlayer { seat })
}

/// Copy the player's schemes with `mutate` applied to the entry matching
/// `scheme_id`. Two entries max, so the lookup is a linear scan.
fn with_scheme(
    session: &GameSession,
    seat: Seat,
    scheme_id: u8,
    mutate: impl FnOnce(&mut SchemeCard),
) -> Result<Vec<SchemeCard>, DomainError> {
    let player = require_player(session, seat)?;
    ensure_active(player)?;

    let unknown = || {
        DomainError::conflict(
            ConflictKind::UnknownScheme,
            format!("scheme {scheme_id} is not among this player's schemes"),
        )
    };

    let mut schemes = player.schemes.clone().ok_or_else(unknown)?;
    let card = schemes
        .iter_mut()
        .find(|card| card.id == scheme_id)
        .ok_or_else(unknown)?;
    mutate(card);
    Ok(schemes)
}
