//! Crew-setup state machine: FACTION → LEADER → CREW → SCHEMES → done.
//!
//! Each operation validates against a snapshot of the session and
//! returns the [`SessionUpdate`] that realizes the transition. "Already
//! chosen" is a defined rejection, not an error: the write-once check
//! here catches the common case early, and the adapter's conditional
//! guard catches the concurrent one.

use crate::domain::commands::SessionUpdate;
use crate::domain::role::Seat;
use crate::domain::state::{EncounterStep, GameSession, PlayerState, SchemeCard};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};

/// Schemes a player commits to at the end of crew setup.
pub const SCHEMES_PER_PLAYER: usize = 2;

pub(crate) fn require_player(session: &GameSession, seat: Seat) -> Result<&PlayerState, DomainError> {
    session.player(seat).ok_or_else(|| {
        DomainError::not_found(
            NotFoundKind::Player,
            format!("{} has not joined this session", seat.as_str()),
        )
    })
}

pub(crate) fn ensure_active(player: &PlayerState) -> Result<(), DomainError> {
    if player.step == EncounterStep::FinishedGame {
        return Err(DomainError::conflict(
            ConflictKind::GameFinished,
            "game already finished for this player",
        ));
    }
    Ok(())
}

fn ensure_crew_enabled(session: &GameSession) -> Result<(), DomainError> {
    if !session.choose_crew {
        return Err(DomainError::conflict(
            ConflictKind::Other("CREW_DISABLED".into()),
            "crew selection is not enabled for this session",
        ));
    }
    Ok(())
}

pub fn choose_faction(
    session: &GameSession,
    seat: Seat,
    value: String,
) -> Result<SessionUpdate, DomainError> {
    ensure_crew_enabled(session)?;
    let player = require_player(session, seat)?;
    ensure_active(player)?;
    if player.crew.faction.is_some() {
        return Err(DomainError::conflict(
            ConflictKind::AlreadyChosen,
            "faction already chosen",
        ));
    }
    Ok(SessionUpdate::SetFaction { seat, value })
}

pub fn choose_leader(
    session: &GameSession,
    seat: Seat,
    value: String,
) -> Result<SessionUpdate, DomainError> {
    ensure_crew_enabled(session)?;
    let player = require_player(session, seat)?;
    ensure_active(player)?;
    if player.crew.leader.is_some() {
        return Err(DomainError::conflict(
            ConflictKind::AlreadyChosen,
            "leader already chosen",
        ));
    }
    Ok(SessionUpdate::SetLeader { seat, value })
}

pub fn choose_crew_list(
    session: &GameSession,
    seat: Seat,
    value: String,
) -> Result<SessionUpdate, DomainError> {
    ensure_crew_enabled(session)?;
    let player = require_player(session, seat)?;
    ensure_active(player)?;
    if player.crew.list.is_some() {
        return Err(DomainError::conflict(
            ConflictKind::AlreadyChosen,
            "crew list already chosen",
        ));
    }
    Ok(SessionUpdate::SetCrewList { seat, value })
}

/// Commit the player's two schemes and move them to SCORE.
///
/// Works with or without crew selection: sessions without it skip the
/// faction/leader/list sub-steps and land here directly.
pub fn choose_schemes(
    session: &GameSession,
    seat: Seat,
    scheme_ids: &[u8],
) -> Result<SessionUpdate, DomainError> {
    let player = require_player(session, seat)?;
    ensure_active(player)?;

    if scheme_ids.len() != SCHEMES_PER_PLAYER {
        return Err(DomainError::validation(
            ValidationKind::SchemeCount,
            format!(
                "expected {SCHEMES_PER_PLAYER} schemes, got {}",
                scheme_ids.len()
            ),
        ));
    }

    // Both picks must come from the encounter's pool. The pool may hold
    // duplicates, so a doubled pick of a doubled scheme is legal.
    let mut remaining: Vec<u8> = session.scenario.scheme_pool.to_vec();
    for id in scheme_ids {
        match remaining.iter().position(|p| p == id) {
            Some(idx) => {
                remaining.swap_remove(idx);
            }
            None => {
                return Err(DomainError::validation(
                    ValidationKind::SchemeNotInPool,
                    format!("scheme {id} is not available in this encounter"),
                ));
            }
        }
    }

    if player.schemes.is_some() {
        return Err(DomainError::conflict(
            ConflictKind::AlreadyChosen,
            "schemes already chosen",
        ));
    }

    let schemes = scheme_ids.iter().copied().map(SchemeCard::hidden).collect();
    Ok(SessionUpdate::SetSchemes { seat, schemes })
}
