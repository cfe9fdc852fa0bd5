//! Session lifecycle: creation and joining.

use tracing::info;
use ulid::Ulid;

use crate::domain::commands::SessionUpdate;
use crate::domain::encounter_code;
use crate::domain::role::Seat;
use crate::domain::state::{GameSession, PlayerState, SessionOptions};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::sessions::SessionStore;
use crate::ws::SessionNotifier;

#[derive(Debug, Default)]
pub struct SessionService;

impl SessionService {
    pub fn new() -> Self {
        Self
    }

    /// Create a session from an encounter code.
    ///
    /// The code is decoded before anything touches storage; a malformed
    /// code never leaves a half-created record behind.
    pub async fn create(
        &self,
        store: &dyn SessionStore,
        code: &str,
        options: SessionOptions,
        creator_email: &str,
    ) -> Result<GameSession, DomainError> {
        let scenario = encounter_code::decode(code)?;
        let session = GameSession::new(Ulid::new().to_string(), scenario, options, creator_email);
        store.insert(&session).await?;
        info!(
            session_id = %session.id,
            multiplayer = session.multiplayer,
            choose_crew = session.choose_crew,
            "session created"
        );
        Ok(session)
    }

    /// Seat the joiner as the opponent.
    ///
    /// Rejected when the seat is filled or the joiner created the
    /// session. The seat claim itself is atomic: if two joiners race,
    /// the storage guard turns the loser into the same SeatTaken
    /// rejection a stale read would have produced.
    pub async fn join(
        &self,
        store: &dyn SessionStore,
        notifier: &dyn SessionNotifier,
        session_id: &str,
        joiner_email: &str,
    ) -> Result<GameSession, DomainError> {
        let session = require_session(store, session_id).await?;

        if session.creator.email == joiner_email {
            return Err(DomainError::conflict(
                ConflictKind::AlreadyInSession,
                "you are already in this game",
            ));
        }
        if session.opponent.is_some() {
            return Err(DomainError::conflict(
                ConflictKind::SeatTaken,
                "already 2 players joined this game",
            ));
        }

        let update = SessionUpdate::SeatOpponent {
            player: PlayerState::seated(joiner_email, session.choose_crew),
        };
        if !store.apply(session_id, &update).await? {
            return Err(update.guard_failure());
        }

        info!(session_id = %session_id, "opponent joined");
        notifier.notify(session_id, Seat::Opponent);
        require_session(store, session_id).await
    }
}

pub(crate) async fn require_session(
    store: &dyn SessionStore,
    session_id: &str,
) -> Result<GameSession, DomainError> {
    store.find(session_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Session, format!("no session {session_id}"))
    })
}
