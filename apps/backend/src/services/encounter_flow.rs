//! Encounter flow orchestration: bridges the pure state machines with
//! persistence and notification.
//!
//! Every mutation follows the same shape: load a snapshot, resolve the
//! caller to a seat (authorization happens before anything else), let
//! the domain produce a typed update, apply it as one atomic statement,
//! then notify subscribers. A guard that matches zero rows is surfaced
//! through [`SessionUpdate::guard_failure`] so concurrent writers get
//! the same rejection a stale snapshot would have produced.

use tracing::debug;

use crate::domain::commands::SessionUpdate;
use crate::domain::player_view::{project, PlayerView};
use crate::domain::role::{self, Seat};
use crate::domain::state::GameSession;
use crate::domain::{crew_setup, round_flow};
use crate::errors::domain::DomainError;
use crate::repos::sessions::SessionStore;
use crate::services::sessions::require_session;
use crate::ws::SessionNotifier;

#[derive(Debug, Default)]
pub struct EncounterFlowService;

impl EncounterFlowService {
    pub fn new() -> Self {
        Self
    }

    pub async fn choose_faction(
        &self,
        store: &dyn SessionStore,
        notifier: &dyn SessionNotifier,
        session_id: &str,
        email: &str,
        value: String,
    ) -> Result<(Seat, GameSession), DomainError> {
        self.mutate(store, notifier, session_id, email, |session, seat| {
            crew_setup::choose_faction(session, seat, value)
        })
        .await
    }

    pub async fn choose_leader(
        &self,
        store: &dyn SessionStore,
        notifier: &dyn SessionNotifier,
        session_id: &str,
        email: &str,
        value: String,
    ) -> Result<(Seat, GameSession), DomainError> {
        self.mutate(store, notifier, session_id, email, |session, seat| {
            crew_setup::choose_leader(session, seat, value)
        })
        .await
    }

    pub async fn choose_crew_list(
        &self,
        store: &dyn SessionStore,
        notifier: &dyn SessionNotifier,
        session_id: &str,
        email: &str,
        value: String,
    ) -> Result<(Seat, GameSession), DomainError> {
        self.mutate(store, notifier, session_id, email, |session, seat| {
            crew_setup::choose_crew_list(session, seat, value)
        })
        .await
    }

    pub async fn choose_schemes(
        &self,
        store: &dyn SessionStore,
        notifier: &dyn SessionNotifier,
        session_id: &str,
        email: &str,
        scheme_ids: &[u8],
    ) -> Result<(Seat, GameSession), DomainError> {
        self.mutate(store, notifier, session_id, email, |session, seat| {
            crew_setup::choose_schemes(session, seat, scheme_ids)
        })
        .await
    }

    pub async fn advance_round(
        &self,
        store: &dyn SessionStore,
        notifier: &dyn SessionNotifier,
        session_id: &str,
        email: &str,
        requested: u8,
    ) -> Result<(Seat, GameSession), DomainError> {
        self.mutate(store, notifier, session_id, email, |session, _seat| {
            round_flow::advance_round(session, requested)
        })
        .await
    }

    pub async fn set_strategy_score(
        &self,
        store: &dyn SessionStore,
        notifier: &dyn SessionNotifier,
        session_id: &str,
        email: &str,
        score: i32,
    ) -> Result<(Seat, GameSession), DomainError> {
        self.mutate(store, notifier, session_id, email, |session, seat| {
            round_flow::set_strategy_score(session, seat, score)
        })
        .await
    }

    pub async fn reveal_scheme(
        &self,
        store: &dyn SessionStore,
        notifier: &dyn SessionNotifier,
        session_id: &str,
        email: &str,
        scheme_id: u8,
    ) -> Result<(Seat, GameSession), DomainError> {
        self.mutate(store, notifier, session_id, email, |session, seat| {
            round_flow::reveal_scheme(session, seat, scheme_id)
        })
        .await
    }

    pub async fn score_scheme(
        &self,
        store: &dyn SessionStore,
        notifier: &dyn SessionNotifier,
        session_id: &str,
        email: &str,
        scheme_id: u8,
        score: i32,
    ) -> Result<(Seat, GameSession), DomainError> {
        self.mutate(store, notifier, session_id, email, |session, seat| {
            round_flow::score_scheme(session, seat, scheme_id, score)
        })
        .await
    }

    pub async fn end_game(
        &self,
        store: &dyn SessionStore,
        notifier: &dyn SessionNotifier,
        session_id: &str,
        email: &str,
    ) -> Result<(Seat, GameSession), DomainError> {
        self.mutate(store, notifier, session_id, email, |session, seat| {
            round_flow::end_game(session, seat)
        })
        .await
    }

    /// The caller's filtered view of the session.
    pub async fn view(
        &self,
        store: &dyn SessionStore,
        session_id: &str,
        email: &str,
    ) -> Result<PlayerView, DomainError> {
        let session = require_session(store, session_id).await?;
        let seat = resolve_seat(email, &session)?;
        Ok(project(seat, &session))
    }

    async fn mutate<F>(
        &self,
        store: &dyn SessionStore,
        notifier: &dyn SessionNotifier,
        session_id: &str,
        email: &str,
        build: F,
    ) -> Result<(Seat, GameSession), DomainError>
    where
        F: FnOnce(&GameSession, Seat) -> Result<SessionUpdate, DomainError>,
    {
        let session = require_session(store, session_id).await?;
        let seat = resolve_seat(email, &session)?;

        let update = build(&session, seat)?;
        debug!(session_id = %session_id, seat = %seat.as_str(), update = ?update, "applying update");
        if !store.apply(session_id, &update).await? {
            return Err(update.guard_failure());
        }

        notifier.notify(session_id, seat);
        let refreshed = require_session(store, session_id).await?;
        Ok((seat, refreshed))
    }
}

fn resolve_seat(email: &str, session: &GameSession) -> Result<Seat, DomainError> {
    role::resolve(email, session)
        .ok_or_else(|| DomainError::forbidden("you are not a participant in this game"))
}
