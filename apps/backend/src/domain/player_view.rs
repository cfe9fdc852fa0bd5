//! Player view of a session — what information is visible to a seat.
//!
//! This is the only place opponent-visibility rules live. Everything a
//! caller may learn about the other player flows through [`project`];
//! handlers never filter state themselves.

use serde::Serialize;

use crate::domain::role::Seat;
use crate::domain::state::{
    ChooseStep, CrewChoice, EncounterStep, GameSession, PlayerState, ScenarioSetup, SchemeCard,
};

/// Result of projecting a session for a seat.
///
/// A finished player gets the terminal variant instead of live state;
/// their side of the game is over and cannot be re-fetched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PlayerView {
    Finished,
    Live(LiveView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveView {
    pub session_id: String,
    pub seat: Seat,
    pub round: u8,
    pub scenario: ScenarioSetup,
    pub multiplayer: bool,
    pub choose_crew: bool,
    /// The caller's own state, verbatim.
    pub you: PlayerState,
    /// The other seat, filtered.
    pub opponent: OpponentView,
}

/// What a player is entitled to see of their opponent.
///
/// Crew selections, step, and strategy score are public; schemes are the
/// only secret. Unrevealed schemes are omitted entirely — not masked —
/// so nothing about them leaks. The default value doubles as "no
/// opponent": callers treat an empty seat and an opponent who has chosen
/// nothing yet identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OpponentView {
    pub seated: bool,
    pub step: Option<EncounterStep>,
    pub choose_step: Option<ChooseStep>,
    pub crew: CrewChoice,
    pub strategy_score: i32,
    pub revealed_schemes: Vec<SchemeCard>,
}

impl OpponentView {
    fn from_player(player: &PlayerState) -> Self {
        Self {
            seated: true,
            step: Some(player.step),
            choose_step: player.choose_step,
            crew: player.crew.clone(),
            strategy_score: player.strategy_score,
            revealed_schemes: player
                .schemes
                .as_deref()
                .unwrap_or_default()
                .iter()
                .filter(|card| card.revealed)
                .copied()
                .collect(),
        }
    }
}

/// Derive the view `seat` is entitled to see of `session`.
pub fn project(seat: Seat, session: &GameSession) -> PlayerView {
    let Some(you) = session.player(seat) else {
        // Resolution happens before projection; an unseated caller here
        // means the session lost a player row, surface an empty finish.
        return PlayerView::Finished;
    };

    if you.step == EncounterStep::FinishedGame {
        return PlayerView::Finished;
    }

    let opponent = if !session.multiplayer {
        OpponentView::default()
    } else {
        match session.player(seat.other()) {
            Some(other) => OpponentView::from_player(other),
            None => OpponentView::default(),
        }
    };

    PlayerView::Live(LiveView {
        session_id: session.id.clone(),
        seat,
        round: session.round,
        scenario: session.scenario,
        multiplayer: session.multiplayer,
        choose_crew: session.choose_crew,
        you: you.clone(),
        opponent,
    })
}
