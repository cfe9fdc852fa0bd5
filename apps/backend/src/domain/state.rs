//! Session aggregate and per-player state.
//!
//! These types are the in-memory shape every layer (services, adapters,
//! views) agrees on; the persistence adapter maps them to and from rows.

use serde::{Deserialize, Serialize};

use crate::domain::role::Seat;

/// Coarse encounter phase a seated player is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EncounterStep {
    /// Scenario parameters entered by hand (no code).
    ManualChoice,
    /// Scenario parameters being generated.
    Generate,
    /// Picking crew and/or schemes.
    Choose,
    /// Match running; scoring actions are live.
    Score,
    /// Player has closed out their side of the game.
    FinishedGame,
}

/// Fine-grained sub-phase within [`EncounterStep::Choose`].
///
/// Only meaningful while the session has crew selection enabled; sessions
/// without it carry no sub-phase and go straight to scheme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChooseStep {
    Faction,
    Leader,
    Crew,
    Schemes,
}

/// One of a player's two secret objective cards.
///
/// `revealed` and `score` are independent bits: a scheme can be scored
/// before it is revealed and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeCard {
    pub id: u8,
    pub revealed: bool,
    pub score: Option<i32>,
}

impl SchemeCard {
    pub fn hidden(id: u8) -> Self {
        Self {
            id,
            revealed: false,
            score: None,
        }
    }
}

/// Crew selections. Each field is write-once: `None` until chosen, then
/// locked for the rest of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewChoice {
    pub faction: Option<String>,
    pub leader: Option<String>,
    pub list: Option<String>,
}

/// State of one seated participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Owning user's stable identity. Opaque; only compared for equality.
    pub email: String,
    pub step: EncounterStep,
    pub choose_step: Option<ChooseStep>,
    pub crew: CrewChoice,
    /// `None` until chosen; exactly two entries once set, ids immutable.
    pub schemes: Option<Vec<SchemeCard>>,
    /// Overwritable while the game is active, unlike the crew fields.
    pub strategy_score: i32,
}

impl PlayerState {
    /// Initial state for a freshly seated player.
    pub fn seated(email: impl Into<String>, choose_crew: bool) -> Self {
        Self {
            email: email.into(),
            step: EncounterStep::Choose,
            choose_step: choose_crew.then_some(ChooseStep::Faction),
            crew: CrewChoice::default(),
            schemes: None,
            strategy_score: 0,
        }
    }
}

/// Scenario parameters decoded from an encounter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSetup {
    pub deployment_id: u8,
    pub strategy_id: u8,
    /// The five scheme ids this encounter makes available, sorted
    /// ascending. Duplicates are legal and preserved.
    pub scheme_pool: [u8; 5],
}

/// Creation-time options, fixed for the session's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOptions {
    pub multiplayer: bool,
    pub choose_crew: bool,
}

/// The root aggregate: one shared game record per encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    /// Opaque unique id (ULID string).
    pub id: String,
    pub scenario: ScenarioSetup,
    /// 1-based, advances by exactly 1 per accepted advance.
    pub round: u8,
    pub multiplayer: bool,
    pub choose_crew: bool,
    pub creator: PlayerState,
    /// `None` until exactly one join succeeds; never replaced.
    pub opponent: Option<PlayerState>,
}

impl GameSession {
    pub fn new(
        id: impl Into<String>,
        scenario: ScenarioSetup,
        options: SessionOptions,
        creator_email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            scenario,
            round: 1,
            multiplayer: options.multiplayer,
            choose_crew: options.choose_crew,
            creator: PlayerState::seated(creator_email, options.choose_crew),
            opponent: None,
        }
    }

    pub fn player(&self, seat: Seat) -> Option<&PlayerState> {
        match seat {
            Seat::Creator => Some(&self.creator),
            Seat::Opponent => self.opponent.as_ref(),
        }
    }

    pub fn player_mut(&mut self, seat: Seat) -> Option<&mut PlayerState> {
        match seat {
            Seat::Creator => Some(&mut self.creator),
            Seat::Opponent => self.opponent.as_mut(),
        }
    }

    /// The session is finished only once both seated players have closed
    /// out. Derived, never stored.
    pub fn is_finished(&self) -> bool {
        self.creator.step == EncounterStep::FinishedGame
            && self
                .opponent
                .as_ref()
                .is_some_and(|p| p.step == EncounterStep::FinishedGame)
    }
}
