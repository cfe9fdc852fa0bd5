use crate::domain::state::{GameSession, PlayerState, ScenarioSetup, SessionOptions};

pub const CREATOR: &str = "creator@example.com";
pub const OPPONENT: &str = "opponent@example.com";

pub fn scenario() -> ScenarioSetup {
    ScenarioSetup {
        deployment_id: 2,
        strategy_id: 1,
        scheme_pool: [0, 3, 4, 11, 12],
    }
}

pub fn session(options: SessionOptions) -> GameSession {
    GameSession::new("01JTEST0000000000000000000", scenario(), options, CREATOR)
}

/// Two-player session with both seats filled, crew selection on.
pub fn two_player_session() -> GameSession {
    let mut s = session(SessionOptions {
        multiplayer: true,
        choose_crew: true,
    });
    s.opponent = Some(PlayerState::seated(OPPONENT, s.choose_crew));
    s
}
