//! Domain layer: pure encounter logic, no HTTP, no DB.

pub mod commands;
pub mod crew_setup;
pub mod encounter_code;
pub mod player_view;
pub mod role;
pub mod round_flow;
pub mod state;

#[cfg(test)]
mod test_helpers;

#[cfg(test)]
mod tests_crew_setup;
#[cfg(test)]
mod tests_encounter_code;
#[cfg(test)]
mod tests_player_view;
#[cfg(test)]
mod tests_props_codec;
#[cfg(test)]
mod tests_role;
#[cfg(test)]
mod tests_round_flow;

// Re-exports for ergonomics
pub use commands::SessionUpdate;
pub use role::Seat;
pub use state::{GameSession, PlayerState, SchemeCard, ScenarioSetup, SessionOptions};
