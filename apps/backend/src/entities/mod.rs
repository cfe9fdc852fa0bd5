pub mod session_players;
pub mod sessions;
