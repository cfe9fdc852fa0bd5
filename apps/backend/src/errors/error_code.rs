//! Error codes for the backend API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Access denied
    Forbidden,
    /// Caller is not seated in the session
    NotAParticipant,

    // Request Validation
    /// Encounter code failed to decode
    InvalidEncounterCode,
    /// Wrong number of schemes supplied
    InvalidSchemeCount,
    /// Scheme id is not part of the session's pool
    SchemeNotInPool,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Session not found
    SessionNotFound,
    /// Player not found
    PlayerNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Write-once field already populated
    AlreadyChosen,
    /// Opponent seat already taken
    SeatTaken,
    /// Joiner already occupies a seat
    AlreadyInSession,
    /// Requested round is not current + 1
    IncorrectRound,
    /// Scheme id not among the player's two schemes
    UnknownScheme,
    /// Player (or session) already finished
    GameFinished,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Internal server error
    InternalError,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    /// Canonical SCREAMING_SNAKE_CASE string for HTTP responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::NotAParticipant => "NOT_A_PARTICIPANT",
            ErrorCode::InvalidEncounterCode => "INVALID_ENCOUNTER_CODE",
            ErrorCode::InvalidSchemeCount => "INVALID_SCHEME_COUNT",
            ErrorCode::SchemeNotInPool => "SCHEME_NOT_IN_POOL",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::SessionNotFound => "SESSION_NOT_FOUND",
            ErrorCode::PlayerNotFound => "PLAYER_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::AlreadyChosen => "ALREADY_CHOSEN",
            ErrorCode::SeatTaken => "SEAT_TAKEN",
            ErrorCode::AlreadyInSession => "ALREADY_IN_SESSION",
            ErrorCode::IncorrectRound => "INCORRECT_ROUND",
            ErrorCode::UnknownScheme => "UNKNOWN_SCHEME",
            ErrorCode::GameFinished => "GAME_FINISHED",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::DbError => "DB_ERROR",
            ErrorCode::DbUnavailable => "DB_UNAVAILABLE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
