use actix_web::http::StatusCode;

use crate::error::AppError;
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::ErrorCode;

fn mapped(err: DomainError) -> AppError {
    AppError::from(err)
}

#[test]
fn malformed_input_maps_to_bad_request() {
    let app = mapped(DomainError::validation(
        ValidationKind::InvalidEncounterCode,
        "bad code",
    ));
    assert_eq!(app.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.code(), ErrorCode::InvalidEncounterCode);

    let app = mapped(DomainError::validation(ValidationKind::SchemeCount, "3 of 2"));
    assert_eq!(app.code(), ErrorCode::InvalidSchemeCount);
}

#[test]
fn preconditions_map_to_conflict() {
    let cases = [
        (ConflictKind::AlreadyChosen, ErrorCode::AlreadyChosen),
        (ConflictKind::SeatTaken, ErrorCode::SeatTaken),
        (ConflictKind::AlreadyInSession, ErrorCode::AlreadyInSession),
        (ConflictKind::IncorrectRound, ErrorCode::IncorrectRound),
        (ConflictKind::UnknownScheme, ErrorCode::UnknownScheme),
        (ConflictKind::GameFinished, ErrorCode::GameFinished),
    ];
    for (kind, code) in cases {
        let app = mapped(DomainError::conflict(kind, "rejected"));
        assert_eq!(app.status(), StatusCode::CONFLICT);
        assert_eq!(app.code(), code);
    }
}

#[test]
fn missing_session_maps_to_not_found() {
    let app = mapped(DomainError::not_found(NotFoundKind::Session, "gone"));
    assert_eq!(app.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.code(), ErrorCode::SessionNotFound);
}

#[test]
fn non_participant_maps_to_forbidden() {
    let app = mapped(DomainError::forbidden("not seated"));
    assert_eq!(app.status(), StatusCode::FORBIDDEN);
    assert_eq!(app.code(), ErrorCode::NotAParticipant);
}

#[test]
fn infra_failures_stay_distinct_from_domain_outcomes() {
    let app = mapped(DomainError::infra(InfraErrorKind::DbUnavailable, "down"));
    assert_eq!(app.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(app.code(), ErrorCode::DbUnavailable);

    let app = mapped(DomainError::infra(InfraErrorKind::DataCorruption, "bad row"));
    assert_eq!(app.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn error_codes_render_screaming_snake_case() {
    assert_eq!(ErrorCode::AlreadyChosen.to_string(), "ALREADY_CHOSEN");
    assert_eq!(ErrorCode::IncorrectRound.to_string(), "INCORRECT_ROUND");
    assert_eq!(
        ErrorCode::UnauthorizedMissingBearer.to_string(),
        "UNAUTHORIZED_MISSING_BEARER"
    );
}
