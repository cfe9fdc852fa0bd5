use crate::domain::commands::SessionUpdate;
use crate::domain::role::Seat;
use crate::domain::round_flow::{
    advance_round, end_game, reveal_scheme, score_scheme, set_strategy_score,
};
use crate::domain::state::{EncounterStep, SchemeCard};
use crate::domain::test_helpers::two_player_session;
use crate::errors::domain::{ConflictKind, DomainError};

fn session_with_schemes() -> crate::domain::state::GameSession {
    let mut s = two_player_session();
    s.creator.schemes = Some(vec![SchemeCard::hidden(3), SchemeCard::hidden(12)]);
    s
}

#[test]
fn advance_round_accepts_exactly_next() {
    let s = two_player_session();
    assert_eq!(s.round, 1);
    assert_eq!(
        advance_round(&s, 2).unwrap(),
        SessionUpdate::AdvanceRound { from: 1, to: 2 }
    );
}

#[test]
fn advance_round_rejects_current_and_skipped() {
    let s = two_player_session();
    for requested in [0, 1, 3, 4] {
        match advance_round(&s, requested) {
            Err(DomainError::Conflict(ConflictKind::IncorrectRound, _)) => {}
            other => panic!("expected IncorrectRound for {requested}, got {other:?}"),
        }
    }
}

#[test]
fn advance_round_rejected_once_both_players_finished() {
    let mut s = two_player_session();
    s.creator.step = EncounterStep::FinishedGame;
    s.opponent.as_mut().unwrap().step = EncounterStep::FinishedGame;
    assert!(matches!(
        advance_round(&s, 2),
        Err(DomainError::Conflict(ConflictKind::GameFinished, _))
    ));
}

#[test]
fn strategy_score_is_repeatable() {
    let s = two_player_session();
    assert_eq!(
        set_strategy_score(&s, Seat::Creator, 3).unwrap(),
        SessionUpdate::SetStrategyScore {
            seat: Seat::Creator,
            score: 3
        }
    );
    // a second write is just another overwrite
    let mut rescored = s.clone();
    rescored.creator.strategy_score = 3;
    assert!(set_strategy_score(&rescored, Seat::Creator, 5).is_ok());
}

#[test]
fn reveal_flips_only_the_matching_scheme() {
    let s = session_with_schemes();
    let update = reveal_scheme(&s, Seat::Creator, 3).unwrap();
    match update {
        SessionUpdate::ReplaceSchemes { seat, schemes } => {
            assert_eq!(seat, Seat::Creator);
            assert_eq!(
                schemes,
                vec![
                    SchemeCard {
                        id: 3,
                        revealed: true,
                        score: None
                    },
                    SchemeCard::hidden(12),
                ]
            );
        }
        other => panic!("expected ReplaceSchemes, got {other:?}"),
    }
}

#[test]
fn score_does_not_require_reveal() {
    let s = session_with_schemes();
    let update = score_scheme(&s, Seat::Creator, 12, 2).unwrap();
    match update {
        SessionUpdate::ReplaceSchemes { schemes, .. } => {
            assert_eq!(
                schemes,
                vec![
                    SchemeCard::hidden(3),
                    SchemeCard {
                        id: 12,
                        revealed: false,
                        score: Some(2)
                    },
                ]
            );
        }
        other => panic!("expected ReplaceSchemes, got {other:?}"),
    }
}

#[test]
fn unknown_scheme_id_is_rejected() {
    let s = session_with_schemes();
    for result in [
        reveal_scheme(&s, Seat::Creator, 5),
        score_scheme(&s, Seat::Creator, 5, 1),
    ] {
        match result {
            Err(DomainError::Conflict(ConflictKind::UnknownScheme, _)) => {}
            other => panic!("expected UnknownScheme, got {other:?}"),
        }
    }
    // schemes untouched by rejected lookups
    assert_eq!(
        s.creator.schemes,
        Some(vec![SchemeCard::hidden(3), SchemeCard::hidden(12)])
    );
}

#[test]
fn reveal_before_choosing_schemes_is_rejected() {
    let s = two_player_session();
    assert!(matches!(
        reveal_scheme(&s, Seat::Creator, 3),
        Err(DomainError::Conflict(ConflictKind::UnknownScheme, _))
    ));
}

#[test]
fn end_game_is_per_player() {
    let mut s = two_player_session();
    assert_eq!(
        end_game(&s, Seat::Creator).unwrap(),
        SessionUpdate::FinishPlayer {
            seat: Seat::Creator
        }
    );

    s.creator.step = EncounterStep::FinishedGame;
    // the session as a whole is not finished yet
    assert!(!s.is_finished());
    // but the finished player cannot end twice
    assert!(matches!(
        end_game(&s, Seat::Creator),
        Err(DomainError::Conflict(ConflictKind::GameFinished, _))
    ));
    // while the opponent still can
    assert!(end_game(&s, Seat::Opponent).is_ok());

    s.opponent.as_mut().unwrap().step = EncounterStep::FinishedGame;
    assert!(s.is_finished());
}
