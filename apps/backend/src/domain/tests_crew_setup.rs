use crate::domain::commands::SessionUpdate;
use crate::domain::crew_setup::{
    choose_crew_list, choose_faction, choose_leader, choose_schemes,
};
use crate::domain::role::Seat;
use crate::domain::state::{ChooseStep, EncounterStep, SchemeCard, SessionOptions};
use crate::domain::test_helpers::{session, two_player_session};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

fn assert_already_chosen(result: Result<SessionUpdate, DomainError>) {
    match result {
        Err(DomainError::Conflict(ConflictKind::AlreadyChosen, _)) => {}
        other => panic!("expected AlreadyChosen, got {other:?}"),
    }
}

#[test]
fn fresh_player_starts_at_faction() {
    let s = two_player_session();
    assert_eq!(s.creator.step, EncounterStep::Choose);
    assert_eq!(s.creator.choose_step, Some(ChooseStep::Faction));
    let opponent = s.opponent.as_ref().unwrap();
    assert_eq!(opponent.step, EncounterStep::Choose);
    assert_eq!(opponent.choose_step, Some(ChooseStep::Faction));
}

#[test]
fn choose_faction_emits_set_faction() {
    let s = two_player_session();
    let update = choose_faction(&s, Seat::Creator, "Guild".into()).unwrap();
    assert_eq!(
        update,
        SessionUpdate::SetFaction {
            seat: Seat::Creator,
            value: "Guild".into()
        }
    );
}

#[test]
fn choose_faction_rejected_when_already_set() {
    let mut s = two_player_session();
    s.creator.crew.faction = Some("Guild".into());
    assert_already_chosen(choose_faction(&s, Seat::Creator, "Outcasts".into()));
    // the stored value is untouched by a rejected call
    assert_eq!(s.creator.crew.faction.as_deref(), Some("Guild"));
}

#[test]
fn choose_leader_rejected_when_already_set() {
    let mut s = two_player_session();
    s.creator.crew.leader = Some("Lady Justice".into());
    assert_already_chosen(choose_leader(&s, Seat::Creator, "Perdita".into()));
}

#[test]
fn choose_crew_list_rejected_when_already_set() {
    let mut s = two_player_session();
    s.opponent.as_mut().unwrap().crew.list = Some("50ss list".into());
    assert_already_chosen(choose_crew_list(&s, Seat::Opponent, "other list".into()));
}

#[test]
fn crew_steps_rejected_when_crew_selection_disabled() {
    let s = session(SessionOptions {
        multiplayer: false,
        choose_crew: false,
    });
    assert!(choose_faction(&s, Seat::Creator, "Guild".into()).is_err());
    assert!(choose_leader(&s, Seat::Creator, "x".into()).is_err());
    assert!(choose_crew_list(&s, Seat::Creator, "x".into()).is_err());
}

#[test]
fn schemes_work_without_crew_selection() {
    // pool is [0, 3, 4, 11, 12]
    let s = session(SessionOptions {
        multiplayer: false,
        choose_crew: false,
    });
    let update = choose_schemes(&s, Seat::Creator, &[3, 12]).unwrap();
    match update {
        SessionUpdate::SetSchemes { seat, schemes } => {
            assert_eq!(seat, Seat::Creator);
            assert_eq!(
                schemes,
                vec![SchemeCard::hidden(3), SchemeCard::hidden(12)]
            );
        }
        other => panic!("expected SetSchemes, got {other:?}"),
    }
}

#[test]
fn schemes_require_exactly_two() {
    let s = two_player_session();
    for ids in [&[][..], &[3][..], &[0, 3, 4][..]] {
        match choose_schemes(&s, Seat::Creator, ids) {
            Err(DomainError::Validation(ValidationKind::SchemeCount, _)) => {}
            other => panic!("expected SchemeCount for {ids:?}, got {other:?}"),
        }
    }
}

#[test]
fn schemes_must_come_from_the_pool() {
    let s = two_player_session();
    match choose_schemes(&s, Seat::Creator, &[3, 7]) {
        Err(DomainError::Validation(ValidationKind::SchemeNotInPool, _)) => {}
        other => panic!("expected SchemeNotInPool, got {other:?}"),
    }
}

#[test]
fn doubled_pick_needs_a_doubled_pool_entry() {
    // pool [0, 3, 4, 11, 12] holds a single 3
    let s = two_player_session();
    assert!(matches!(
        choose_schemes(&s, Seat::Creator, &[3, 3]),
        Err(DomainError::Validation(ValidationKind::SchemeNotInPool, _))
    ));

    // a pool with a doubled 0 allows picking it twice
    let mut doubled = two_player_session();
    doubled.scenario.scheme_pool = [0, 0, 4, 11, 12];
    assert!(choose_schemes(&doubled, Seat::Creator, &[0, 0]).is_ok());
}

#[test]
fn schemes_rejected_when_already_set() {
    let mut s = two_player_session();
    s.creator.schemes = Some(vec![SchemeCard::hidden(3), SchemeCard::hidden(4)]);
    assert_already_chosen(choose_schemes(&s, Seat::Creator, &[0, 11]));
}

#[test]
fn finished_player_cannot_keep_choosing() {
    let mut s = two_player_session();
    s.creator.step = EncounterStep::FinishedGame;
    assert!(matches!(
        choose_faction(&s, Seat::Creator, "Guild".into()),
        Err(DomainError::Conflict(ConflictKind::GameFinished, _))
    ));
}

#[test]
fn unseated_opponent_is_not_found() {
    let s = session(SessionOptions {
        multiplayer: true,
        choose_crew: true,
    });
    assert!(matches!(
        choose_faction(&s, Seat::Opponent, "Guild".into()),
        Err(DomainError::NotFound(_, _))
    ));
}
