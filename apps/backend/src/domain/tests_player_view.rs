use crate::domain::player_view::{project, OpponentView, PlayerView};
use crate::domain::role::Seat;
use crate::domain::state::{ChooseStep, EncounterStep, SchemeCard, SessionOptions};
use crate::domain::test_helpers::{session, two_player_session};

fn live(view: PlayerView) -> crate::domain::player_view::LiveView {
    match view {
        PlayerView::Live(live) => live,
        PlayerView::Finished => panic!("expected live view"),
    }
}

#[test]
fn own_state_is_verbatim() {
    let mut s = two_player_session();
    s.creator.crew.faction = Some("Guild".into());
    s.creator.schemes = Some(vec![SchemeCard::hidden(3), SchemeCard::hidden(4)]);

    let view = live(project(Seat::Creator, &s));
    assert_eq!(view.seat, Seat::Creator);
    assert_eq!(view.you, s.creator);
    assert_eq!(view.round, 1);
}

#[test]
fn unrevealed_opponent_schemes_are_absent_not_masked() {
    let mut s = two_player_session();
    let opponent = s.opponent.as_mut().unwrap();
    opponent.schemes = Some(vec![
        SchemeCard {
            id: 3,
            revealed: true,
            score: Some(2),
        },
        SchemeCard::hidden(11),
    ]);

    let view = live(project(Seat::Creator, &s));
    assert_eq!(
        view.opponent.revealed_schemes,
        vec![SchemeCard {
            id: 3,
            revealed: true,
            score: Some(2)
        }]
    );
    // nothing in the serialized opponent view mentions the hidden scheme's id
    let json = serde_json::to_string(&view.opponent).unwrap();
    assert!(!json.contains("11"));
}

#[test]
fn opponent_crew_step_and_strategy_score_are_public() {
    let mut s = two_player_session();
    let opponent = s.opponent.as_mut().unwrap();
    opponent.crew.faction = Some("Outcasts".into());
    opponent.choose_step = Some(ChooseStep::Leader);
    opponent.strategy_score = 4;

    let view = live(project(Seat::Creator, &s));
    assert_eq!(view.opponent.crew.faction.as_deref(), Some("Outcasts"));
    assert_eq!(view.opponent.choose_step, Some(ChooseStep::Leader));
    assert_eq!(view.opponent.step, Some(EncounterStep::Choose));
    assert_eq!(view.opponent.strategy_score, 4);
    assert!(view.opponent.seated);
}

#[test]
fn missing_opponent_projects_as_empty_defaults() {
    let s = session(SessionOptions {
        multiplayer: true,
        choose_crew: true,
    });
    let view = live(project(Seat::Creator, &s));
    assert_eq!(view.opponent, OpponentView::default());
    assert!(!view.opponent.seated);
}

#[test]
fn solo_session_projects_no_opponent_even_if_seated() {
    let mut s = two_player_session();
    s.multiplayer = false;
    let view = live(project(Seat::Creator, &s));
    assert_eq!(view.opponent, OpponentView::default());
}

#[test]
fn finished_caller_gets_terminal_view() {
    let mut s = two_player_session();
    s.creator.step = EncounterStep::FinishedGame;
    assert_eq!(project(Seat::Creator, &s), PlayerView::Finished);
    // the other seat still sees live state
    assert!(matches!(project(Seat::Opponent, &s), PlayerView::Live(_)));
}
