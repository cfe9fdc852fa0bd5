use crate::domain::role::{resolve, Seat};
use crate::domain::state::SessionOptions;
use crate::domain::test_helpers::{session, two_player_session, CREATOR, OPPONENT};

#[test]
fn resolves_creator() {
    let s = two_player_session();
    assert_eq!(resolve(CREATOR, &s), Some(Seat::Creator));
}

#[test]
fn resolves_opponent_once_joined() {
    let s = two_player_session();
    assert_eq!(resolve(OPPONENT, &s), Some(Seat::Opponent));
}

#[test]
fn stranger_resolves_to_none_with_both_seats_filled() {
    let s = two_player_session();
    assert_eq!(resolve("somebody@else.example", &s), None);
}

#[test]
fn future_opponent_resolves_to_none_before_joining() {
    let s = session(SessionOptions {
        multiplayer: true,
        choose_crew: true,
    });
    assert_eq!(resolve(OPPONENT, &s), None);
}

#[test]
fn other_is_an_involution() {
    assert_eq!(Seat::Creator.other(), Seat::Opponent);
    assert_eq!(Seat::Opponent.other(), Seat::Creator);
    assert_eq!(Seat::Creator.other().other(), Seat::Creator);
}
