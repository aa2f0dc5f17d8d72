//! Tests for full games played through a session.

use tictac_core::{Cell, Coord, GameError, Marker, MoveReason, Outcome, Session};

/// Plays the first empty cell each turn until the game ends.
fn play_out(session: &mut Session) -> Outcome {
    loop {
        let next = session.board().empty_cells()[0];
        let turn = session.play(next).expect("first empty cell is legal");
        if turn.outcome.is_terminal() {
            return turn.outcome;
        }
    }
}

#[test]
fn test_games_always_terminate() {
    for seed in 0..64 {
        let mut session = Session::new(Marker::O, Some(seed));
        let outcome = play_out(&mut session);
        assert!(outcome.is_terminal());
        assert_eq!(session.outcome(), outcome);
    }
}

#[test]
fn test_no_moves_after_game_over() {
    let mut session = Session::new(Marker::O, Some(2));
    let outcome = play_out(&mut session);
    let before = session.board().clone();

    let free = before.empty_cells();
    let target = free.first().copied().unwrap_or(Coord::ALL[0]);
    assert_eq!(session.play(target), Err(GameError::GameOver(outcome)));
    assert_eq!(session.board(), &before);
}

#[test]
fn test_markers_never_overwritten() {
    for seed in 0..32 {
        let mut session = Session::new(Marker::X, Some(seed));
        let mut previous = session.board().clone();
        loop {
            let next = session.board().empty_cells()[0];
            let turn = session.play(next).unwrap();
            for coord in Coord::ALL {
                if previous.get(coord) != Cell::Empty {
                    assert_eq!(previous.get(coord), session.board().get(coord));
                }
            }
            previous = session.board().clone();
            if turn.outcome.is_terminal() {
                break;
            }
        }
    }
}

#[test]
fn test_final_turn_reports_the_deciding_move() {
    for seed in 0..64 {
        let mut session = Session::new(Marker::O, Some(seed));
        let turn = loop {
            let next = session.board().empty_cells()[0];
            let turn = session.play(next).unwrap();
            if turn.outcome.is_terminal() {
                break turn;
            }
        };
        match turn.outcome {
            Outcome::HumanWins => assert!(turn.computer.is_none()),
            Outcome::ComputerWins => {
                let reply = turn.computer.expect("computer made the winning move");
                assert_eq!(reply.reason, MoveReason::Win);
            }
            Outcome::Draw | Outcome::InProgress => {}
        }
    }
}

#[test]
fn test_counters_track_moves() {
    let mut session = Session::new(Marker::O, Some(8));
    let turn = session.play_at(0, 0).unwrap();
    assert_eq!(session.human().moves(), 1);
    assert_eq!(
        session.computer().moves(),
        u32::from(turn.computer.is_some())
    );
}
