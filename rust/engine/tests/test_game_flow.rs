use indian_poker_engine::agent::{Agent, VisibleState};
use indian_poker_engine::config::GameConfig;
use indian_poker_engine::game::{EndReason, Game};
use indian_poker_engine::logger::Resolution;
use indian_poker_engine::player::{Points, Seat};

struct Caller;

impl Agent for Caller {
    fn reset(&mut self) {}
    fn play(&mut self, s: &VisibleState) -> i64 {
        s.current_bet()
    }
}

struct Shover;

impl Agent for Shover {
    fn reset(&mut self) {}
    fn play(&mut self, _s: &VisibleState) -> i64 {
        i64::MAX
    }
}

struct Folder;

impl Agent for Folder {
    fn reset(&mut self) {}
    fn play(&mut self, _s: &VisibleState) -> i64 {
        0
    }
}

/// Raises against low opponent cards, folds against high ones.
struct Reader;

impl Agent for Reader {
    fn reset(&mut self) {}
    fn play(&mut self, s: &VisibleState) -> i64 {
        match s.opponent_card.rank() {
            1..=3 if !s.opponent_exhausted => s.current_bet() + 2,
            9 | 10 => 0,
            _ => s.current_bet(),
        }
    }
}

fn config(max_length: u64) -> GameConfig {
    GameConfig {
        max_length,
        ..GameConfig::default()
    }
}

#[test]
fn all_in_showdown_ends_game_in_one_round() {
    let (mut a, mut b) = (Shover, Shover);
    let mut game = Game::new(3, &mut a, &mut b, true, GameConfig::default()).unwrap();
    let outcome = game.play_game();

    assert_eq!(outcome.rounds, 1);
    let EndReason::Elimination { winner } = outcome.reason else {
        panic!("expected elimination, got {:?}", outcome.reason);
    };
    assert_eq!(outcome.points, Points::win_for(winner));
    assert_eq!(outcome.chips[winner.index()], 40);
    assert_eq!(outcome.chips[winner.other().index()], 0);
}

#[test]
fn round_cap_is_a_draw() {
    let (mut a, mut b) = (Caller, Caller);
    let mut game = Game::new(5, &mut a, &mut b, false, config(3)).unwrap();
    let outcome = game.play_game();

    assert_eq!(outcome.rounds, 3);
    assert_eq!(outcome.points.as_tuple(), (0.5, 0.5));
    assert_eq!(outcome.reason, EndReason::RoundLimit);
    assert_eq!(outcome.chips[0] + outcome.chips[1], 40);
}

#[test]
fn zero_round_cap_draws_without_dealing() {
    let (mut a, mut b) = (Caller, Caller);
    let mut game = Game::new(5, &mut a, &mut b, true, config(0)).unwrap();
    let outcome = game.play_game();

    assert_eq!(outcome.rounds, 0);
    assert_eq!(outcome.points, Points::DRAW);
    assert_eq!(outcome.chips, [20, 20]);
}

#[test]
fn calling_game_terminates_with_a_valid_result() {
    for seed in 0..10 {
        let (mut a, mut b) = (Caller, Caller);
        let mut game = Game::new(seed, &mut a, &mut b, seed % 2 == 0, config(10_000)).unwrap();
        let outcome = game.play_game();

        assert!(outcome.rounds <= 10_000);
        assert_eq!(outcome.chips[0] + outcome.chips[1], 40);
        match outcome.reason {
            EndReason::RoundLimit => assert_eq!(outcome.points, Points::DRAW),
            EndReason::Elimination { winner } => {
                assert_eq!(outcome.points, Points::win_for(winner));
                assert!(outcome.chips[winner.other().index()] <= 0);
            }
        }
    }
}

#[test]
fn history_chains_turn_order_and_stacks() {
    let (mut a, mut b) = (Reader, Caller);
    let mut game = Game::new(11, &mut a, &mut b, true, config(200))
        .unwrap()
        .with_history();
    let outcome = game.play_game();
    let history = game.take_history();

    assert_eq!(history.len() as u64, outcome.rounds);
    assert_eq!(history[0].first, Seat::A);
    for (i, rec) in history.iter().enumerate() {
        assert_eq!(rec.round, i as u64);
        assert_eq!(rec.seed, 11);
        assert_eq!(rec.chips_after[0] + rec.chips_after[1], 40);
        if let Some(next) = history.get(i + 1) {
            assert_eq!(next.first, rec.outcome.next_first);
        }
    }
    assert_eq!(history.last().unwrap().chips_after, outcome.chips);
}

#[test]
fn folder_acting_first_folds_the_opening_round() {
    let (mut a, mut b) = (Folder, Caller);
    let mut game = Game::new(2, &mut a, &mut b, true, GameConfig::default())
        .unwrap()
        .with_history();
    let first = game.play_round();

    assert!(matches!(
        first.resolution,
        Resolution::Fold {
            folder: Seat::A,
            bet: 1,
            ..
        }
    ));
    assert_eq!(game.first_to_act(), Seat::B);
    assert_eq!(game.rounds_played(), 1);
    assert_eq!(game.history().map(|h| h.len()), Some(1));
}

#[test]
fn same_seed_replays_identically() {
    let run = || {
        let (mut a, mut b) = (Reader, Reader);
        let mut game = Game::new(99, &mut a, &mut b, false, config(500))
            .unwrap()
            .with_history();
        let outcome = game.play_game();
        (outcome, game.take_history())
    };
    assert_eq!(run(), run());
}

#[test]
fn invalid_configuration_is_rejected() {
    for bad in [
        GameConfig {
            starting_chips: 0,
            ..GameConfig::default()
        },
        GameConfig {
            starting_chips: -5,
            ..GameConfig::default()
        },
        GameConfig {
            blind: 0,
            ..GameConfig::default()
        },
    ] {
        let (mut a, mut b) = (Caller, Caller);
        assert!(Game::new(1, &mut a, &mut b, true, bad).is_err());
    }
}
