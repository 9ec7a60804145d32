use indian_poker_engine::agent::{Agent, VisibleState};
use indian_poker_engine::config::{GameConfig, TournamentConfig, MAX_TABLE_CHIPS};
use indian_poker_engine::errors::GameError;
use indian_poker_engine::game::Game;

#[test]
fn defaults_match_documented_values() {
    let cfg = TournamentConfig::default();
    assert_eq!(cfg.num_games, 100);
    assert_eq!(cfg.seed, 1);
    assert_eq!(cfg.game.starting_chips, 20);
    assert_eq!(cfg.game.blind, 1);
    assert_eq!(cfg.game.max_length, 100_000);
    assert!(cfg.validate().is_ok());
}

#[test]
fn zero_games_is_invalid() {
    let cfg = TournamentConfig {
        num_games: 0,
        ..TournamentConfig::default()
    };
    assert_eq!(
        cfg.validate(),
        Err(GameError::InvalidConfig {
            field: "num_games",
            reason: "must be > 0"
        })
    );
}

#[test]
fn nested_game_config_is_validated() {
    let cfg = TournamentConfig {
        game: GameConfig {
            blind: -1,
            ..GameConfig::default()
        },
        ..TournamentConfig::default()
    };
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("blind"));
}

#[test]
fn seeds_are_consecutive_and_wrap() {
    let cfg = TournamentConfig {
        num_games: 3,
        seed: u64::MAX - 1,
        ..TournamentConfig::default()
    };
    let seeds: Vec<u64> = cfg.seeds().collect();
    assert_eq!(seeds, vec![u64::MAX - 1, u64::MAX, 0]);
}

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

#[test]
fn stacks_beyond_chip_limit_are_rejected() {
    let cfg = GameConfig {
        starting_chips: i64::MAX,
        ..GameConfig::default()
    };
    assert_eq!(
        cfg.validate(),
        Err(GameError::InvalidConfig {
            field: "starting_chips",
            reason: "exceeds the chip limit"
        })
    );
    let (mut a, mut b) = (Caller, Caller);
    assert!(Game::new(1, &mut a, &mut b, true, cfg).is_err());

    let cfg = GameConfig {
        blind: MAX_TABLE_CHIPS + 1,
        ..GameConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn largest_allowed_table_settles_without_overflow() {
    let cfg = GameConfig {
        starting_chips: MAX_TABLE_CHIPS,
        blind: MAX_TABLE_CHIPS,
        max_length: 5,
    };
    assert!(cfg.validate().is_ok());

    let (mut a, mut b) = (Caller, Caller);
    let mut game = Game::new(1, &mut a, &mut b, true, cfg).unwrap();
    game.play_round();
    let [ca, cb] = game.chips();
    assert_eq!(ca.checked_add(cb), Some(2 * MAX_TABLE_CHIPS));

    let (mut a, mut b) = (Shover, Shover);
    let mut game = Game::new(2, &mut a, &mut b, false, cfg).unwrap();
    let outcome = game.play_game();
    assert_eq!(outcome.chips[0] + outcome.chips[1], 2 * MAX_TABLE_CHIPS);
}
