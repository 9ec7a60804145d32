//! Formatters for cards, hands and results in terminal output.
//!
//! Pure functions shared by the command handlers so every command prints
//! cards and results the same way.
//!
//! ## Example
//!
//! ```rust
//! use indian_poker_engine::cards::Card;
//! use indian_poker_cli::formatters::{format_board, format_hand};
//!
//! let board = [Card::new(7).unwrap(), Card::new(10).unwrap()];
//! assert_eq!(format_board(&board), "[7 10]");
//! assert_eq!(format_hand(17), "17 (pair)");
//! ```

use indian_poker_engine::cards::Card;
use indian_poker_engine::game::{EndReason, GameOutcome};
use indian_poker_engine::hand::{HandBand, WRAP_STRAIGHT_HIGH, WRAP_STRAIGHT_LOW};
use indian_poker_engine::logger::{Resolution, ShowdownResult};

/// Format community cards as `[c1 c2]`.
pub fn format_board(common: &[Card; 2]) -> String {
    format!("[{} {}]", common[0], common[1])
}

/// Human-readable name of a hand score.
///
/// The two wrap-around straights get their own names; everything else is
/// named by band.
pub fn format_hand(score: u8) -> String {
    let kind = match score {
        WRAP_STRAIGHT_LOW => "straight 10-1-2",
        WRAP_STRAIGHT_HIGH => "straight 9-10-1",
        _ => match HandBand::of(score) {
            HandBand::StraightOrTrips => "straight or trips",
            HandBand::Pair => "pair",
            HandBand::HighCard => "high card",
        },
    };
    format!("{} ({})", score, kind)
}

pub fn format_resolution(resolution: &Resolution) -> String {
    match *resolution {
        Resolution::Fold {
            folder,
            bet,
            penalty: 0,
        } => format!("{} folds at {}", folder, bet),
        Resolution::Fold {
            folder,
            bet,
            penalty,
        } => format!("{} folds at {} (+{} penalty)", folder, bet, penalty),
        Resolution::Showdown { result, amount } => match result {
            ShowdownResult::AWin => format!("showdown, A wins {}", amount),
            ShowdownResult::BWin => format!("showdown, B wins {}", amount),
            ShowdownResult::Draw => format!("showdown, draw pays B {}", amount),
        },
    }
}

pub fn format_outcome(outcome: &GameOutcome) -> String {
    match outcome.reason {
        EndReason::Elimination { winner } => {
            format!("{} wins after {} rounds", winner, outcome.rounds)
        }
        EndReason::RoundLimit => format!("draw, round limit of {} reached", outcome.rounds),
    }
}
