//! The betting protocol of a single round.
//!
//! A round opens with both seats posting the blind and both holding the
//! option to raise. Seats act alternately; acting spends a seat's option and
//! a genuine raise reopens the opponent's. The round ends on the first
//! proposal below the current bet level (fold) or once neither seat may raise
//! (showdown).

use tracing::{debug, trace};

use crate::agent::{Agent, VisibleState};
use crate::deck::Deal;
use crate::hand::{score, HandBand};
use crate::logger::{BetRecord, Resolution, RoundOutcome, ShowdownResult};
use crate::player::{Chips, Seat};

/// Betting state threaded through one round.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RoundState {
    current_bet: Chips,
    bets: [Chips; 2],
    can_raise: [bool; 2],
    turn: Seat,
}

/// Result of applying one proposal to a [`RoundState`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Transition {
    /// The other seat acts next
    Continue(RoundState),
    /// Neither seat may raise; compare hands
    Showdown(RoundState),
    /// The acting seat proposed less than the current bet level
    Fold { folder: Seat, current_bet: Chips },
}

impl RoundState {
    pub fn opening(blind: Chips, first: Seat) -> Self {
        Self {
            current_bet: blind,
            bets: [blind, blind],
            can_raise: [true, true],
            turn: first,
        }
    }

    pub fn current_bet(&self) -> Chips {
        self.current_bet
    }

    pub fn bet(&self, seat: Seat) -> Chips {
        self.bets[seat.index()]
    }

    pub fn can_raise(&self, seat: Seat) -> bool {
        self.can_raise[seat.index()]
    }

    pub fn turn(&self) -> Seat {
        self.turn
    }

    /// Snapshot for the seat whose turn it is.
    pub fn visible_to_turn(&self, deal: &Deal, chips: [Chips; 2]) -> VisibleState {
        let me = self.turn;
        let other = me.other();
        VisibleState {
            common: deal.common,
            opponent_card: deal.private(other),
            own_chips: chips[me.index()],
            opponent_chips: chips[other.index()],
            own_bet: self.bet(me),
            opponent_bet: self.bet(other),
            opponent_exhausted: !self.can_raise(other),
        }
    }

    /// Apply the acting seat's (already clamped) proposal.
    pub fn apply(mut self, proposed: Chips) -> Transition {
        let me = self.turn;
        let other = me.other();
        if proposed < self.current_bet {
            return Transition::Fold {
                folder: me,
                current_bet: self.current_bet,
            };
        }

        self.bets[me.index()] = proposed;
        self.can_raise[me.index()] = false;
        self.can_raise[other.index()] = proposed > self.current_bet;
        self.current_bet = self.current_bet.max(self.bets[0]).max(self.bets[1]);
        self.turn = other;

        if self.can_raise.iter().any(|&open| open) {
            Transition::Continue(self)
        } else {
            Transition::Showdown(self)
        }
    }
}

/// Clamp a proposal to the shorter stack when it reaches it.
pub fn clamp_all_in(proposed: Chips, chips: [Chips; 2]) -> Chips {
    let cap = chips[0].min(chips[1]);
    if proposed >= cap {
        cap
    } else {
        proposed
    }
}

/// Chips a folder owes on top of the current bet.
///
/// Only charged when the folded hand would have beaten the opponent's.
pub fn fold_penalty(folder_score: u8, opponent_score: u8) -> Chips {
    if folder_score > opponent_score {
        HandBand::of(folder_score).fold_penalty()
    } else {
        0
    }
}

/// Runs betting rounds with a fixed blind.
#[derive(Debug, Copy, Clone)]
pub struct RoundEngine {
    blind: Chips,
}

impl RoundEngine {
    pub fn new(blind: Chips) -> Self {
        Self { blind }
    }

    /// Play one round to completion and settle `chips` (indexed A, B).
    pub fn play(
        &self,
        deal: &Deal,
        first: Seat,
        chips: &mut [Chips; 2],
        agents: &mut [&mut dyn Agent; 2],
    ) -> RoundOutcome {
        let scores = [
            score(deal.a_card, deal.common[0], deal.common[1]),
            score(deal.b_card, deal.common[0], deal.common[1]),
        ];
        let mut actions = Vec::new();
        let mut state = RoundState::opening(self.blind, first);

        let resolution = loop {
            let seat = state.turn();
            let visible = state.visible_to_turn(deal, *chips);
            let proposed = agents[seat.index()].play(&visible);
            let effective = clamp_all_in(proposed, *chips);
            trace!(seat = %seat, proposed, effective, current_bet = state.current_bet(), "bet decision");
            actions.push(BetRecord {
                seat,
                proposed,
                effective,
            });

            match state.apply(effective) {
                Transition::Continue(next) => state = next,
                Transition::Showdown(closed) => break showdown(closed, scores),
                Transition::Fold {
                    folder,
                    current_bet,
                } => {
                    let penalty = fold_penalty(
                        scores[folder.index()],
                        scores[folder.other().index()],
                    );
                    break Resolution::Fold {
                        folder,
                        bet: current_bet,
                        penalty,
                    };
                }
            }
        };

        let (payer, amount) = match resolution {
            Resolution::Fold {
                folder,
                bet,
                penalty,
            } => (folder, bet + penalty),
            Resolution::Showdown { result, amount } => match result {
                ShowdownResult::AWin => (Seat::B, amount),
                ShowdownResult::BWin | ShowdownResult::Draw => (Seat::A, amount),
            },
        };
        let payee = payer.other();
        chips[payer.index()] -= amount;
        chips[payee.index()] += amount;
        debug!(
            ?resolution,
            score_a = scores[0],
            score_b = scores[1],
            payer = %payer,
            amount,
            chips_a = chips[0],
            chips_b = chips[1],
            "round settled"
        );

        RoundOutcome {
            actions,
            resolution,
            scores,
            next_first: payee,
        }
    }
}

fn showdown(state: RoundState, scores: [u8; 2]) -> Resolution {
    let result = match scores[0].cmp(&scores[1]) {
        std::cmp::Ordering::Greater => ShowdownResult::AWin,
        std::cmp::Ordering::Less => ShowdownResult::BWin,
        std::cmp::Ordering::Equal => ShowdownResult::Draw,
    };
    Resolution::Showdown {
        result,
        amount: state.bet(Seat::A),
    }
}
