use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// One of the two seats at the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Player A
    A,
    /// Player B
    B,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }

    /// Index into per-seat arrays (`[T; 2]`).
    pub fn index(self) -> usize {
        match self {
            Seat::A => 0,
            Seat::B => 1,
        }
    }

    pub fn from_a_first(a_first: bool) -> Seat {
        if a_first {
            Seat::A
        } else {
            Seat::B
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::A => write!(f, "A"),
            Seat::B => write!(f, "B"),
        }
    }
}

/// Chip amounts. Signed because a fold penalty can push a stack below zero.
pub type Chips = i64;

/// Tournament points earned by each seat.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Points {
    pub a: f64,
    pub b: f64,
}

impl Points {
    pub const DRAW: Points = Points { a: 0.5, b: 0.5 };

    pub fn win_for(seat: Seat) -> Self {
        match seat {
            Seat::A => Points { a: 1.0, b: 0.0 },
            Seat::B => Points { a: 0.0, b: 1.0 },
        }
    }

    pub fn as_tuple(self) -> (f64, f64) {
        (self.a, self.b)
    }
}

impl Add for Points {
    type Output = Points;

    fn add(self, rhs: Points) -> Points {
        Points {
            a: self.a + rhs.a,
            b: self.b + rhs.b,
        }
    }
}

impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        self.a += rhs.a;
        self.b += rhs.b;
    }
}
