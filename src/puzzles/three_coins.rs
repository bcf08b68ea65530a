// src/puzzles/three_coins.rs
#![cfg(feature = "puzzle-three_coins")]

//! The three-coin edge case: three coins, two weighings. The first weighing
//! spends itself establishing direction (and seeding the filler pool), so
//! this is the smallest pool the no-reference-coin bound admits.

use crate::oracles::Rigged;
use crate::solver::{Outcome, SolveError, solve};
use crate::{Balance, Deviation};

/// Coin labels.
pub const LABELS: [char; 3] = ['a', 'b', 'c'];

/// Weighings the instance allows.
pub const WEIGHINGS: usize = 2;

/// The full pool in label order.
pub fn pool() -> Vec<char> {
    LABELS.to_vec()
}

/// Run the instance against any balance.
pub fn solve_with<B: Balance<char>>(balance: &mut B) -> Result<Outcome<char>, SolveError> {
    solve(pool(), Some(WEIGHINGS), balance)
}

/// Stage the instance with a known answer and solve it.
pub fn demonstrate(target: char, lean: Deviation) -> Result<Outcome<char>, SolveError> {
    let mut balance = Rigged { target, lean };
    solve_with(&mut balance)
}
