// src/puzzles/twelve_coins.rs
#![cfg(feature = "puzzle-twelve_coins")]

//! The classic twelve-coin puzzle: twelve coins, at most one counterfeit of
//! unknown lean, three weighings.

use crate::oracles::Rigged;
use crate::solver::{Outcome, SolveError, solve};
use crate::{Balance, Deviation};

/// Coin labels, `'a'` through `'l'`.
pub const LABELS: [char; 12] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l'];

/// Weighings the classic puzzle allows.
pub const WEIGHINGS: usize = 3;

/// The full pool in label order.
pub fn pool() -> Vec<char> {
    LABELS.to_vec()
}

/// Run the classic instance against any balance.
pub fn solve_with<B: Balance<char>>(balance: &mut B) -> Result<Outcome<char>, SolveError> {
    solve(pool(), Some(WEIGHINGS), balance)
}

/// Stage the puzzle with a known answer and solve it. Handy for walking the
/// decision tree in demonstrations.
pub fn demonstrate(target: char, lean: Deviation) -> Result<Outcome<char>, SolveError> {
    let mut balance = Rigged { target, lean };
    solve_with(&mut balance)
}
