// src/puzzles/mod.rs

// Classic instances of the counterfeit search. Each preset is feature-gated
// so downstream users enable only what they want.

#[cfg(feature = "puzzle-twelve_coins")]
pub mod twelve_coins;

#[cfg(feature = "puzzle-three_coins")]
pub mod three_coins;
