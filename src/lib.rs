/*!
`coin_balance` — a minimal, pure counterfeit-coin search over a two-pan balance.

What it does
- Isolates the at-most-one item in a pool whose weight deviates from the
  rest, and the direction of that deviation, within the information bound:
  `n` weighings separate up to `(3^n − 1)/2` candidates when the direction is
  unknown and `3^n` when it is known.
- Drives a caller-supplied balance through split → weigh → narrow rounds,
  retiring cleared items into a filler pool so later lopsided pans can be
  evened out.
- Returns the full weighing trace alongside the final classification.

How to use (call surface only)
- Provide the pool of items (any `Clone + Eq + Hash` identifier type).
- Provide a balance: anything implementing [`Balance`] — the stock ones in
  [`oracles`], or a plain `FnMut(&[I], &[I]) -> Deviation` closure wrapped
  with [`oracles::from_fn`].
- Call `solve(pool, budget, &mut balance) -> Result<Outcome<I>, SolveError>`;
  pass `None` as the budget to derive the minimum sufficient one.

What it does NOT do
- No I/O, no randomness, no retries. The balance is trusted; weighings are
  deterministic queries, and a recorded trace replays bit-for-bit against the
  same balance.
*/

use std::ops::Neg;

/// Outcome of one comparison, or an item's true lean relative to the rest:
/// a signed tri-state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Deviation {
    Light,
    Even,
    Heavy,
}

impl Deviation {
    /// Signed value: Light = −1, Even = 0, Heavy = +1.
    #[inline]
    pub fn signum(self) -> i8 {
        match self {
            Deviation::Light => -1,
            Deviation::Even => 0,
            Deviation::Heavy => 1,
        }
    }
}

/// Swapping pan order negates the comparison.
impl Neg for Deviation {
    type Output = Deviation;

    #[inline]
    fn neg(self) -> Deviation {
        match self {
            Deviation::Light => Deviation::Heavy,
            Deviation::Even => Deviation::Even,
            Deviation::Heavy => Deviation::Light,
        }
    }
}

/// A two-pan balance. The solver only ever calls it with disjoint pans of
/// equal length, and expects antisymmetry: `weigh(a, b) == -weigh(b, a)`.
pub trait Balance<I> {
    /// Light if `left` is the lighter side, Heavy if the heavier, Even if
    /// the pans balance.
    fn weigh(&mut self, left: &[I], right: &[I]) -> Deviation;
}

pub mod mechanics;
pub mod oracles;
pub mod puzzles;
pub mod solver;

pub use solver::{Outcome, Resolution, SolveError, Weighing, solve};
