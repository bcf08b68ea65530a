//! Stock balances for demonstrations and tests: a single rigged deviant, a
//! world with no deviant, a contract-checking wrapper, and an adapter for
//! plain closures.

use crate::{Balance, Deviation};

/// Adapts a plain `FnMut(&[I], &[I]) -> Deviation` closure into a
/// [`Balance`].
#[derive(Clone, Copy, Debug)]
pub struct FnBalance<F>(F);

/// Wrap a closure as a balance.
pub fn from_fn<F>(f: F) -> FnBalance<F> {
    FnBalance(f)
}

impl<I, F> Balance<I> for FnBalance<F>
where
    F: FnMut(&[I], &[I]) -> Deviation,
{
    #[inline]
    fn weigh(&mut self, left: &[I], right: &[I]) -> Deviation {
        (self.0)(left, right)
    }
}

/// The fixed-truth balance: `target` deviates by `lean`, every other item is
/// even. Antisymmetric by construction.
#[derive(Clone, Copy, Debug)]
pub struct Rigged<I> {
    pub target: I,
    pub lean: Deviation,
}

impl<I: PartialEq> Balance<I> for Rigged<I> {
    fn weigh(&mut self, left: &[I], right: &[I]) -> Deviation {
        if left.contains(&self.target) {
            self.lean
        } else if right.contains(&self.target) {
            -self.lean
        } else {
            Deviation::Even
        }
    }
}

/// A world with no deviant: every comparison balances.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllEven;

impl<I> Balance<I> for AllEven {
    fn weigh(&mut self, _left: &[I], _right: &[I]) -> Deviation {
        Deviation::Even
    }
}

/// Wraps a balance and polices the caller's side of the contract on every
/// call: pans must be disjoint and of equal length. A test-harness aid; the
/// solver itself trusts its balance.
#[derive(Clone, Copy, Debug)]
pub struct Checked<B> {
    pub inner: B,
}

impl<B> Checked<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

impl<I: PartialEq, B: Balance<I>> Balance<I> for Checked<B> {
    fn weigh(&mut self, left: &[I], right: &[I]) -> Deviation {
        assert_eq!(
            left.len(),
            right.len(),
            "pans must hold the same number of items"
        );
        assert!(
            left.iter().all(|item| !right.contains(item)),
            "pans must be disjoint"
        );
        self.inner.weigh(left, right)
    }
}
