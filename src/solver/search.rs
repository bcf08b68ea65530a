use std::collections::HashSet;
use std::hash::Hash;

use tracing::debug;

use super::context::Bench;
use super::{Outcome, Resolution, SolveError, Suspect};
use crate::mechanics::{capacity, partition};
use crate::{Balance, Deviation};

/// Isolate the deviant item in `pool`, if any, along with its lean, using at
/// most `budget` weighings of `balance`. With `None` the minimum sufficient
/// budget is derived from the pool size.
///
/// Fails fast, before the first weighing: duplicate pool items and budgets
/// below the information bound are rejected outright. Running out of
/// weighings mid-search is not an error; it surfaces as
/// [`Resolution::Unresolved`].
pub fn solve<I, B>(
    pool: impl IntoIterator<Item = I>,
    budget: Option<usize>,
    balance: &mut B,
) -> Result<Outcome<I>, SolveError>
where
    I: Clone + Eq + Hash,
    B: Balance<I>,
{
    let pool: Vec<I> = pool.into_iter().collect();

    let mut seen = HashSet::with_capacity(pool.len());
    if !pool.iter().all(|item| seen.insert(item.clone())) {
        return Err(SolveError::DuplicateItem);
    }

    let needed = capacity::weighings_for(pool.len());
    let budget = budget.unwrap_or(needed);
    if budget < needed {
        return Err(SolveError::BudgetTooSmall {
            pool: pool.len(),
            weighings: budget,
            needed,
        });
    }

    debug!(pool = pool.len(), budget, "solve");

    let mut bench = Bench::new(balance, budget);
    let resolution = split_rounds(&mut bench, pool);
    Ok(Outcome {
        resolution,
        trace: bench.trace,
    })
}

/// Direction-unknown rounds: weigh a measured slice of the pool against
/// itself to either establish a lean (then narrow) or clear the slice and
/// shrink the pool (then repeat).
fn split_rounds<I, B>(bench: &mut Bench<'_, I, B>, mut pool: Vec<I>) -> Resolution<I>
where
    I: Clone + Eq + Hash,
    B: Balance<I>,
{
    loop {
        if pool.is_empty() {
            return Resolution::NoDeviant;
        }
        if bench.remaining == 0 {
            return Resolution::Unresolved { suspects: pool };
        }

        // 3^(rounds−1) candidates can ride this weighing, where a slack
        // budget is capped at the pool's derived need so small pools are not
        // weighed wholesale before any filler exists. One seat is given up
        // whenever the filler pool is empty, since an odd slice cannot be
        // split into equal pans without a spare coin; that check repeats
        // every round, not just the first.
        let rounds = bench.remaining.min(capacity::weighings_for(pool.len()));
        let mut weigh_size = capacity::known_direction_upto(rounds - 1, pool.len());
        if bench.filler.is_empty() && weigh_size % 2 == 1 {
            weigh_size -= 1;
        }
        if weigh_size == 0 {
            // A lone coin and nothing to weigh it against.
            return Resolution::Unresolved { suspects: pool };
        }

        let excluded = pool.split_off(weigh_size);
        let (left, right) = partition::halves(&pool);

        match bench.weigh(&left, &right) {
            Deviation::Even => {
                // The whole slice is clean; the deviant, if any, hides in
                // the excluded remainder.
                bench.clear(pool);
                pool = excluded;
            }
            outcome => {
                // Direction established: the lighter pan's coins are the
                // light-leaning suspects, the heavier pan's the
                // heavy-leaning; everything excluded is clean.
                bench.clear(excluded);
                let (light_half, heavy_half) = match outcome {
                    Deviation::Light => (left, right),
                    _ => (right, left),
                };
                let mut suspects = Vec::with_capacity(light_half.len() + heavy_half.len());
                suspects.extend(light_half.into_iter().map(|item| Suspect {
                    item,
                    lean: Deviation::Light,
                }));
                suspects.extend(heavy_half.into_iter().map(|item| Suspect {
                    item,
                    lean: Deviation::Heavy,
                }));
                return narrow(bench, suspects);
            }
        }
    }
}

/// Direction-known narrowing: three-way splits keyed to the outcome that
/// would convict each class, until a single suspect (or none) is left.
fn narrow<I, B>(bench: &mut Bench<'_, I, B>, mut suspects: Vec<Suspect<I>>) -> Resolution<I>
where
    I: Clone + Eq + Hash,
    B: Balance<I>,
{
    loop {
        debug_assert!(
            suspects.iter().all(|s| !bench.filler.contains(&s.item)),
            "filler and suspects must stay disjoint"
        );

        if suspects.is_empty() {
            return Resolution::NoDeviant;
        }
        if suspects.len() == 1 {
            let Suspect { item, lean } = suspects.remove(0);
            return Resolution::Found { item, lean };
        }
        if bench.remaining == 0 {
            return Resolution::Unresolved {
                suspects: suspects.into_iter().map(|s| s.item).collect(),
            };
        }

        // The held-out class must be resolvable with the weighings left
        // after this one, and must never swallow the whole suspect list.
        let cap = capacity::known_direction_upto(bench.remaining - 1, suspects.len())
            .min(suspects.len() - 1);
        let (class_a, class_b, class_c) = classes(&suspects, cap);

        // A Light outcome must point exactly at class A: the left pan takes
        // A's light-leaning coins plus B's heavy-leaning ones, the right pan
        // the mirror image. Leftover imbalance is padded from filler inside
        // the weighing.
        let pick = |class: &[Suspect<I>], lean: Deviation| -> Vec<I> {
            class
                .iter()
                .filter(|s| s.lean == lean)
                .map(|s| s.item.clone())
                .collect()
        };
        let mut left = pick(&class_a, Deviation::Light);
        left.extend(pick(&class_b, Deviation::Heavy));
        let mut right = pick(&class_b, Deviation::Light);
        right.extend(pick(&class_a, Deviation::Heavy));

        let shortfall = left.len().abs_diff(right.len());
        if !bench.can_pad(shortfall) {
            // Not enough spare coins to even out the pans: no further
            // weighing can be formed.
            return Resolution::Unresolved {
                suspects: suspects.into_iter().map(|s| s.item).collect(),
            };
        }

        let survivors = match bench.weigh(&left, &right) {
            Deviation::Light => class_a,
            Deviation::Heavy => class_b,
            Deviation::Even => class_c,
        };

        // Everyone outside the surviving class is cleared for filler duty.
        bench.clear(
            suspects
                .into_iter()
                .filter(|s| !survivors.contains(s))
                .map(|s| s.item),
        );
        suspects = survivors;
    }
}

/// Deterministic three-way class assignment for one narrowing weighing:
/// class A is convicted by Light, B by Heavy, the held-out C by Even.
///
/// Two same-lean suspects split across A and B keep the pans level, as does
/// a light/heavy pair dropped into a single class (its light sits on the
/// left pan, its heavy on the right). Stragglers go to the held-out class
/// while it has room under `cap`; past that they spill into A or B at a
/// cost of one filler coin of pan imbalance each.
fn classes<I: Clone + Eq>(
    suspects: &[Suspect<I>],
    cap: usize,
) -> (Vec<Suspect<I>>, Vec<Suspect<I>>, Vec<Suspect<I>>) {
    let n = suspects.len();
    let (size_a, size_b) = ((n + 2) / 3, (n + 1) / 3);

    let lights: Vec<Suspect<I>> = suspects
        .iter()
        .filter(|s| s.lean == Deviation::Light)
        .cloned()
        .collect();
    let heavies: Vec<Suspect<I>> = suspects
        .iter()
        .filter(|s| s.lean == Deviation::Heavy)
        .cloned()
        .collect();
    let (mut li, mut hi) = (0, 0);

    let mut a: Vec<Suspect<I>> = Vec::with_capacity(size_a);
    let mut b: Vec<Suspect<I>> = Vec::with_capacity(size_b);

    // Same-lean pairs, one coin to each pan class.
    while a.len() < size_a && b.len() < size_b {
        if lights.len() - li >= 2 {
            a.push(lights[li].clone());
            b.push(lights[li + 1].clone());
            li += 2;
        } else if heavies.len() - hi >= 2 {
            a.push(heavies[hi].clone());
            b.push(heavies[hi + 1].clone());
            hi += 2;
        } else {
            break;
        }
    }

    // Mixed pairs, both coins into whichever class has two free seats.
    while li < lights.len() && hi < heavies.len() {
        if a.len() + 2 <= size_a {
            a.push(lights[li].clone());
            a.push(heavies[hi].clone());
        } else if b.len() + 2 <= size_b {
            b.push(lights[li].clone());
            b.push(heavies[hi].clone());
        } else {
            break;
        }
        li += 1;
        hi += 1;
    }

    // Stragglers are held out; spill only what the held-out class cannot
    // legally keep.
    let mut c: Vec<Suspect<I>> = lights[li..]
        .iter()
        .chain(heavies[hi..].iter())
        .cloned()
        .collect();
    while c.len() > cap && (a.len() < size_a || b.len() < size_b) {
        let s = c.remove(0);
        if a.len() < size_a {
            a.push(s);
        } else {
            b.push(s);
        }
    }

    (a, b, c)
}
