/// Capacity mechanics: how many candidates a weighing budget can separate.
/// Recurrence f(n) = 3·f(n−1): each weighing sends the search into one of
/// three near-equal classes.

/// Candidates separable in `n` weighings when the deviation direction is
/// already known: 3^n.
#[inline]
pub fn known_direction(n: u32) -> u64 {
    3u64.pow(n)
}

/// Candidates separable in `n` weighings when the direction is unknown:
/// (3^n − 1)/2. The first weighing must establish direction as well as make
/// progress, which costs one slot.
#[inline]
pub fn unknown_direction(n: u32) -> u64 {
    (3u64.pow(n) - 1) / 2
}

/// 3^n clamped to `cap`, saturating instead of overflowing for large `n`.
#[inline]
pub fn known_direction_upto(n: usize, cap: usize) -> usize {
    let mut reach: usize = 1;
    for _ in 0..n {
        if reach >= cap {
            return cap;
        }
        reach = reach.saturating_mul(3);
    }
    reach.min(cap)
}

/// Smallest budget separating an unknown-direction pool of `pool` items:
/// the least `n` with 2·pool + 1 ≤ 3^n. Integer form of ceil(log₃(2·pool+1)),
/// exact at the 3^n boundaries where float log drifts.
#[inline]
pub fn weighings_for(pool: usize) -> usize {
    let goal = 2 * pool as u64 + 1;
    let mut n = 0;
    let mut reach = 1u64;
    while reach < goal {
        reach *= 3;
        n += 1;
    }
    n
}
