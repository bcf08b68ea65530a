/// Partition mechanics: deterministic interleaved splits.
/// Downstream correctness depends only on group sizes, so any balanced split
/// would do, but it must be deterministic for traces to reproduce run to
/// run. Input order is kept within each group.

/// Alternate a slice into two halves: even indices left, odd indices right.
/// The left half is the longer one when the length is odd.
#[inline]
pub fn halves<T: Clone>(seq: &[T]) -> (Vec<T>, Vec<T>) {
    let mut left = Vec::with_capacity(seq.len().div_ceil(2));
    let mut right = Vec::with_capacity(seq.len() / 2);
    for (i, item) in seq.iter().enumerate() {
        if i % 2 == 0 {
            left.push(item.clone());
        } else {
            right.push(item.clone());
        }
    }
    (left, right)
}
