// tests/mechanics.rs
use coin_balance::mechanics::{capacity, partition};

/* ──────────────────────────────────────────────────────────────────────────
1) Interleaved splits
────────────────────────────────────────────────────────────────────────── */

#[test]
fn halves_alternate_and_stay_balanced() {
    for n in 0..=15u32 {
        let seq: Vec<u32> = (0..n).collect();
        let (left, right) = partition::halves(&seq);

        assert_eq!(left, seq.iter().copied().step_by(2).collect::<Vec<_>>());
        assert_eq!(
            right,
            seq.iter().copied().skip(1).step_by(2).collect::<Vec<_>>()
        );
        assert!(left.len() >= right.len());
        assert!(left.len() - right.len() <= 1, "n = {n}");
        assert_eq!(left.len() + right.len(), seq.len());
    }
}

/* ──────────────────────────────────────────────────────────────────────────
2) Capacity closed forms and their inverse
────────────────────────────────────────────────────────────────────────── */

#[test]
fn capacity_closed_forms() {
    assert_eq!(
        (0..5)
            .map(capacity::known_direction)
            .collect::<Vec<_>>(),
        vec![1, 3, 9, 27, 81]
    );
    assert_eq!(
        (0..6)
            .map(capacity::unknown_direction)
            .collect::<Vec<_>>(),
        vec![0, 1, 4, 13, 40, 121]
    );
}

#[test]
fn weighings_for_matches_the_ceiling_log() {
    for (pool, expected) in [
        (0usize, 0usize),
        (1, 1),
        (2, 2),
        (3, 2),
        (4, 2),
        (5, 3),
        (12, 3),
        (13, 3),
        (14, 4),
        (40, 4),
        (41, 5),
    ] {
        assert_eq!(capacity::weighings_for(pool), expected, "pool {pool}");
    }
}

#[test]
fn inverse_is_exact_at_power_boundaries() {
    for n in 1..=6u32 {
        let g = capacity::unknown_direction(n) as usize;
        assert_eq!(capacity::weighings_for(g), n as usize, "pool {g}");
        assert_eq!(capacity::weighings_for(g + 1), n as usize + 1, "pool {}", g + 1);
    }
}

#[test]
fn capped_power_saturates_instead_of_overflowing() {
    assert_eq!(capacity::known_direction_upto(0, 5), 1);
    assert_eq!(capacity::known_direction_upto(2, 100), 9);
    assert_eq!(capacity::known_direction_upto(4, 10), 10);
    assert_eq!(capacity::known_direction_upto(100, 7), 7);
    assert_eq!(capacity::known_direction_upto(1_000, usize::MAX / 4), usize::MAX / 4);
}
