// demos/capacity_sweep.rs
// Run with:
//   cargo run --example capacity_sweep

use coin_balance::mechanics::capacity;
use coin_balance::oracles::Rigged;
use coin_balance::{Deviation, Resolution, solve};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("budget  known-direction  unknown-direction");
    for n in 1..=6u32 {
        println!(
            "{n:>6}  {:>15}  {:>17}",
            capacity::known_direction(n),
            capacity::unknown_direction(n)
        );
    }

    println!();
    println!("pool sweep, derived budgets, worst case over every target and lean:");
    for pool in 1..=40usize {
        let budget = capacity::weighings_for(pool);
        let mut every_target = true;
        let mut max_weighings = 0;
        for target in 0..pool {
            for lean in [Deviation::Light, Deviation::Heavy] {
                let mut balance = Rigged { target, lean };
                let out =
                    solve(0..pool, Some(budget), &mut balance).expect("budget meets the bound");
                max_weighings = max_weighings.max(out.weighings());
                let hit = matches!(
                    out.resolution,
                    Resolution::Found { item, lean: l } if item == target && l == lean
                );
                every_target = every_target && hit;
            }
        }
        println!(
            "pool {pool:>2}: budget {budget}, max weighings {max_weighings}, every target resolved: {every_target}"
        );
    }
}
