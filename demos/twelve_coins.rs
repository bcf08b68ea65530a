// demos/twelve_coins.rs
// Run with:
//   cargo run --example twelve_coins --features "puzzle-twelve_coins"

use coin_balance::puzzles::twelve_coins;
use coin_balance::{Deviation, Resolution};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!(
        "== twelve coins, {} weighings: full decision tree ==",
        twelve_coins::WEIGHINGS
    );

    for &target in twelve_coins::LABELS.iter() {
        for lean in [Deviation::Light, Deviation::Heavy] {
            let out = twelve_coins::demonstrate(target, lean).expect("classic instance is valid");

            println!("-- counterfeit {target} ({lean:?}) --");
            for (i, weighing) in out.trace.iter().enumerate() {
                println!(
                    "   weighing {}: {:?} vs {:?} -> {:?}",
                    i + 1,
                    weighing.left,
                    weighing.right,
                    weighing.outcome
                );
            }
            match out.resolution {
                Resolution::Found { item, lean } => println!("   found {item} ({lean:?})"),
                other => println!("   {other:?}"),
            }
        }
    }
}
