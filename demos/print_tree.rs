//! Build a tree from random points and print it sideways.
//!
//! Run with `RUST_LOG=pst=debug` to see build logging.
use pst::prelude::*;
use rand::{Rng, SeedableRng};

fn main() -> Result<(), PstError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(12);

    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let points: Vec<Point<i32>> = (0..n)
        .map(|_| Point::new(rng.random_range(0..100), rng.random_range(0..100)))
        .collect();

    let tree = PrioritySearchTree::from_unsorted(points)?;
    tree.check_invariants()?;

    println!("Priority search tree ({} points, height {}):", tree.len(), tree.height());
    print!("{tree}");
    Ok(())
}
