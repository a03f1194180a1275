//! Find points inside a rectangle, with both traversal strategies.
use pst::prelude::*;

fn main() -> Result<(), PstError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let points = vec![
        Point::new(60, 75),
        Point::new(90, 5),
        Point::new(50, 10),
        Point::new(85, 15),
        Point::new(5, 45),
        Point::new(35, 40),
        Point::new(80, 65),
        Point::new(25, 35),
    ];
    let config = PstConfig::from_env();
    let tree = PstBuilder::from_points(points)
        .with_config(config)
        .sort_input(true)
        .build()?;

    let mut results = Vec::new();
    for strategy in [FourSidedStrategy::Direct, FourSidedStrategy::SplitPath] {
        tree.query_four_sided_with(strategy, 10, 60, 10, 50, &mut results);
        results.sort_by_key(|p| (p.x, p.y));
        println!("{:?}: {:?}", strategy, results);
        assert_eq!(
            results,
            vec![Point::new(25, 35), Point::new(35, 40), Point::new(50, 10)],
            "Both strategies find the same points"
        );
    }
    Ok(())
}
