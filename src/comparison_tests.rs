//! Comparison tests between PrioritySearchTree and LinearScan (brute-force filter)

#[cfg(test)]
mod tests {
    use crate::{Coordinate, FourSidedStrategy, LinearScan, Point, PrioritySearchTree};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Builds both indexes from the same points (any order)
    fn setup<T: Coordinate>(points: &[Point<T>]) -> (PrioritySearchTree<T>, LinearScan<T>) {
        let tree = PrioritySearchTree::from_unsorted(points.to_vec()).unwrap();
        let scan = LinearScan::new(points.to_vec());
        (tree, scan)
    }

    /// Sorts results so they can be compared as multisets
    fn canonical<T: Coordinate>(mut v: Vec<Point<T>>) -> Vec<Point<T>> {
        v.sort_by(|a, b| {
            a.x.partial_cmp(&b.x)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
        });
        v
    }

    fn random_points(rng: &mut StdRng, n: usize, lo: i32, hi: i32) -> Vec<Point<i32>> {
        (0..n)
            .map(|_| Point::new(rng.random_range(lo..=hi), rng.random_range(lo..=hi)))
            .collect()
    }

    fn random_range(rng: &mut StdRng, lo: i32, hi: i32) -> (i32, i32) {
        let a = rng.random_range(lo..=hi);
        let b = rng.random_range(lo..=hi);
        (a.min(b), a.max(b))
    }

    /// Runs `queries` random three- and four-sided queries against both indexes
    fn assert_consistent(tree: &PrioritySearchTree<i32>, scan: &LinearScan<i32>, rng: &mut StdRng, queries: usize, lo: i32, hi: i32) {
        let mut got = Vec::new();
        let mut want = Vec::new();

        for _ in 0..queries {
            let (x1, x2) = random_range(rng, lo, hi);
            let (y1, y2) = random_range(rng, lo, hi);

            tree.query_three_sided(x1, x2, y1, &mut got);
            scan.query_three_sided(x1, x2, y1, &mut want);
            assert_eq!(
                canonical(got.clone()),
                canonical(want.clone()),
                "three-sided ({x1}, {x2}, {y1}) differs"
            );

            scan.query_four_sided(x1, x2, y1, y2, &mut want);
            let want = canonical(want.clone());
            for strategy in [FourSidedStrategy::Direct, FourSidedStrategy::SplitPath] {
                tree.query_four_sided_with(strategy, x1, x2, y1, y2, &mut got);
                assert_eq!(
                    canonical(got.clone()),
                    want,
                    "four-sided ({x1}, {x2}, {y1}, {y2}) with {strategy:?} differs"
                );
            }
        }
    }

    #[test]
    fn test_basic_query_consistency() {
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
        let (tree, scan) = setup(&points);

        let mut got = Vec::new();
        let mut want = Vec::new();
        tree.query_four_sided(10, 60, 10, 50, &mut got);
        scan.query_four_sided(10, 60, 10, 50, &mut want);
        assert_eq!(canonical(got), canonical(want), "Query results differ between implementations");
    }

    #[test]
    fn test_random_small_sets() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in 0..40 {
            let points = random_points(&mut rng, n, 0, 30);
            let (tree, scan) = setup(&points);
            assert_eq!(tree.len(), n, "Cardinality");
            assert!(tree.check_invariants().is_ok(), "Invariants for n = {n}");
            assert_consistent(&tree, &scan, &mut rng, 50, -2, 32);
        }
    }

    #[test]
    fn test_large_dataset_consistency() {
        let mut rng = StdRng::seed_from_u64(95756739);
        let points = random_points(&mut rng, 5_000, 0, 1_000);
        let (tree, scan) = setup(&points);
        assert!(tree.check_invariants().is_ok(), "Invariants hold");
        assert_consistent(&tree, &scan, &mut rng, 300, -10, 1_010);
    }

    #[test]
    fn test_distinct_x_stays_balanced() {
        // Distinct x values split evenly, so height stays logarithmic.
        let mut rng = StdRng::seed_from_u64(31337);
        let n: i32 = 4_096;
        let points: Vec<Point<i32>> = (0..n).map(|x| Point::new(x * 3, rng.random_range(0..=10_000))).collect();
        let (tree, scan) = setup(&points);
        assert!(tree.check_invariants().is_ok(), "Invariants hold");
        assert!(tree.height() <= 2 * 12 + 2, "Distinct x stays balanced, height {}", tree.height());
        assert_consistent(&tree, &scan, &mut rng, 200, -5, 3 * n + 5);
    }

    #[test]
    fn test_heavy_duplicates_consistency() {
        // Few distinct values: many equal x, equal y and identical points.
        let mut rng = StdRng::seed_from_u64(7);
        let points = random_points(&mut rng, 500, 0, 4);
        let (tree, scan) = setup(&points);
        assert_eq!(tree.len(), 500);
        assert!(tree.check_invariants().is_ok(), "Invariants hold with duplicates");
        assert_consistent(&tree, &scan, &mut rng, 200, -1, 5);
    }

    #[test]
    fn test_negative_coordinates_consistency() {
        let mut rng = StdRng::seed_from_u64(1234);
        let points = random_points(&mut rng, 300, -100, 100);
        let (tree, scan) = setup(&points);
        assert!(tree.check_invariants().is_ok(), "Invariants hold with negative values");
        assert_consistent(&tree, &scan, &mut rng, 200, -110, 110);
    }

    #[test]
    fn test_float_consistency() {
        let mut rng = StdRng::seed_from_u64(2024);
        let points: Vec<Point<f64>> = (0..1_000)
            .map(|_| Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect();
        let (tree, scan) = setup(&points);
        assert!(tree.check_invariants().is_ok(), "Invariants hold for f64");

        let mut got = Vec::new();
        let mut want = Vec::new();
        for _ in 0..200 {
            let x1: f64 = rng.random_range(0.0..100.0);
            let x2 = x1 + rng.random_range(0.0..30.0);
            let y1: f64 = rng.random_range(0.0..100.0);
            let y2 = y1 + rng.random_range(0.0..30.0);

            tree.query_three_sided(x1, x2, y1, &mut got);
            scan.query_three_sided(x1, x2, y1, &mut want);
            assert_eq!(canonical(got.clone()), canonical(want.clone()), "three-sided differs");

            scan.query_four_sided(x1, x2, y1, y2, &mut want);
            let want = canonical(want.clone());
            for strategy in [FourSidedStrategy::Direct, FourSidedStrategy::SplitPath] {
                tree.query_four_sided_with(strategy, x1, x2, y1, y2, &mut got);
                assert_eq!(canonical(got.clone()), want, "four-sided with {strategy:?} differs");
            }
        }
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(99);
        let points = random_points(&mut rng, 400, 0, 200);
        let a = PrioritySearchTree::from_unsorted(points.clone()).unwrap();
        let b = PrioritySearchTree::from_unsorted(points).unwrap();
        assert_eq!(a.len(), b.len(), "Same node count");
        assert_eq!(a.height(), b.height(), "Same height");

        let mut ra = Vec::new();
        let mut rb = Vec::new();
        for _ in 0..100 {
            let (x1, x2) = random_range(&mut rng, 0, 200);
            let (y1, y2) = random_range(&mut rng, 0, 200);
            a.query_four_sided(x1, x2, y1, y2, &mut ra);
            b.query_four_sided(x1, x2, y1, y2, &mut rb);
            assert_eq!(ra, rb, "Identical trees visit in identical order");
        }
    }
}
