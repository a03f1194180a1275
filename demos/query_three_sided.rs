//! Find points inside an x range and above a y threshold.
use pst::prelude::*;

fn main() -> Result<(), PstError> {
    let tree = PrioritySearchTree::from_unsorted(vec![
        Point::new(60, 75),
        Point::new(90, 5),
        Point::new(50, 10),
        Point::new(85, 15),
        Point::new(5, 45),
        Point::new(35, 40),
        Point::new(80, 65),
        Point::new(25, 35),
    ])?;

    let mut results = Vec::new();
    tree.query_three_sided(10, 60, 10, &mut results);
    println!("10 <= x <= 60, y >= 10: {:?}", results);

    // (5, 45) is left of the range, (80, 65) right of it
    assert_eq!(results.len(), 4, "Expected 4 points");
    assert!(results.contains(&Point::new(60, 75)), "Apex of the whole tree is inside");
    Ok(())
}
