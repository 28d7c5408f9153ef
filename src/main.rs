// main.rs
//
// Small demo of the quadgrid classifier: build a star polygon, print an
// ASCII containment map of the domain, then cross-check tree answers against
// direct winding evaluation for a ring of probe points — the same comparison
// an interactive caller makes between a GPU result and the CPU tree.

use nalgebra::Point2;
use quadgrid::errors::ValidationError;
use quadgrid::float_types::{PI, Real};
use quadgrid::{Polygon, QuadTree};

fn main() -> Result<(), ValidationError> {
    env_logger::init();

    let polygon = Polygon::star(5, 0.85, 0.35);
    let tree = QuadTree::new(polygon, 4)?;

    // Sample cell centers of a coarse raster over the [-1,1] domain,
    // top row first so +y prints upward.
    let (cols, rows) = (48, 24);
    for row in 0..rows {
        let y = 1.0 - 2.0 * (row as Real + 0.5) / rows as Real;
        let mut line = String::with_capacity(cols);
        for col in 0..cols {
            let x = -1.0 + 2.0 * (col as Real + 0.5) / cols as Real;
            line.push(if tree.contains(x, y) { '#' } else { '.' });
        }
        println!("{line}");
    }

    println!();
    for i in 0..8 {
        let theta = PI * (i as Real) / 4.0;
        let (x, y) = (0.6 * theta.cos(), 0.6 * theta.sin());
        let tree_result = tree.contains(x, y);
        let winding_result = tree.polygon().winding_contains(&Point2::new(x, y));
        println!("probe ({x:+.2}, {y:+.2}) -> tree: {tree_result}, winding: {winding_result}");
    }
    println!("cells: {}", tree.node_count());
    Ok(())
}
