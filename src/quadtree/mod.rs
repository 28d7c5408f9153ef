//! Hierarchical point-in-polygon classification over a fixed square domain.
//!
//! A [`QuadTree`] is built once per polygon: the root cell covering
//! [`DOMAIN`] is subdivided into quadrants wherever the boundary passes
//! through a cell and the depth budget allows, every cell away from the
//! boundary is settled to Interior or Exterior by a single winding
//! evaluation, and queries then descend the hierarchy to either a cached
//! status or one winding evaluation at a boundary cell. Build cost is
//! O(E · 4^depth) for E edges; queries are O(depth + E) worst case.
//!
//! The tree is immutable after construction, and queries take `&self`, so
//! concurrent readers need no locking.

pub mod node;

pub use node::{CellStatus, Node};

use crate::aabb::Aabb;
use crate::errors::ValidationError;
use crate::float_types::Real;
use crate::polygon::Polygon;
use nalgebra::Point2;

/// Canonical domain covered by the root cell.
pub const DOMAIN: Aabb = Aabb::new(Point2::new(-1.0, -1.0), Point2::new(1.0, 1.0));

/// A quadtree classifier for point-in-polygon queries, owning its root cell,
/// a snapshot of the polygon, and the subdivision depth bound.
///
/// The constructor takes the polygon by value: the snapshot can never be
/// mutated behind the tree's back. Queries are total — any pair of real
/// coordinates gets an answer, including points outside [`DOMAIN`].
///
/// ```
/// use quadgrid::{Polygon, QuadTree};
///
/// let tree = QuadTree::new(Polygon::square(1.0), 3).unwrap();
/// assert!(tree.contains(0.0, 0.0));
/// assert!(!tree.contains(0.9, 0.9));
/// ```
#[derive(Debug, Clone)]
pub struct QuadTree {
    root: Node,
    polygon: Polygon,
    max_depth: usize,
}

impl QuadTree {
    /// Build the classification hierarchy for `polygon` over [`DOMAIN`].
    ///
    /// `max_depth` bounds subdivision and must be at least 1, else
    /// [`ValidationError::InvalidDepth`]. Construction always terminates:
    /// at most 4^(max_depth + 1) cells are created, each scanned against the
    /// polygon's edge list once.
    pub fn new(polygon: Polygon, max_depth: usize) -> Result<Self, ValidationError> {
        if max_depth < 1 {
            return Err(ValidationError::InvalidDepth(max_depth));
        }
        let mut root = Node::new(DOMAIN, &polygon);
        log::debug!("root cell created");
        root.subdivide(&polygon, 0, max_depth);
        log::debug!("cell hierarchy built");
        root.resolve(&polygon);
        log::debug!("cell statuses resolved");
        Ok(Self {
            root,
            polygon,
            max_depth,
        })
    }

    /// Is the point `(x, y)` inside the polygon?
    ///
    /// Defined for every real-valued pair; never panics. NaN or infinite
    /// coordinates satisfy no bracketing comparison and answer `false`.
    pub fn contains(&self, x: Real, y: Real) -> bool {
        self.contains_point(&Point2::new(x, y))
    }

    /// [`QuadTree::contains`] for an existing point value.
    pub fn contains_point(&self, p: &Point2<Real>) -> bool {
        self.root.search(p, &self.polygon)
    }

    /// The root cell of the hierarchy.
    pub const fn root(&self) -> &Node {
        &self.root
    }

    /// The polygon snapshot this tree classifies against.
    pub const fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// The subdivision depth bound the tree was built with.
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Total number of cells in the hierarchy, root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += 1;
            if let Some(children) = &node.children {
                stack.extend(children.iter());
            }
        }
        count
    }
}
