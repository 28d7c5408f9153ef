//! Quadtree cell nodes and the two-phase classification protocol.

use crate::aabb::Aabb;
use crate::float_types::Real;
use crate::polygon::Polygon;
use nalgebra::Point2;

/// Offset from a cell's lower-left corner to its classification sample, so
/// the winding evaluation never lands exactly on a subdivision seam.
const CORNER_NUDGE: Real = 1e-6;

/// Classification of a cell relative to the polygon boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellStatus {
    /// Not yet classified. Must not survive a completed build; a query that
    /// still meets one logs a diagnostic and answers "outside".
    Unknown,
    /// The cell lies entirely inside the polygon.
    Interior,
    /// The cell lies entirely outside the polygon.
    Exterior,
    /// The boundary passes through the cell: at least one polygon vertex
    /// lies strictly inside its open bounds.
    Mixed,
}

/// A quadtree cell, containing its bounds, a status tag, and zero or exactly
/// four owned children.
#[derive(Debug, Clone)]
pub struct Node {
    /// Axis-aligned bounds of this cell.
    pub bounds: Aabb,
    /// Current classification; terminal after [`Node::resolve`].
    pub status: CellStatus,
    /// Child cells ordered bottom-left, bottom-right, top-left, top-right,
    /// *or* **None** for a leaf. The four children tile `bounds` exactly.
    pub children: Option<Box<[Node; 4]>>,
}

impl Node {
    /// Create a leaf cell and immediately classify it against the polygon
    /// (phase 1): Mixed when any vertex of the loop lies strictly inside the
    /// open bounds, Unknown otherwise.
    ///
    /// Scanning vertices covers every edge endpoint, since the closed loop's
    /// edge endpoints are exactly its vertex list.
    pub fn new(bounds: Aabb, polygon: &Polygon) -> Self {
        let status = if polygon.vertices().iter().any(|v| bounds.contains_open(v)) {
            CellStatus::Mixed
        } else {
            CellStatus::Unknown
        };
        Self {
            bounds,
            status,
            children: None,
        }
    }

    /// Recursively split this cell into four quadrants.
    ///
    /// A cell subdivides only while its own status is [`CellStatus::Mixed`]
    /// and the depth budget allows (`depth <= max_depth`; the root is
    /// visited with depth 0). Each child is classified at creation, before
    /// the recursion decides whether to split it further.
    pub fn subdivide(&mut self, polygon: &Polygon, depth: usize, max_depth: usize) {
        if depth > max_depth {
            return;
        }
        if self.status != CellStatus::Mixed {
            return;
        }
        let mut children =
            Box::new(self.bounds.split_quadrants().map(|q| Node::new(q, polygon)));
        for child in children.iter_mut() {
            child.subdivide(polygon, depth + 1, max_depth);
        }
        self.children = Some(children);
    }

    /// Resolve every remaining status after construction (phase 2).
    ///
    /// Mixed cells with children recurse; the children are disjoint, so the
    /// visiting order is irrelevant. Unknown cells are settled by one
    /// winding evaluation at the nudged lower-left corner. A Mixed cell
    /// without children stays Mixed: the boundary crosses it, and only a
    /// per-query evaluation can answer points inside it. Idempotent.
    pub fn resolve(&mut self, polygon: &Polygon) {
        match self.status {
            CellStatus::Mixed => {
                if let Some(children) = &mut self.children {
                    for child in children.iter_mut() {
                        child.resolve(polygon);
                    }
                }
            },
            CellStatus::Unknown => {
                let sample = Point2::new(
                    self.bounds.mins.x + CORNER_NUDGE,
                    self.bounds.mins.y + CORNER_NUDGE,
                );
                self.status = if polygon.winding_contains(&sample) {
                    CellStatus::Interior
                } else {
                    CellStatus::Exterior
                };
            },
            CellStatus::Interior | CellStatus::Exterior => {},
        }
    }

    /// Answer a containment query by descending the hierarchy.
    ///
    /// Total over all real-valued inputs: a point that no child contains
    /// (it sits exactly on an internal seam, or outside the domain at the
    /// root) falls back to this cell's own winding evaluation instead of
    /// failing.
    pub fn search(&self, p: &Point2<Real>, polygon: &Polygon) -> bool {
        match self.status {
            CellStatus::Mixed => {
                if let Some(children) = &self.children {
                    if let Some(child) = children.iter().find(|c| c.bounds.contains_open(p)) {
                        return child.search(p, polygon);
                    }
                }
                polygon.winding_contains(p)
            },
            CellStatus::Interior => true,
            CellStatus::Exterior => false,
            CellStatus::Unknown => {
                log::warn!(
                    "containment query ({}, {}) reached an unclassified cell; answering outside",
                    p.x,
                    p.y
                );
                false
            },
        }
    }
}
