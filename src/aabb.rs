//! Axis-aligned bounding boxes for classification cells.

use crate::float_types::Real;
use nalgebra::Point2;

/// An axis-aligned box in the plane, stored as its lower-left (`mins`) and
/// upper-right (`maxs`) corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub mins: Point2<Real>,
    pub maxs: Point2<Real>,
}

impl Aabb {
    #[inline]
    pub const fn new(mins: Point2<Real>, maxs: Point2<Real>) -> Self {
        Self { mins, maxs }
    }

    #[inline]
    pub fn center(&self) -> Point2<Real> {
        Point2::new(
            (self.mins.x + self.maxs.x) / 2.0,
            (self.mins.y + self.maxs.y) / 2.0,
        )
    }

    /// Strict interior test, exclusive on all four sides. Points on the box
    /// boundary are *not* contained.
    #[inline]
    pub fn contains_open(&self, p: &Point2<Real>) -> bool {
        self.mins.x < p.x && p.x < self.maxs.x && self.mins.y < p.y && p.y < self.maxs.y
    }

    /// Split into four equal quadrants around the center, ordered
    /// bottom-left, bottom-right, top-left, top-right.
    ///
    /// The quadrants tile this box exactly; under [`contains_open`](Aabb::contains_open)
    /// they are pairwise disjoint, and points on the shared seams belong to
    /// none of them.
    pub fn split_quadrants(&self) -> [Aabb; 4] {
        let c = self.center();
        [
            Aabb::new(self.mins, c),
            Aabb::new(Point2::new(c.x, self.mins.y), Point2::new(self.maxs.x, c.y)),
            Aabb::new(Point2::new(self.mins.x, c.y), Point2::new(c.x, self.maxs.y)),
            Aabb::new(c, self.maxs),
        ]
    }
}
