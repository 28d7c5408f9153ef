//! Closed polygon loops and the winding-number containment primitive.

use crate::errors::ValidationError;
use crate::float_types::{Real, TAU};
use nalgebra::Point2;

/// Left-of-line predicate: is `p` strictly to the left of the directed edge
/// `a -> b`?
///
/// A sign test on the 2D cross product of the edge direction and the vector
/// from `a` to `p`. Collinear points are *not* left; the winding scan's
/// dual counters absorb that ambiguity rather than an epsilon here.
#[inline]
pub fn left_of(a: &Point2<Real>, b: &Point2<Real>, p: &Point2<Real>) -> bool {
    let edge = b - a;
    let to_point = p - a;
    edge.perp(&to_point) > 0.0
}

/// An ordered loop of 2D vertices, first vertex equal to the last.
///
/// [`Polygon::new`] normalizes open input by appending the first vertex, so
/// the closing edge always exists; edge count is vertex count − 1. The loop
/// may be convex or concave, wound in either direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2<Real>>,
}

impl Polygon {
    /// Build a polygon from an ordered vertex loop, closing it if needed.
    ///
    /// Never fails: degenerate input (fewer than three distinct vertices)
    /// yields a polygon whose containment test reports every point outside.
    pub fn new(mut vertices: Vec<Point2<Real>>) -> Self {
        if let Some(&first) = vertices.first() {
            if vertices.last() != Some(&first) {
                vertices.push(first);
            }
        }
        Self { vertices }
    }

    /// Build a polygon from a flat coordinate buffer with `dim` coordinates
    /// per point, the layout vertex buffers use.
    ///
    /// Only `dim == 2` is supported; anything else is a configuration error.
    /// A trailing partial chunk is ignored.
    pub fn from_flat(coords: &[Real], dim: usize) -> Result<Self, ValidationError> {
        if dim != 2 {
            return Err(ValidationError::UnsupportedDimension(dim));
        }
        let vertices = coords
            .chunks_exact(dim)
            .map(|row| Point2::new(row[0], row[1]))
            .collect();
        Ok(Self::new(vertices))
    }

    /// The closed vertex loop, first vertex equal to the last.
    pub fn vertices(&self) -> &[Point2<Real>] {
        &self.vertices
    }

    /// Iterate the edges as consecutive vertex pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&Point2<Real>, &Point2<Real>)> {
        self.vertices.windows(2).map(|edge| (&edge[0], &edge[1]))
    }

    /// Accumulate the two winding counters for `p`.
    ///
    /// Every edge whose endpoint y-coordinates bracket `p.y` (inclusive on
    /// both ends) crosses the horizontal scanline through `p`. For each such
    /// edge the [`left_of`] sign contributes +1 or −1 to one of two
    /// independent counters, selected by comparing `p.x` against the edge's
    /// midpoint x. Splitting the accumulation this way keeps a crossing whose
    /// x-position is ambiguous relative to `p` from faking a full winding on
    /// its own: a point is only inside when both counters are non-zero, i.e.
    /// when the boundary winds around it on both sides.
    pub fn winding_counts(&self, p: &Point2<Real>) -> (i32, i32) {
        let mut left = 0;
        let mut right = 0;
        for (v1, v2) in self.edges() {
            let brackets = (v1.y <= p.y && p.y <= v2.y) || (v2.y <= p.y && p.y <= v1.y);
            if !brackets {
                continue;
            }
            let sign = if left_of(v1, v2, p) { 1 } else { -1 };
            let mid_x = (v1.x + v2.x) / 2.0;
            if p.x < mid_x {
                left += sign;
            } else {
                right += sign;
            }
        }
        (left, right)
    }

    /// Winding-number containment test: inside iff both counters are
    /// non-zero.
    ///
    /// ```
    /// use nalgebra::Point2;
    /// use quadgrid::Polygon;
    ///
    /// let square = Polygon::square(1.0);
    /// assert!(square.winding_contains(&Point2::new(0.0, 0.0)));
    /// assert!(!square.winding_contains(&Point2::new(0.9, 0.9)));
    /// ```
    pub fn winding_contains(&self, p: &Point2<Real>) -> bool {
        let (left, right) = self.winding_counts(p);
        left != 0 && right != 0
    }

    /// Axis-aligned rectangle centered on the origin.
    pub fn rectangle(width: Real, height: Real) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self::new(vec![
            Point2::new(-hw, -hh),
            Point2::new(hw, -hh),
            Point2::new(hw, hh),
            Point2::new(-hw, hh),
        ])
    }

    /// Square of the given side length centered on the origin.
    pub fn square(width: Real) -> Self {
        Self::rectangle(width, width)
    }

    /// Regular n-gon centered on the origin, first vertex on the +x axis.
    pub fn regular_ngon(sides: usize, radius: Real) -> Self {
        if sides < 3 {
            return Self::new(Vec::new());
        }
        let vertices = (0..sides)
            .map(|i| {
                let theta = TAU * (i as Real) / (sides as Real);
                Point2::new(radius * theta.cos(), radius * theta.sin())
            })
            .collect();
        Self::new(vertices)
    }

    /// Circle approximated by a regular polygon with `segments` edges.
    pub fn circle(radius: Real, segments: usize) -> Self {
        Self::regular_ngon(segments, radius)
    }

    /// Star with `num_points` spikes, alternating between `outer_radius` and
    /// `inner_radius` vertices.
    pub fn star(num_points: usize, outer_radius: Real, inner_radius: Real) -> Self {
        if num_points < 2 {
            return Self::new(Vec::new());
        }
        let step = TAU / (num_points as Real);
        let vertices = (0..num_points)
            .flat_map(|i| {
                let theta_out = i as Real * step;
                let outer = Point2::new(
                    outer_radius * theta_out.cos(),
                    outer_radius * theta_out.sin(),
                );
                let theta_in = theta_out + 0.5 * step;
                let inner = Point2::new(
                    inner_radius * theta_in.cos(),
                    inner_radius * theta_in.sin(),
                );
                [outer, inner]
            })
            .collect();
        Self::new(vertices)
    }

    /// Build a polygon from a [`geo::Polygon`]'s exterior ring. Interior
    /// rings (holes) are ignored.
    #[cfg(feature = "geo-interop")]
    pub fn from_geo(polygon: &geo::Polygon<Real>) -> Self {
        let vertices = polygon
            .exterior()
            .coords()
            .map(|c| Point2::new(c.x, c.y))
            .collect();
        Self::new(vertices)
    }

    /// Convert this loop into a hole-free [`geo::Polygon`].
    #[cfg(feature = "geo-interop")]
    pub fn to_geo(&self) -> geo::Polygon<Real> {
        let ring = self
            .vertices
            .iter()
            .map(|v| (v.x, v.y))
            .collect::<Vec<_>>();
        geo::Polygon::new(geo::LineString::from(ring), vec![])
    }
}
