//! Segment and polygon predicates.
//!
//! Side tests use the sign of the 2D cross product with `>= 0` counted as
//! one side. Collinear and touching configurations therefore fall on a
//! fixed side rather than being resolved specially.

use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::point::GeoPoint;

/// True if the vectors `a` and `b` lie on opposite sides of `line`.
#[inline]
fn opposite_sides(a: GeoPoint, b: GeoPoint, line: GeoPoint) -> bool {
    (line.cross(&a) >= 0.0) ^ (line.cross(&b) >= 0.0)
}

/// Check whether segment `s`-`e` crosses segment `p`-`q`.
///
/// Both segments must straddle the supporting line of the other.
#[inline]
pub fn segments_intersect(s: GeoPoint, e: GeoPoint, p: GeoPoint, q: GeoPoint) -> bool {
    opposite_sides(s - p, e - p, q - p) && opposite_sides(p - s, q - s, e - s)
}

/// Even-odd ray casting test. Points on an edge may go either way.
pub fn point_in_polygon(point: GeoPoint, ring: &[GeoPoint]) -> bool {
    let mut inside = false;
    for edge in ring.windows(2) {
        let (a, b) = (edge[0], edge[1]);
        if (a.lat > point.lat) != (b.lat > point.lat) {
            let lng_at = a.lng + (point.lat - a.lat) / (b.lat - a.lat) * (b.lng - a.lng);
            if point.lng < lng_at {
                inside = !inside;
            }
        }
    }
    inside
}

/// Simple polygon stored as a closed ring (first point == last point).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<GeoPoint>", into = "Vec<GeoPoint>")]
pub struct Polygon {
    ring: Vec<GeoPoint>,
}

impl Polygon {
    /// Build a polygon, closing the ring if the last point differs from the first.
    pub fn new(mut points: Vec<GeoPoint>) -> Self {
        if let (Some(first), Some(last)) = (points.first().copied(), points.last().copied())
            && first != last
        {
            points.push(first);
        }
        Self { ring: points }
    }

    /// Closed ring of vertices.
    #[inline]
    pub fn ring(&self) -> &[GeoPoint] {
        &self.ring
    }

    /// Tight axis-aligned box around the ring.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_points(&self.ring)
    }

    /// Check whether the segment `a`-`b` crosses any edge of the ring.
    pub fn intersects_segment(&self, a: GeoPoint, b: GeoPoint) -> bool {
        self.ring
            .windows(2)
            .any(|edge| segments_intersect(a, b, edge[0], edge[1]))
    }

    /// Check whether a point lies inside the ring.
    #[inline]
    pub fn contains(&self, point: GeoPoint) -> bool {
        point_in_polygon(point, &self.ring)
    }
}

impl From<Vec<GeoPoint>> for Polygon {
    fn from(points: Vec<GeoPoint>) -> Self {
        Polygon::new(points)
    }
}

impl From<Polygon> for Vec<GeoPoint> {
    fn from(polygon: Polygon) -> Self {
        polygon.ring
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(1.0, 0.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_ring_is_closed() {
        let square = unit_square();
        assert_eq!(square.ring().len(), 5);
        assert_eq!(square.ring().first(), square.ring().last());

        // Already closed rings are left alone
        let closed = Polygon::new(square.ring().to_vec());
        assert_eq!(closed.ring().len(), 5);
    }

    #[test]
    fn test_segments_intersect() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(2.0, 2.0);
        let c = GeoPoint::new(0.0, 2.0);
        let d = GeoPoint::new(2.0, 0.0);
        assert!(segments_intersect(a, b, c, d));
        assert!(segments_intersect(c, d, a, b));

        // Parallel
        assert!(!segments_intersect(
            a,
            GeoPoint::new(2.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            GeoPoint::new(2.0, 1.0)
        ));

        // Lines cross but the segments stop short
        assert!(!segments_intersect(
            a,
            GeoPoint::new(0.9, 0.9),
            GeoPoint::new(0.0, 4.0),
            GeoPoint::new(4.0, 0.0)
        ));
    }

    #[test]
    fn test_point_in_polygon() {
        let square = unit_square();
        assert!(square.contains(GeoPoint::new(0.5, 0.5)));
        assert!(!square.contains(GeoPoint::new(1.5, 0.5)));
        assert!(!square.contains(GeoPoint::new(-0.5, 0.5)));

        // Concave L-shape: the notch is outside
        let l_shape = Polygon::new(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(2.0, 0.0),
            GeoPoint::new(2.0, 1.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(1.0, 2.0),
            GeoPoint::new(0.0, 2.0),
        ]);
        assert!(l_shape.contains(GeoPoint::new(0.5, 1.5)));
        assert!(l_shape.contains(GeoPoint::new(1.5, 0.5)));
        assert!(!l_shape.contains(GeoPoint::new(1.5, 1.5)));
    }

    #[test]
    fn test_polygon_segment_intersection() {
        let square = unit_square();
        assert!(square.intersects_segment(GeoPoint::new(-1.0, 0.5), GeoPoint::new(0.5, 0.5)));
        assert!(square.intersects_segment(GeoPoint::new(-1.0, 0.5), GeoPoint::new(2.0, 0.5)));
        assert!(!square.intersects_segment(GeoPoint::new(-1.0, 1.5), GeoPoint::new(2.0, 1.5)));
        // Entirely inside: no edge crossed
        assert!(!square.intersects_segment(GeoPoint::new(0.2, 0.5), GeoPoint::new(0.8, 0.5)));
    }

    #[test]
    fn test_bounds() {
        let b = unit_square().bounds();
        assert_eq!(b.min, GeoPoint::new(0.0, 0.0));
        assert_eq!(b.max, GeoPoint::new(1.0, 1.0));
    }
}
