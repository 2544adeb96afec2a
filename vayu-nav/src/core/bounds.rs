//! Axis-aligned bounding box.
//!
//! [`Bounds`] is used both for the drone confinement area and for the padded
//! boxes that pre-filter no-fly-zone checks.
//!
//! # Usage
//!
//! ```rust
//! use vayu_nav::core::{Bounds, GeoPoint};
//!
//! let area = Bounds::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(10.0, 8.0));
//!
//! assert!(area.contains_strict(GeoPoint::new(5.0, 4.0)));
//! // Points on the edge are outside
//! assert!(!area.contains_strict(GeoPoint::new(0.0, 4.0)));
//! ```

use serde::{Deserialize, Serialize};

use super::geometry::segments_intersect;
use super::point::GeoPoint;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// South-west corner (smallest longitude and latitude).
    pub min: GeoPoint,
    /// North-east corner (largest longitude and latitude).
    pub max: GeoPoint,
}

impl Bounds {
    /// Create a new bounding box from min and max corners.
    #[inline]
    pub const fn new(min: GeoPoint, max: GeoPoint) -> Self {
        Self { min, max }
    }

    /// Create an empty (invalid) bounding box.
    ///
    /// The empty bounds has min > max, so it will expand to fit any point.
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: GeoPoint::new(f64::INFINITY, f64::INFINITY),
            max: GeoPoint::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Smallest box containing all points.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Self {
        let mut bounds = Self::empty();
        for p in points {
            bounds.expand_to_include(*p);
        }
        bounds
    }

    /// Check if the bounds have no interior.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.lng >= self.max.lng || self.min.lat >= self.max.lat
    }

    /// Width of the bounding box (longitude extent).
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.lng - self.min.lng
    }

    /// Height of the bounding box (latitude extent).
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.lat - self.min.lat
    }

    /// Check if a point lies strictly inside the box (edges excluded).
    #[inline]
    pub fn contains_strict(&self, point: GeoPoint) -> bool {
        point.lng > self.min.lng
            && point.lng < self.max.lng
            && point.lat > self.min.lat
            && point.lat < self.max.lat
    }

    /// Expand bounds to include a point.
    #[inline]
    pub fn expand_to_include(&mut self, point: GeoPoint) {
        self.min.lng = self.min.lng.min(point.lng);
        self.min.lat = self.min.lat.min(point.lat);
        self.max.lng = self.max.lng.max(point.lng);
        self.max.lat = self.max.lat.max(point.lat);
    }

    /// Grow the box by `margin` on every side.
    #[inline]
    pub fn padded(&self, margin: f64) -> Self {
        Self {
            min: GeoPoint::new(self.min.lng - margin, self.min.lat - margin),
            max: GeoPoint::new(self.max.lng + margin, self.max.lat + margin),
        }
    }

    /// Corners as a closed ring: NE, NW, SW, SE, NE.
    pub fn ring(&self) -> [GeoPoint; 5] {
        let ne = self.max;
        let nw = GeoPoint::new(self.min.lng, self.max.lat);
        let sw = self.min;
        let se = GeoPoint::new(self.max.lng, self.min.lat);
        [ne, nw, sw, se, ne]
    }

    /// Check if the segment `a`-`b` crosses any edge of the box.
    pub fn segment_crosses_edge(&self, a: GeoPoint, b: GeoPoint) -> bool {
        self.ring()
            .windows(2)
            .any(|edge| segments_intersect(a, b, edge[0], edge[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Bounds {
        Bounds::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0))
    }

    #[test]
    fn test_contains_strict_excludes_edges() {
        let b = unit();
        assert!(b.contains_strict(GeoPoint::new(0.5, 0.5)));
        assert!(!b.contains_strict(GeoPoint::new(0.0, 0.5)));
        assert!(!b.contains_strict(GeoPoint::new(0.5, 1.0)));
        assert!(!b.contains_strict(GeoPoint::new(1.5, 0.5)));
    }

    #[test]
    fn test_from_points_and_padding() {
        let points = [
            GeoPoint::new(1.0, 2.0),
            GeoPoint::new(-1.0, 3.0),
            GeoPoint::new(0.5, -2.0),
        ];
        let b = Bounds::from_points(&points).padded(0.5);
        assert_eq!(b.min, GeoPoint::new(-1.5, -2.5));
        assert_eq!(b.max, GeoPoint::new(1.5, 3.5));
        assert!(Bounds::empty().is_empty());
        assert!(!b.is_empty());
    }

    #[test]
    fn test_segment_crosses_edge() {
        let b = unit();
        // Clips the corner without either endpoint inside
        assert!(b.segment_crosses_edge(GeoPoint::new(-0.1, 0.8), GeoPoint::new(0.3, 1.2)));
        // Passes well clear
        assert!(!b.segment_crosses_edge(GeoPoint::new(-1.0, 2.0), GeoPoint::new(2.0, 2.0)));
    }
}
