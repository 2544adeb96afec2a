//! Core geometry for VayuNav.
//!
//! This module provides the fundamental types used throughout the crate:
//! - [`GeoPoint`]: (longitude, latitude) position with distance/bearing helpers
//! - [`Bearing`] and [`Rotation`]: 10°-quantized polar headings
//! - [`Bounds`]: axis-aligned boxes with strict containment
//! - [`Polygon`]: closed rings with segment intersection and point-in-polygon

mod bearing;
mod bounds;
mod geometry;
mod point;

pub use bearing::{BEARING_STEP, Bearing, Rotation};
pub use bounds::Bounds;
pub use geometry::{Polygon, point_in_polygon, segments_intersect};
pub use point::GeoPoint;
