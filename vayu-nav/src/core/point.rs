//! Geographic point type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

use super::bearing::Bearing;

/// A (longitude, latitude) position in degrees.
///
/// All distances in the crate are Euclidean in degree-space; the survey
/// area is small enough that the curvature of the earth is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Longitude in degrees (x axis)
    pub lng: f64,
    /// Latitude in degrees (y axis)
    pub lat: f64,
}

impl GeoPoint {
    /// Create a new point
    #[inline]
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &GeoPoint) -> f64 {
        let dx = self.lng - other.lng;
        let dy = self.lat - other.lat;
        (dx * dx + dy * dy).sqrt()
    }

    /// Quantized bearing from this point to another.
    #[inline]
    pub fn bearing_to(&self, other: &GeoPoint) -> Bearing {
        let dx = other.lng - self.lng;
        let dy = other.lat - self.lat;
        Bearing::nearest(dy.atan2(dx).to_degrees())
    }

    /// Point reached by travelling `distance` along `bearing`.
    #[inline]
    pub fn destination(&self, bearing: Bearing, distance: f64) -> GeoPoint {
        let theta = bearing.to_radians();
        GeoPoint::new(
            self.lng + distance * theta.cos(),
            self.lat + distance * theta.sin(),
        )
    }

    /// Cross product (z-component of 3D cross product)
    #[inline]
    pub fn cross(&self, other: &GeoPoint) -> f64 {
        self.lng * other.lat - self.lat * other.lng
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lng, self.lat)
    }
}

impl Add for GeoPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GeoPoint::new(self.lng + other.lng, self.lat + other.lat)
    }
}

impl Sub for GeoPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GeoPoint::new(self.lng - other.lng, self.lat - other.lat)
    }
}

impl Mul<f64> for GeoPoint {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        GeoPoint::new(self.lng * scalar, self.lat * scalar)
    }
}
