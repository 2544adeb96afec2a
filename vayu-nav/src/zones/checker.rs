//! Move legality against the confinement area and no-fly-zones.
//!
//! A move is legal when it ends strictly inside the confinement rectangle
//! and its segment crosses no edge of any no-fly-zone. Each zone carries a
//! padded bounding box so most zones can be dismissed without walking their
//! full ring:
//!
//! ```text
//!   padded box ┌──────────────┐
//!              │  ┌────────┐  │   origin/destination inside the box,
//!   o──────────┼─▶│  zone  │  │   or segment crossing the box edge
//!              │  └────────┘  │   ──▶ exact test against the zone ring
//!              └──────────────┘
//! ```

use crate::config::FlightConfig;
use crate::core::{Bearing, Bounds, GeoPoint, Polygon};

/// A no-fly-zone with its padded bounding box, fixed at construction.
#[derive(Clone, Debug)]
pub struct ZoneRecord {
    polygon: Polygon,
    padded_bounds: Bounds,
}

impl ZoneRecord {
    /// Wrap a zone, expanding its bounding box by `padding` on each side.
    pub fn new(polygon: Polygon, padding: f64) -> Self {
        let padded_bounds = polygon.bounds().padded(padding);
        Self {
            polygon,
            padded_bounds,
        }
    }

    /// The true zone ring.
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Bounding box including padding.
    pub fn padded_bounds(&self) -> &Bounds {
        &self.padded_bounds
    }

    /// Check whether the segment `origin`-`destination` crosses this zone.
    fn blocks(&self, origin: GeoPoint, destination: GeoPoint) -> bool {
        let near = self.padded_bounds.contains_strict(origin)
            || self.padded_bounds.contains_strict(destination)
            || self
                .padded_bounds
                .segment_crosses_edge(origin, destination);

        near && self.polygon.intersects_segment(origin, destination)
    }
}

/// Decides whether single moves are legal.
#[derive(Clone, Debug)]
pub struct ZoneChecker {
    zones: Vec<ZoneRecord>,
    confinement: Bounds,
    move_distance: f64,
}

impl ZoneChecker {
    /// Precompute zone records from the flight configuration.
    pub fn new(zones: &[Polygon], config: &FlightConfig) -> Self {
        let zones: Vec<ZoneRecord> = zones
            .iter()
            .cloned()
            .map(|polygon| ZoneRecord::new(polygon, config.area.zone_padding))
            .collect();

        tracing::debug!("Zone checker built with {} no-fly-zones", zones.len());

        Self {
            zones,
            confinement: config.area.confinement,
            move_distance: config.drone.move_distance,
        }
    }

    /// Zone records in input order.
    pub fn zones(&self) -> &[ZoneRecord] {
        &self.zones
    }

    /// Where a move from `origin` along `bearing` lands.
    #[inline]
    pub fn destination(&self, origin: GeoPoint, bearing: Bearing) -> GeoPoint {
        origin.destination(bearing, self.move_distance)
    }

    /// Check if moving from `origin` along `bearing` is allowed.
    pub fn is_legal(&self, origin: GeoPoint, bearing: Bearing) -> bool {
        let destination = self.destination(origin, bearing);

        if !self.confinement.contains_strict(destination) {
            return false;
        }

        !self
            .zones
            .iter()
            .any(|zone| zone.blocks(origin, destination))
    }

    /// Check if the move's destination lies inside any zone.
    ///
    /// Confinement is ignored. Distinguishes an overshoot straight into a
    /// zone from a move that merely clips a zone edge.
    pub fn lands_in_zone(&self, origin: GeoPoint, bearing: Bearing) -> bool {
        let destination = self.destination(origin, bearing);
        self.zones
            .iter()
            .any(|zone| zone.polygon.contains(destination))
    }
}
