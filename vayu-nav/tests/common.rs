//! Test utilities for VayuNav flights.
//!
//! Scenarios use a coarse unit-scale configuration so the geometry can be
//! reasoned about by hand.

#![allow(dead_code)]

use rand::Rng;
use rand::rngs::StdRng;
use vayu_nav::core::{Bounds, GeoPoint, Polygon};
use vayu_nav::{AreaConfig, DroneConfig, FlightConfig, FlightReport, Sensor, ZoneChecker};

/// Moves of 0.15 inside a 10 × 10 area.
pub fn unit_config() -> FlightConfig {
    FlightConfig {
        drone: DroneConfig {
            move_distance: 0.15,
            sensor_read_radius: 0.1,
            home_radius: 0.15,
            ..Default::default()
        },
        area: AreaConfig {
            confinement: Bounds::new(GeoPoint::new(-5.0, -5.0), GeoPoint::new(5.0, 5.0)),
            zone_padding: 0.05,
        },
        ..Default::default()
    }
}

/// Same as [`unit_config`] with a different move budget.
pub fn unit_config_with_budget(max_moves: u32) -> FlightConfig {
    let mut config = unit_config();
    config.drone.max_moves = max_moves;
    config
}

/// Rectangle zone from two corners.
pub fn rect(min: (f64, f64), max: (f64, f64)) -> Polygon {
    Bounds::new(GeoPoint::new(min.0, min.1), GeoPoint::new(max.0, max.1))
        .ring()
        .to_vec()
        .into()
}

/// Unit square with corners (0,0), (1,0), (1,1), (0,1).
pub fn unit_square() -> Polygon {
    Polygon::new(vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(1.0, 0.0),
        GeoPoint::new(1.0, 1.0),
        GeoPoint::new(0.0, 1.0),
    ])
}

/// Four overlapping walls enclosing the square of half-width `inner`
/// around the origin, each `thickness` thick.
pub fn enclosure(inner: f64, thickness: f64) -> Vec<Polygon> {
    let outer = inner + thickness;
    vec![
        rect((inner, -outer), (outer, outer)),
        rect((-outer, -outer), (-inner, outer)),
        rect((-outer, inner), (outer, outer)),
        rect((-outer, -outer), (outer, -inner)),
    ]
}

/// `n` sensors placed uniformly inside `area`.
pub fn random_sensors(rng: &mut StdRng, n: usize, area: &Bounds) -> Vec<Sensor> {
    (0..n)
        .map(|i| {
            let point = GeoPoint::new(
                rng.gen_range(area.min.lng..area.max.lng),
                rng.gen_range(area.min.lat..area.max.lat),
            );
            Sensor::new(
                point,
                format!("sensor.{}", i),
                rng.gen_range(0.0..100.0),
                rng.gen_range(0.0..300.0),
            )
        })
        .collect()
}

/// Check the invariants every report must satisfy, complete or not.
pub fn assert_report_consistent(report: &FlightReport, zones: &[Polygon], config: &FlightConfig) {
    assert_eq!(report.path.len(), report.moves.len() + 1);
    assert!(report.moves.len() <= config.drone.max_moves as usize);
    assert_eq!(report.success, report.failure.is_none());

    let checker = ZoneChecker::new(zones, config);
    for (i, record) in report.moves.iter().enumerate() {
        assert_eq!(record.sequence as usize, i + 1);
        assert_eq!(record.from, report.path[i]);
        assert_eq!(record.to, report.path[i + 1]);
        assert!(
            checker.is_legal(record.from, record.bearing),
            "move {} from {} along {} is illegal",
            record.sequence,
            record.from,
            record.bearing
        );
        assert!(config.area.confinement.contains_strict(record.to));
    }

    assert_eq!(report.flight_log().lines().count(), report.moves.len());
}
