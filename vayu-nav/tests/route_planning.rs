//! Route planning tests for VayuNav.
//!
//! Randomized sensor sets check the tour properties that must hold for any
//! input, seeded so failures reproduce.

mod common;

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use vayu_nav::core::{Bounds, GeoPoint};
use vayu_nav::{PlannerConfig, RoutePlanner, Sensor};

fn survey_area() -> Bounds {
    Bounds::new(
        GeoPoint::new(-3.192473, 55.942617),
        GeoPoint::new(-3.184319, 55.946233),
    )
}

fn launch() -> GeoPoint {
    GeoPoint::new(-3.1878, 55.9444)
}

fn sensor_sets() -> impl Iterator<Item = Vec<Sensor>> {
    (0..20u64).map(|seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = 3 + (seed as usize * 7) % 38;
        common::random_sensors(&mut rng, n, &survey_area())
    })
}

#[test]
fn test_every_sensor_visited_once() {
    let planner = RoutePlanner::default();
    for sensors in sensor_sets() {
        let route = planner.plan(launch(), &sensors);
        assert_eq!(route.len(), sensors.len());

        let planned: BTreeSet<&str> = route.iter().map(|s| s.address.as_str()).collect();
        let given: BTreeSet<&str> = sensors.iter().map(|s| s.address.as_str()).collect();
        assert_eq!(planned, given);
    }
}

#[test]
fn test_two_opt_never_longer_than_greedy() {
    for sensors in sensor_sets() {
        let greedy = RoutePlanner::greedy(launch(), &sensors);
        let greedy_length = greedy.tour_length(launch());
        let improved = RoutePlanner::two_opt(launch(), greedy);

        assert!(
            improved.tour_length(launch()) <= greedy_length + 1e-12,
            "2-opt {} longer than greedy {}",
            improved.tour_length(launch()),
            greedy_length
        );
    }
}

#[test]
fn test_two_opt_is_a_fixed_point() {
    for sensors in sensor_sets() {
        let once = RoutePlanner::default().plan(launch(), &sensors);
        let twice = RoutePlanner::two_opt(launch(), once.clone());
        assert_eq!(once, twice);
    }
}

#[test]
fn test_disabling_two_opt_gives_greedy() {
    let planner = RoutePlanner::new(PlannerConfig { two_opt: false });
    for sensors in sensor_sets() {
        assert_eq!(
            planner.plan(launch(), &sensors),
            RoutePlanner::greedy(launch(), &sensors)
        );
    }
}

#[test]
fn test_planning_is_deterministic() {
    let planner = RoutePlanner::default();
    for sensors in sensor_sets() {
        assert_eq!(
            planner.plan(launch(), &sensors),
            planner.plan(launch(), &sensors)
        );
    }
}
