//! Sensor visit ordering.
//!
//! A tour is built greedily (always fly to the nearest unvisited sensor)
//! and then improved with 2-opt: any two tour edges whose endpoints can be
//! swapped for a shorter total are uncrossed by reversing the stretch
//! between them.
//!
//! ```text
//!   before:  start ─ a ─ [b ─ c ─ d] ─ e ─ start
//!   after:   start ─ a ─ [d ─ c ─ b] ─ e ─ start
//!   accept when |a d| + |b e| < |a b| + |d e|
//! ```
//!
//! The first improving pair found is applied and the scan restarts, so the
//! result is deterministic but only a local optimum.

use crate::config::PlannerConfig;
use crate::core::GeoPoint;
use crate::waypoint::Sensor;

/// Ordered sensor visits, each sensor exactly once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Route {
    sensors: Vec<Sensor>,
}

impl Route {
    /// Use `sensors` in the given order.
    pub fn new(sensors: Vec<Sensor>) -> Self {
        Self { sensors }
    }

    /// Sensors in visit order.
    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    /// Number of sensors.
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    /// True if there is nothing to visit.
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Iterate in visit order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sensor> {
        self.sensors.iter()
    }

    /// Length of the closed tour launch → sensors → launch.
    pub fn tour_length(&self, launch: GeoPoint) -> f64 {
        tour_length(launch, self.sensors.iter().map(|s| s.point))
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Sensor;
    type IntoIter = std::slice::Iter<'a, Sensor>;

    fn into_iter(self) -> Self::IntoIter {
        self.sensors.iter()
    }
}

/// Length of the closed tour through `points` starting and ending at `launch`.
pub fn tour_length(launch: GeoPoint, points: impl IntoIterator<Item = GeoPoint>) -> f64 {
    let mut length = 0.0;
    let mut current = launch;
    for p in points {
        length += current.distance(&p);
        current = p;
    }
    length + current.distance(&launch)
}

/// Orders sensor visits.
#[derive(Clone, Debug, Default)]
pub struct RoutePlanner {
    config: PlannerConfig,
}

impl RoutePlanner {
    /// Create a new planner with configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Plan a visit order starting and ending at `launch`.
    pub fn plan(&self, launch: GeoPoint, sensors: &[Sensor]) -> Route {
        let greedy = Self::greedy(launch, sensors);
        if !self.config.two_opt {
            tracing::info!(
                "Planned greedy route through {} sensors, length {:.6}",
                greedy.len(),
                greedy.tour_length(launch)
            );
            return greedy;
        }

        let greedy_length = greedy.tour_length(launch);
        let improved = Self::two_opt(launch, greedy);
        tracing::info!(
            "Planned route through {} sensors, length {:.6} (greedy {:.6})",
            improved.len(),
            improved.tour_length(launch),
            greedy_length
        );
        improved
    }

    /// Nearest-neighbour tour from `launch`.
    pub fn greedy(launch: GeoPoint, sensors: &[Sensor]) -> Route {
        let mut unvisited: Vec<&Sensor> = sensors.iter().collect();
        let mut ordered = Vec::with_capacity(sensors.len());
        let mut current = launch;

        while !unvisited.is_empty() {
            // Ties keep the earliest sensor in input order
            let mut best = 0;
            let mut best_distance = current.distance(&unvisited[0].point);
            for (i, sensor) in unvisited.iter().enumerate().skip(1) {
                let d = current.distance(&sensor.point);
                if d < best_distance {
                    best = i;
                    best_distance = d;
                }
            }
            let next = unvisited.remove(best);
            current = next.point;
            ordered.push(next.clone());
        }

        Route::new(ordered)
    }

    /// Improve a tour with first-improvement 2-opt until no move helps.
    pub fn two_opt(launch: GeoPoint, route: Route) -> Route {
        let mut sensors = route.sensors;

        // [launch, s1, .., sn, launch] so no index wraps around
        let mut path: Vec<GeoPoint> = Vec::with_capacity(sensors.len() + 2);
        path.push(launch);
        path.extend(sensors.iter().map(|s| s.point));
        path.push(launch);

        let mut reversals = 0usize;
        while let Some((i, j)) = first_improving_pair(&path) {
            path[i..=j].reverse();
            sensors[i - 1..j].reverse();
            reversals += 1;
        }

        tracing::debug!("2-opt converged after {} reversals", reversals);
        Route::new(sensors)
    }
}

/// First `(i, j)` whose reversal strictly shortens `path`.
fn first_improving_pair(path: &[GeoPoint]) -> Option<(usize, usize)> {
    let last = path.len().saturating_sub(1);
    for i in 1..last {
        for j in i + 1..last {
            let before = path[i - 1].distance(&path[i]) + path[j].distance(&path[j + 1]);
            let after = path[i - 1].distance(&path[j]) + path[i].distance(&path[j + 1]);
            if after < before {
                return Some((i, j));
            }
        }
    }
    None
}
