//! Step-by-step flight along a planned route.
//!
//! Each leg is flown one quantized move at a time. The heading for a move
//! comes from, in order of preference:
//!
//! 1. a detour queued by an earlier search,
//! 2. the direct bearing (or an overshoot-corrected one) to the waypoint,
//! 3. a fresh dual-branch search, whose bearings are queued.
//!
//! A leg ends when the drone gets within the waypoint's arrival radius, the
//! move budget runs out, or no legal heading exists.

use std::collections::{BTreeMap, VecDeque};

use crate::config::FlightConfig;
use crate::core::{Bearing, GeoPoint, Polygon};
use crate::error::{NavError, Result};
use crate::planning::Route;
use crate::waypoint::Waypoint;
use crate::zones::ZoneChecker;

use super::report::{FlightReport, MoveRecord, VisitOutcome};
use super::search::{find_detour, most_direct_bearing};
use super::vehicle::VehicleState;

/// Flies a drone from its launch point through a route and back.
pub struct Navigator {
    config: FlightConfig,
    checker: ZoneChecker,
    launch: GeoPoint,
    vehicle: VehicleState,
    /// Detour bearings still to fly
    pending: VecDeque<Bearing>,
    path: Vec<GeoPoint>,
    moves: Vec<MoveRecord>,
    visits: BTreeMap<String, VisitOutcome>,
}

impl Navigator {
    /// Create a navigator for a drone sitting at `launch`.
    pub fn new(launch: GeoPoint, zones: &[Polygon], config: FlightConfig) -> Self {
        let checker = ZoneChecker::new(zones, &config);
        Self {
            config,
            checker,
            launch,
            vehicle: VehicleState::new(launch),
            pending: VecDeque::new(),
            path: vec![launch],
            moves: Vec::new(),
            visits: BTreeMap::new(),
        }
    }

    /// Current drone position.
    pub fn position(&self) -> GeoPoint {
        self.vehicle.position()
    }

    /// Vehicle state (position and moves spent).
    pub fn vehicle(&self) -> &VehicleState {
        &self.vehicle
    }

    /// Positions flown through so far, launch point first.
    pub fn path(&self) -> &[GeoPoint] {
        &self.path
    }

    /// Moves flown so far.
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// Sensor outcomes recorded so far.
    pub fn visits(&self) -> &BTreeMap<String, VisitOutcome> {
        &self.visits
    }

    /// Fly until `waypoint` is reached.
    ///
    /// Always makes at least one move, even if the drone already starts
    /// within the arrival radius, so every sensor read happens at the end
    /// of a move.
    pub fn navigate_to(&mut self, waypoint: &Waypoint<'_>) -> Result<()> {
        let target = waypoint.point();

        loop {
            let from = self.vehicle.position();
            let Some(bearing) = self.next_bearing(waypoint) else {
                tracing::warn!("Obstructed at {} heading for {}", from, target);
                return Err(NavError::Obstructed {
                    position: from,
                    target,
                });
            };

            let to = self
                .vehicle
                .advance(bearing, &self.config)
                .inspect_err(|e| tracing::warn!("{}: {}", e.code(), e))?;
            self.path.push(to);

            let arrived = waypoint.is_reached_from(to, &self.config);
            let address = if arrived {
                waypoint.address().map(str::to_owned)
            } else {
                None
            };

            if arrived && let Waypoint::Sensor(sensor) = waypoint {
                let outcome = VisitOutcome {
                    visited: true,
                    valid: sensor.has_valid_reading(&self.config),
                };
                if !outcome.valid {
                    tracing::warn!(
                        "Sensor {} battery at {:.1}%, reading discarded",
                        sensor.address,
                        sensor.battery
                    );
                }
                self.visits.insert(sensor.address.clone(), outcome);
            }

            let sequence = self.vehicle.moves_taken();
            tracing::debug!("Move {}: {} -> {} along {}", sequence, from, to, bearing);
            self.moves.push(MoveRecord {
                sequence,
                from,
                bearing,
                to,
                address,
            });

            if arrived {
                self.pending.clear();
                tracing::info!(
                    "Reached {} after {} moves",
                    waypoint.address().unwrap_or("home"),
                    sequence
                );
                return Ok(());
            }
        }
    }

    /// Pick the heading for the next move, if any is legal.
    fn next_bearing(&mut self, waypoint: &Waypoint<'_>) -> Option<Bearing> {
        if let Some(bearing) = self.pending.pop_front() {
            return Some(bearing);
        }

        let position = self.vehicle.position();
        if let Some(bearing) = most_direct_bearing(&self.checker, position, waypoint, &self.config)
        {
            return Some(bearing);
        }

        let detour = find_detour(&self.checker, position, waypoint, &self.config)?;
        tracing::debug!(
            "Detour of {} moves going {:?} from {}",
            detour.bearings.len(),
            detour.rotation,
            position
        );
        self.pending.extend(detour.bearings);
        self.pending.pop_front()
    }

    /// Fly every sensor in `route` in order, then return to launch.
    ///
    /// Stops at the first leg that fails; everything flown up to then is
    /// kept in the report.
    pub fn follow_route(mut self, route: &Route) -> FlightReport {
        self.visits = route
            .iter()
            .map(|sensor| (sensor.address.clone(), VisitOutcome::default()))
            .collect();

        tracing::info!(
            "Starting flight from {} through {} sensors",
            self.launch,
            route.len()
        );

        let result = self.fly_legs(route);
        match &result {
            Ok(()) => tracing::info!("Flight complete in {} moves", self.moves.len()),
            Err(e) => tracing::warn!(
                "Flight aborted after {} moves: {}",
                self.moves.len(),
                e.code()
            ),
        }

        FlightReport {
            success: result.is_ok(),
            path: self.path,
            moves: self.moves,
            visits: self.visits,
            failure: result.err(),
        }
    }

    fn fly_legs(&mut self, route: &Route) -> Result<()> {
        for sensor in route {
            self.navigate_to(&Waypoint::Sensor(sensor))?;
        }
        self.navigate_to(&Waypoint::Terminal { point: self.launch })
    }
}
