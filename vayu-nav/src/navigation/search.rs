//! Bounded dual-branch search around obstructions.
//!
//! When the direct heading to a waypoint is blocked, two branches grow from
//! the vehicle: one sweeps candidate headings clockwise, the other
//! anticlockwise. Each step a branch takes the first legal heading found
//! by sweeping away from the direct bearing, which makes it hug the
//! obstacle on its side:
//!
//! ```text
//!              anticlockwise ─▶ ─▶ ─▶ ┐
//!                ┌──────────────┐     │
//!     vehicle ●──┤   no-fly     ├─ ─ ─▶ goal
//!                └──────────────┘     │
//!                clockwise ─▶ ─▶ ─▶ ─▶┘
//! ```
//!
//! Only the branch with the lower cost (steps taken × move distance +
//! straight-line distance to goal) is grown each round, so the shorter
//! detour usually wins without fully exploring the other side.

use crate::config::FlightConfig;
use crate::core::{Bearing, GeoPoint, Rotation};
use crate::waypoint::Waypoint;
use crate::zones::ZoneChecker;

/// Largest overshoot correction, in bearing steps either side of direct.
const MAX_CORRECTION_STEPS: i32 = 6;

/// Legal bearing from `from` straight towards `waypoint`, if any.
///
/// When the direct move is illegal only because it overshoots into a zone
/// near the target, headings up to 60° either side are tried (clockwise
/// first at each offset) and accepted if the move still ends within the
/// waypoint's arrival radius.
pub fn most_direct_bearing(
    checker: &ZoneChecker,
    from: GeoPoint,
    waypoint: &Waypoint<'_>,
    config: &FlightConfig,
) -> Option<Bearing> {
    let direct = from.bearing_to(&waypoint.point());
    if checker.is_legal(from, direct) {
        return Some(direct);
    }
    if !checker.lands_in_zone(from, direct) {
        return None;
    }

    for steps in 1..=MAX_CORRECTION_STEPS {
        for rotation in [Rotation::Clockwise, Rotation::Anticlockwise] {
            let bearing = direct.rotated(rotation, steps);
            if checker.is_legal(from, bearing)
                && waypoint.is_reached_from(checker.destination(from, bearing), config)
            {
                tracing::debug!(
                    "Overshoot corrected from {} to {} at {}",
                    direct,
                    bearing,
                    from
                );
                return Some(bearing);
            }
        }
    }
    None
}

/// One directional candidate path around an obstruction.
#[derive(Clone, Debug)]
pub struct SearchBranch {
    rotation: Rotation,
    head: GeoPoint,
    bearings: Vec<Bearing>,
    stuck: bool,
}

impl SearchBranch {
    /// Start a branch at `start` sweeping in `rotation`.
    pub fn new(rotation: Rotation, start: GeoPoint) -> Self {
        Self {
            rotation,
            head: start,
            bearings: Vec::new(),
            stuck: false,
        }
    }

    /// Sweep direction.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Where the branch has got to.
    pub fn head(&self) -> GeoPoint {
        self.head
    }

    /// Bearings taken so far.
    pub fn bearings(&self) -> &[Bearing] {
        &self.bearings
    }

    /// No further progress is possible.
    pub fn is_stuck(&self) -> bool {
        self.stuck
    }

    /// Reverse of the last bearing taken.
    fn backtrack(&self) -> Option<Bearing> {
        self.bearings.last().map(|b| b.opposite())
    }

    /// Cost estimate used to pick which branch grows next.
    pub fn heuristic(&self, goal: GeoPoint, config: &FlightConfig) -> f64 {
        self.bearings.len() as f64 * config.drone.move_distance + self.head.distance(&goal)
    }

    /// Take one step, or mark the branch stuck if no heading is legal.
    ///
    /// The sweep starts one step past the direct bearing and stops before
    /// the backtrack bearing (or before the direct bearing again on the
    /// first step). A branch longer than the move budget is stuck too.
    pub fn expand(&mut self, checker: &ZoneChecker, goal: GeoPoint, config: &FlightConfig) {
        if self.stuck {
            return;
        }

        let direct = self.head.bearing_to(&goal);
        let stop = self.backtrack().unwrap_or(direct);

        let mut candidate = direct.next(self.rotation);
        while candidate != stop {
            if checker.is_legal(self.head, candidate) {
                self.head = checker.destination(self.head, candidate);
                self.bearings.push(candidate);
                if self.bearings.len() > config.drone.max_moves as usize {
                    self.stuck = true;
                }
                return;
            }
            candidate = candidate.next(self.rotation);
        }

        self.stuck = true;
    }

    /// Check whether the branch has a way through to the waypoint.
    ///
    /// If the last step reached the waypoint nothing is added. Otherwise a
    /// legal bearing towards the goal is appended as the final step, unless
    /// it would just undo the previous step without arriving. A final step
    /// that takes the branch past the move budget leaves it stuck instead.
    pub fn is_finished(
        &mut self,
        checker: &ZoneChecker,
        waypoint: &Waypoint<'_>,
        config: &FlightConfig,
    ) -> bool {
        if waypoint.is_reached_from(self.head, config) {
            return true;
        }

        let Some(bearing) = most_direct_bearing(checker, self.head, waypoint, config) else {
            return false;
        };

        let arrives = waypoint.is_reached_from(checker.destination(self.head, bearing), config);
        if !arrives && Some(bearing) == self.backtrack() {
            return false;
        }

        self.bearings.push(bearing);
        if self.bearings.len() > config.drone.max_moves as usize {
            self.stuck = true;
            return false;
        }
        true
    }
}

/// A bearing sequence leading around an obstruction.
#[derive(Clone, Debug, PartialEq)]
pub struct Detour {
    /// Side the detour went round
    pub rotation: Rotation,
    /// Moves to make, in order
    pub bearings: Vec<Bearing>,
}

/// Search both sides of an obstruction between `start` and `waypoint`.
///
/// Returns `None` when both branches get stuck.
pub fn find_detour(
    checker: &ZoneChecker,
    start: GeoPoint,
    waypoint: &Waypoint<'_>,
    config: &FlightConfig,
) -> Option<Detour> {
    let goal = waypoint.point();
    let mut clockwise = SearchBranch::new(Rotation::Clockwise, start);
    let mut anticlockwise = SearchBranch::new(Rotation::Anticlockwise, start);
    let mut expansions = 0usize;

    loop {
        let branch = match (clockwise.is_stuck(), anticlockwise.is_stuck()) {
            (true, true) => {
                tracing::warn!(
                    "Detour search from {} gave up after {} expansions",
                    start,
                    expansions
                );
                return None;
            }
            (false, true) => &mut clockwise,
            (true, false) => &mut anticlockwise,
            (false, false) => {
                if clockwise.heuristic(goal, config) <= anticlockwise.heuristic(goal, config) {
                    &mut clockwise
                } else {
                    &mut anticlockwise
                }
            }
        };

        branch.expand(checker, goal, config);
        expansions += 1;

        if !branch.is_stuck() && branch.is_finished(checker, waypoint, config) {
            tracing::debug!(
                "Detour found going {:?}: {} moves after {} expansions",
                branch.rotation(),
                branch.bearings().len(),
                expansions
            );
            return Some(Detour {
                rotation: branch.rotation,
                bearings: std::mem::take(&mut branch.bearings),
            });
        }
    }
}
