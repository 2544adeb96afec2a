//! Vehicle position and move budget.

use crate::config::FlightConfig;
use crate::core::{Bearing, GeoPoint};
use crate::error::{NavError, Result};

/// Where the drone is and how many moves it has spent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VehicleState {
    position: GeoPoint,
    moves_taken: u32,
}

impl VehicleState {
    /// A fresh vehicle at `position` with no moves taken.
    pub fn new(position: GeoPoint) -> Self {
        Self {
            position,
            moves_taken: 0,
        }
    }

    /// Current position.
    #[inline]
    pub fn position(&self) -> GeoPoint {
        self.position
    }

    /// Moves spent so far.
    #[inline]
    pub fn moves_taken(&self) -> u32 {
        self.moves_taken
    }

    /// Moves left before the budget is exhausted.
    #[inline]
    pub fn moves_remaining(&self, config: &FlightConfig) -> u32 {
        config.drone.max_moves.saturating_sub(self.moves_taken)
    }

    /// Fly one move along `bearing` and return the new position.
    ///
    /// Legality is the caller's concern; this only enforces the budget.
    pub fn advance(&mut self, bearing: Bearing, config: &FlightConfig) -> Result<GeoPoint> {
        if self.moves_taken >= config.drone.max_moves {
            return Err(NavError::OutOfMoves {
                budget: config.drone.max_moves,
                position: self.position,
            });
        }

        self.position = self
            .position
            .destination(bearing, config.drone.move_distance);
        self.moves_taken += 1;
        Ok(self.position)
    }
}
