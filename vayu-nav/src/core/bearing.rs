//! Quantized headings.
//!
//! Bearings use the polar convention: 0° points along +longitude and angles
//! increase towards +latitude (counter-clockwise). Every bearing is a
//! multiple of [`BEARING_STEP`] in [0, 350], so a value of this type is
//! always a legal heading for the drone.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::InvalidBearing;

/// Angular quantum of every heading, in degrees.
pub const BEARING_STEP: i32 = 10;

const FULL_TURN: i32 = 360;

/// Direction in which a scan sweeps through bearings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Decreasing polar angle
    Clockwise,
    /// Increasing polar angle
    Anticlockwise,
}

impl Rotation {
    /// Signed bearing increment for one step in this direction.
    #[inline]
    pub fn step(self) -> i32 {
        match self {
            Rotation::Clockwise => -BEARING_STEP,
            Rotation::Anticlockwise => BEARING_STEP,
        }
    }
}

/// A heading in whole degrees, multiple of 10 in [0, 350].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Bearing(u16);

impl Bearing {
    /// Checked constructor.
    pub fn new(degrees: i32) -> Result<Self, InvalidBearing> {
        if (0..FULL_TURN).contains(&degrees) && degrees % BEARING_STEP == 0 {
            Ok(Bearing(degrees as u16))
        } else {
            Err(InvalidBearing(degrees))
        }
    }

    /// Round an arbitrary angle in degrees to the nearest bearing.
    ///
    /// Halfway values round up (towards +∞) before wrapping.
    #[inline]
    pub fn nearest(degrees: f64) -> Self {
        let steps = (degrees / BEARING_STEP as f64 + 0.5).floor() as i32;
        Self::wrapping(steps * BEARING_STEP)
    }

    /// Floor-modulo a multiple of the step into range.
    #[inline]
    fn wrapping(degrees: i32) -> Self {
        debug_assert_eq!(degrees % BEARING_STEP, 0);
        Bearing(degrees.rem_euclid(FULL_TURN) as u16)
    }

    /// Heading in degrees.
    #[inline]
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Heading in radians, in (-π, π].
    ///
    /// Bearings mirrored across 0° give exactly negated sines.
    #[inline]
    pub fn to_radians(self) -> f64 {
        let signed = if self.0 > 180 {
            self.0 as i32 - FULL_TURN
        } else {
            self.0 as i32
        };
        (signed as f64).to_radians()
    }

    /// Bearing `steps` quanta away in the given direction.
    #[inline]
    pub fn rotated(self, rotation: Rotation, steps: i32) -> Self {
        Self::wrapping(self.0 as i32 + rotation.step() * steps)
    }

    /// Bearing one quantum away in the given direction.
    #[inline]
    pub fn next(self, rotation: Rotation) -> Self {
        self.rotated(rotation, 1)
    }

    /// The reverse heading (180° away).
    #[inline]
    pub fn opposite(self) -> Self {
        Self::wrapping(self.0 as i32 - 180)
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for Bearing {
    type Error = InvalidBearing;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        Bearing::new(degrees)
    }
}

impl From<Bearing> for i32 {
    fn from(bearing: Bearing) -> i32 {
        bearing.0 as i32
    }
}
