//! Sensors and navigation targets.

use serde::{Deserialize, Serialize};

use crate::config::FlightConfig;
use crate::core::GeoPoint;

/// An air-quality sensor the drone has to visit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    /// Sensor position
    pub point: GeoPoint,
    /// Stable identifier (three-word address)
    #[serde(alias = "location")]
    pub address: String,
    /// Battery level in percent
    pub battery: f64,
    /// Latest pollution reading
    pub reading: f64,
}

impl Sensor {
    /// Create a new sensor
    pub fn new(point: GeoPoint, address: impl Into<String>, battery: f64, reading: f64) -> Self {
        Self {
            point,
            address: address.into(),
            battery,
            reading,
        }
    }

    /// A reading taken from this sensor can be trusted.
    #[inline]
    pub fn has_valid_reading(&self, config: &FlightConfig) -> bool {
        self.battery >= config.drone.low_battery_threshold
    }
}

/// Something the navigator can fly to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Waypoint<'a> {
    /// A sensor to read
    Sensor(&'a Sensor),
    /// The launch/home point
    Terminal { point: GeoPoint },
}

impl Waypoint<'_> {
    /// Target position.
    #[inline]
    pub fn point(&self) -> GeoPoint {
        match self {
            Waypoint::Sensor(sensor) => sensor.point,
            Waypoint::Terminal { point } => *point,
        }
    }

    /// Distance within which the waypoint counts as reached.
    #[inline]
    pub fn arrival_radius(&self, config: &FlightConfig) -> f64 {
        match self {
            Waypoint::Sensor(_) => config.drone.sensor_read_radius,
            Waypoint::Terminal { .. } => config.drone.home_radius,
        }
    }

    /// Check if `position` is close enough to count as arrived.
    #[inline]
    pub fn is_reached_from(&self, position: GeoPoint, config: &FlightConfig) -> bool {
        position.distance(&self.point()) < self.arrival_radius(config)
    }

    /// Address of the sensor, if this is one.
    pub fn address(&self) -> Option<&str> {
        match self {
            Waypoint::Sensor(sensor) => Some(sensor.address.as_str()),
            Waypoint::Terminal { .. } => None,
        }
    }
}
