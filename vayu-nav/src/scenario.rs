//! Survey inputs and one-call flights.
//!
//! A [`Scenario`] bundles everything a flight needs besides configuration:
//! where the drone launches, which sensors to read and which zones to avoid.
//!
//! ```toml
//! launch = { lng = -3.1878, lat = 55.9444 }
//! zones = [
//!     [{ lng = -3.1899, lat = 55.9450 }, { lng = -3.1890, lat = 55.9450 },
//!      { lng = -3.1890, lat = 55.9445 }, { lng = -3.1899, lat = 55.9445 }],
//! ]
//!
//! [[sensors]]
//! location = "slips.mass.baking"
//! battery = 92.1
//! reading = 41.7
//! point = { lng = -3.1862, lat = 55.9457 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::FlightConfig;
use crate::core::{GeoPoint, Polygon};
use crate::error::ConfigLoadError;
use crate::navigation::{FlightReport, Navigator};
use crate::planning::RoutePlanner;
use crate::waypoint::Sensor;

/// Launch point, sensors and no-fly-zones for one flight.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scenario {
    pub launch: GeoPoint,
    #[serde(default)]
    pub sensors: Vec<Sensor>,
    #[serde(default)]
    pub zones: Vec<Polygon>,
}

impl Scenario {
    /// Parse from a TOML string.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigLoadError> {
        Ok(toml::from_str(toml)?)
    }

    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

/// Plan a route through the scenario's sensors and fly it.
pub fn fly(scenario: &Scenario, config: &FlightConfig) -> FlightReport {
    let planner = RoutePlanner::new(config.planner.clone());
    let route = planner.plan(scenario.launch, &scenario.sensors);
    Navigator::new(scenario.launch, &scenario.zones, config.clone()).follow_route(&route)
}
