//! Configuration loading for VayuNav
//!
//! Every constant the navigation core depends on lives in one immutable
//! [`FlightConfig`] that is passed into each component. Values can be
//! loaded from TOML; missing fields fall back to the survey defaults.
//!
//! ## Example TOML
//!
//! ```toml
//! [drone]
//! move_distance = 0.0003
//! max_moves = 150
//! sensor_read_radius = 0.0002
//! home_radius = 0.0003
//!
//! [area]
//! zone_padding = 0.00005
//!
//! [area.confinement]
//! min = { lng = -3.192473, lat = 55.942617 }
//! max = { lng = -3.184319, lat = 55.946233 }
//!
//! [planner]
//! two_opt = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::{Bounds, GeoPoint};
use crate::error::ConfigLoadError;

/// Main configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FlightConfig {
    #[serde(default)]
    pub drone: DroneConfig,
    #[serde(default)]
    pub area: AreaConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
}

/// Drone movement and sensing parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DroneConfig {
    /// Length of every move in degrees (default: 0.0003)
    #[serde(default = "default_move_distance")]
    pub move_distance: f64,

    /// Maximum moves for the whole flight (default: 150)
    #[serde(default = "default_max_moves")]
    pub max_moves: u32,

    /// Distance within which a sensor can be read (default: 0.0002)
    #[serde(default = "default_sensor_read_radius")]
    pub sensor_read_radius: f64,

    /// Distance within which the drone counts as home (default: 0.0003)
    #[serde(default = "default_home_radius")]
    pub home_radius: f64,

    /// Battery level below which a reading is untrustworthy (default: 10.0)
    #[serde(default = "default_low_battery_threshold")]
    pub low_battery_threshold: f64,
}

/// Flight area restrictions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AreaConfig {
    /// Rectangle the drone must stay strictly inside
    #[serde(default = "default_confinement")]
    pub confinement: Bounds,

    /// Margin added around each no-fly-zone's bounding box (default: 0.00005)
    #[serde(default = "default_zone_padding")]
    pub zone_padding: f64,
}

/// Route planner settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Improve the greedy tour with 2-opt (default: true)
    #[serde(default = "default_two_opt")]
    pub two_opt: bool,
}

impl Default for DroneConfig {
    fn default() -> Self {
        Self {
            move_distance: default_move_distance(),
            max_moves: default_max_moves(),
            sensor_read_radius: default_sensor_read_radius(),
            home_radius: default_home_radius(),
            low_battery_threshold: default_low_battery_threshold(),
        }
    }
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            confinement: default_confinement(),
            zone_padding: default_zone_padding(),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            two_opt: default_two_opt(),
        }
    }
}

// Default value functions
fn default_move_distance() -> f64 {
    0.0003
}
fn default_max_moves() -> u32 {
    150
}
fn default_sensor_read_radius() -> f64 {
    0.0002
}
fn default_home_radius() -> f64 {
    0.0003
}
fn default_low_battery_threshold() -> f64 {
    10.0
}
fn default_confinement() -> Bounds {
    Bounds::new(
        GeoPoint::new(-3.192473, 55.942617),
        GeoPoint::new(-3.184319, 55.946233),
    )
}
fn default_zone_padding() -> f64 {
    0.00005
}
fn default_two_opt() -> bool {
    true
}

impl FlightConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load from default config path (configs/vayu.toml), or use defaults
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/vayu.toml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate from a TOML string
    pub fn from_toml(toml: &str) -> Result<Self, ConfigLoadError> {
        let config: FlightConfig = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the navigator cannot work with.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        let drone = &self.drone;
        if !(drone.move_distance > 0.0) {
            return Err(ConfigLoadError::Invalid(format!(
                "move_distance must be positive, got {}",
                drone.move_distance
            )));
        }
        if !(drone.sensor_read_radius > 0.0 && drone.home_radius > 0.0) {
            return Err(ConfigLoadError::Invalid(
                "arrival radii must be positive".to_string(),
            ));
        }
        if drone.max_moves == 0 {
            return Err(ConfigLoadError::Invalid(
                "max_moves must be at least 1".to_string(),
            ));
        }
        if self.area.confinement.is_empty() {
            return Err(ConfigLoadError::Invalid(
                "confinement area has no interior".to_string(),
            ));
        }
        if self.area.zone_padding < 0.0 {
            return Err(ConfigLoadError::Invalid(
                "zone_padding must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = FlightConfig::default();
        assert_eq!(config.drone.move_distance, 0.0003);
        assert_eq!(config.drone.max_moves, 150);
        assert_eq!(config.drone.sensor_read_radius, 0.0002);
        assert_eq!(config.drone.home_radius, 0.0003);
        assert!(config.planner.two_opt);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = FlightConfig::from_toml(
            r#"
            [drone]
            max_moves = 80

            [area.confinement]
            min = { lng = 0.0, lat = 0.0 }
            max = { lng = 1.0, lat = 1.0 }
            "#,
        )
        .unwrap();
        assert_eq!(config.drone.max_moves, 80);
        assert_eq!(config.drone.move_distance, 0.0003);
        assert_eq!(config.area.confinement.max, GeoPoint::new(1.0, 1.0));
        assert_eq!(config.area.zone_padding, 0.00005);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = FlightConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed = FlightConfig::from_toml(&text).unwrap();
        assert_eq!(parsed.area.confinement, config.area.confinement);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = FlightConfig::from_toml("[drone]\nmove_distance = 0.0").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Invalid(_)));

        let err = FlightConfig::from_toml("[drone]\nmax_moves = 0").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Invalid(_)));

        let err = FlightConfig::from_toml("[drone]\nmax_moves = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[planner]\ntwo_opt = false").unwrap();
        let config = FlightConfig::load(file.path()).unwrap();
        assert!(!config.planner.two_opt);

        let missing = FlightConfig::load(Path::new("/nonexistent/vayu.toml"));
        assert!(matches!(missing, Err(ConfigLoadError::Io(_))));
    }

    #[test]
    fn test_bundled_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("configs/vayu.toml");
        let config = FlightConfig::load(&path).unwrap();
        let defaults = FlightConfig::default();
        assert_eq!(config.drone.max_moves, defaults.drone.max_moves);
        assert_eq!(config.drone.move_distance, defaults.drone.move_distance);
        assert_eq!(config.area.confinement, defaults.area.confinement);
    }
}
