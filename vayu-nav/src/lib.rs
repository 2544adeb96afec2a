//! # VayuNav: Survey Drone Navigation Core
//!
//! Plans and simulates a single air-quality survey flight: visit every
//! sensor inside a rectangular confinement area, never cross a no-fly-zone,
//! fly only fixed-length moves on 10° headings, stay within a move budget,
//! and come back home.
//!
//! ## Quick Start
//!
//! ```rust
//! use vayu_nav::core::GeoPoint;
//! use vayu_nav::{FlightConfig, Scenario, Sensor, fly};
//!
//! let scenario = Scenario {
//!     launch: GeoPoint::new(-3.1878, 55.9444),
//!     sensors: vec![Sensor::new(
//!         GeoPoint::new(-3.1862, 55.9457),
//!         "slips.mass.baking",
//!         92.1,
//!         41.7,
//!     )],
//!     zones: Vec::new(),
//! };
//!
//! let report = fly(&scenario, &FlightConfig::default());
//! assert!(report.success);
//! print!("{}", report.flight_log());
//! ```
//!
//! ## Coordinates and Headings
//!
//! - Positions are (longitude, latitude) degrees; distances are Euclidean
//!   in degree-space.
//! - Bearings are polar: 0° is +longitude, angles grow towards +latitude.
//!   Clockwise means decreasing angle.
//!
//! ## Architecture
//!
//! - [`core`]: points, bearings, boxes, polygon predicates
//! - [`zones`]: move legality against no-fly-zones and confinement
//! - [`planning`]: sensor visit order (greedy + 2-opt)
//! - [`navigation`]: per-move flight with the dual-branch detour search
//! - [`scenario`]: survey inputs and the one-call [`fly`]
//!
//! ```text
//!   Scenario ──▶ RoutePlanner ──▶ Route ──▶ Navigator ──▶ FlightReport
//!                                              │
//!                                              ▼
//!                                         ZoneChecker
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod navigation;
pub mod planning;
pub mod scenario;
pub mod waypoint;
pub mod zones;

pub use config::{AreaConfig, DroneConfig, FlightConfig, PlannerConfig};
pub use error::{ConfigLoadError, InvalidBearing, NavError, Result};
pub use navigation::{FlightReport, MoveRecord, Navigator, ReadingClass, VisitOutcome};
pub use planning::{Route, RoutePlanner};
pub use scenario::{Scenario, fly};
pub use waypoint::{Sensor, Waypoint};
pub use zones::ZoneChecker;
