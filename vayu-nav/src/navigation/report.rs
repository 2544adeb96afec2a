//! Flight results: move log, path and per-sensor outcomes.

use std::collections::BTreeMap;
use std::fmt;

use crate::core::{Bearing, GeoPoint};
use crate::error::NavError;
use crate::waypoint::Sensor;

/// One accepted move.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveRecord {
    /// 1-based position in the flight
    pub sequence: u32,
    /// Position before the move
    pub from: GeoPoint,
    /// Heading flown
    pub bearing: Bearing,
    /// Position after the move
    pub to: GeoPoint,
    /// Sensor read at the end of this move
    pub address: Option<String>,
}

impl fmt::Display for MoveRecord {
    /// Flight log line: `seq,lng,lat,bearing,lng,lat,address`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{:.6},{:.6},{},{:.6},{:.6},{}",
            self.sequence,
            self.from.lng,
            self.from.lat,
            self.bearing,
            self.to.lng,
            self.to.lat,
            self.address.as_deref().unwrap_or("null")
        )
    }
}

/// What happened to one sensor during the flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisitOutcome {
    pub visited: bool,
    /// Reading taken with enough battery to trust it
    pub valid: bool,
}

/// Pollution band of a sensor for map markers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadingClass {
    /// Never reached
    NotVisited,
    /// Reached, but the battery was too low to trust the reading
    Invalid,
    /// Band 0 (cleanest) to 7, each 32 units wide
    Band(u8),
}

const BAND_WIDTH: f64 = 32.0;
const TOP_BAND: u8 = 7;
const BAND_COLOURS: [&str; 8] = [
    "#00ff00", "#40ff00", "#80ff00", "#c0ff00", "#ffc000", "#ff8000", "#ff4000", "#ff0000",
];

impl ReadingClass {
    /// Band for a trusted reading. Readings above 255 share the top band.
    pub fn from_reading(reading: f64) -> Self {
        if reading > 255.0 {
            return ReadingClass::Band(TOP_BAND);
        }
        let band = (reading.max(0.0) / BAND_WIDTH) as u8;
        ReadingClass::Band(band.min(TOP_BAND))
    }

    /// Marker colour as an `#rrggbb` string.
    pub fn rgb(&self) -> &'static str {
        match self {
            ReadingClass::NotVisited => "#aaaaaa",
            ReadingClass::Invalid => "#000000",
            ReadingClass::Band(band) => BAND_COLOURS[(*band).min(TOP_BAND) as usize],
        }
    }

    /// Marker symbol name, if the class has one.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            ReadingClass::NotVisited => None,
            ReadingClass::Invalid => Some("cross"),
            ReadingClass::Band(band) if *band <= 3 => Some("lighthouse"),
            ReadingClass::Band(_) => Some("danger"),
        }
    }
}

/// Everything a flight produced, complete or not.
#[derive(Clone, Debug, Default)]
pub struct FlightReport {
    /// Every leg, including the return home, arrived
    pub success: bool,
    /// Positions visited, launch point first
    pub path: Vec<GeoPoint>,
    pub moves: Vec<MoveRecord>,
    /// Outcome per sensor address
    pub visits: BTreeMap<String, VisitOutcome>,
    /// Why the flight stopped early
    pub failure: Option<NavError>,
}

impl FlightReport {
    /// Flight log, one move per line.
    pub fn flight_log(&self) -> String {
        let mut log = String::new();
        for record in &self.moves {
            log.push_str(&record.to_string());
            log.push('\n');
        }
        log
    }

    /// Outcome for a sensor address. Unknown sensors count as not visited.
    pub fn visit(&self, address: &str) -> VisitOutcome {
        self.visits.get(address).copied().unwrap_or_default()
    }

    /// Marker class for a sensor after this flight.
    pub fn reading_class(&self, sensor: &Sensor) -> ReadingClass {
        let outcome = self.visit(&sensor.address);
        if !outcome.visited {
            ReadingClass::NotVisited
        } else if !outcome.valid {
            ReadingClass::Invalid
        } else {
            ReadingClass::from_reading(sensor.reading)
        }
    }

    /// Total distance flown.
    pub fn distance_flown(&self) -> f64 {
        self.path.windows(2).map(|w| w[0].distance(&w[1])).sum()
    }
}
