//! Fly a survey scenario and print its flight log.
//!
//! ```text
//! cargo run --example fly_scenario -- [scenario.toml] [config.toml]
//! ```
//!
//! Without arguments the bundled campus scenario is flown with
//! `configs/vayu.toml` (or the built-in defaults). Set `RUST_LOG` for more
//! detail, e.g. `RUST_LOG=vayu_nav=debug`.

use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;
use vayu_nav::{ConfigLoadError, FlightConfig, ReadingClass, Scenario, fly};

const DEFAULT_SCENARIO: &str = "demos/campus.toml";

fn main() -> Result<(), ConfigLoadError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vayu_nav=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let scenario_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_SCENARIO);

    let config = match args.get(2) {
        Some(path) => {
            info!("Loading configuration from {}", path);
            FlightConfig::load(Path::new(path))?
        }
        None => FlightConfig::load_default()?,
    };

    info!("Loading scenario from {}", scenario_path);
    let scenario = Scenario::load(Path::new(scenario_path))?;

    let report = fly(&scenario, &config);
    print!("{}", report.flight_log());

    for sensor in &scenario.sensors {
        let class = report.reading_class(sensor);
        let label = match class {
            ReadingClass::NotVisited => "not visited".to_string(),
            ReadingClass::Invalid => "low battery".to_string(),
            ReadingClass::Band(band) => format!("band {}", band),
        };
        info!("{:<24} {:<12} {}", sensor.address, label, class.rgb());
    }

    match &report.failure {
        None => info!(
            "Flight succeeded: {} moves, {:.6} flown",
            report.moves.len(),
            report.distance_flown()
        ),
        Some(e) => info!("Flight failed after {} moves: {}", report.moves.len(), e),
    }

    Ok(())
}
