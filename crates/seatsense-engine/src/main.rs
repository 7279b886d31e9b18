//! Simulation engine binary for Seatsense.
//!
//! This is the main entry point that wires together the room, the actor
//! pool, the rail scanners, and the telemetry dispatcher, then runs the
//! tick loop until a configured bound is hit.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `seatsense-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Build the room (seat catalog + plan)
//! 4. Construct one scanner per configured rail
//! 5. Construct the dispatcher over the configured sinks
//! 6. Assemble the simulation state
//! 7. Run the simulation loop
//! 8. Log the result

mod dispatch_callback;
mod error;

use std::path::Path;
use std::time::Duration;

use seatsense_core::clock::SimClock;
use seatsense_core::config::SimulationConfig;
use seatsense_core::runner;
use seatsense_core::tick::SimulationState;
use seatsense_dispatch::Dispatcher;
use seatsense_sensors::{RailScanner, ScannerParams};
use seatsense_types::{SensorId, ZoneId};
use seatsense_world::create_standard_room;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::dispatch_callback::DispatchCallback;
use crate::error::EngineError;

/// Application entry point for the simulation engine.
///
/// # Errors
///
/// Returns an error if any initialization step or the simulation itself
/// fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration (silently; logging is not up yet).
    let config_path = Path::new("seatsense-config.yaml");
    let (config, config_from_file) = if config_path.exists() {
        (SimulationConfig::from_file(config_path)?, true)
    } else {
        (SimulationConfig::default(), false)
    };

    // 2. Initialize structured logging. RUST_LOG wins over the config.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .with_target(true)
        .init();

    info!("seatsense-engine starting");
    if !config_from_file {
        info!("Config file not found, using defaults");
    }
    info!(
        world_name = config.world.name,
        seed = config.world.seed,
        tick_interval_ms = config.world.tick_interval_ms,
        "Configuration loaded"
    );

    // 3. Build the room.
    let (plan, registry) =
        create_standard_room(config.room.width, config.room.length).map_err(EngineError::from)?;
    info!(
        seats = registry.total_seats(),
        zones = registry.zone_ids().len(),
        "Room built"
    );

    // 4. Construct scanners.
    let (calib_start, calib_end) = plan.calibration_span();
    let params = ScannerParams {
        move_speed: config.sensors.move_speed,
        scan_duration: config.sensors.scan_duration_s,
        calibration_speed: config.sensors.calibration_speed,
        calib_start,
        calib_end,
    };
    let mut scanners = Vec::with_capacity(config.sensors.rails.len());
    for rail in &config.sensors.rails {
        let zones: Vec<ZoneId> = rail.zones.iter().copied().map(ZoneId::new).collect();
        let scanner = RailScanner::new(SensorId::new(rail.id.clone()), zones, params)
            .map_err(EngineError::from)?;
        info!(sensor = rail.id, zones = rail.zones.len(), enabled = scanner.is_enabled(), "Scanner created");
        scanners.push(scanner);
    }

    // 5. Construct the dispatcher.
    let dispatcher = Dispatcher::new(
        &config.dispatch.sinks,
        Duration::from_millis(config.dispatch.request_timeout_ms),
    )
    .map_err(EngineError::from)?;
    info!(sinks = config.dispatch.sinks.len(), "Dispatcher ready");

    // 6. Assemble simulation state.
    let clock = SimClock::new(config.world.tick_interval_ms).map_err(EngineError::from)?;
    let mut state = SimulationState::new(
        clock,
        plan,
        registry,
        config.population.clone(),
        scanners,
        config.world.seed,
    );

    let mut callback = DispatchCallback::new(
        dispatcher,
        Duration::from_millis(config.dispatch.frame_interval_ms),
    );

    info!("Simulation state assembled, entering tick loop");

    // 7. Run the simulation.
    let result = runner::run_simulation(&mut state, &config.simulation, &mut callback)
        .await
        .map_err(EngineError::from)?;

    // 8. Log results.
    runner::log_simulation_end(&result);

    info!(
        end_reason = ?result.end_reason,
        total_ticks = result.total_ticks,
        "seatsense-engine shutdown complete"
    );

    Ok(())
}
