//! Configuration loading and typed config structures.
//!
//! The canonical configuration lives in `seatsense-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure and provides a loader that reads the file. All
//! fields default to the reference deployment values, so an absent or
//! partial file still produces a runnable simulation.

use std::path::Path;

use seatsense_agents::BehaviorConfig;
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SimulationConfig {
    /// World-level settings (name, seed, tick interval).
    #[serde(default)]
    pub world: WorldConfig,

    /// Room dimensions.
    #[serde(default)]
    pub room: RoomConfig,

    /// Actor population and behavior parameters.
    #[serde(default)]
    pub population: BehaviorConfig,

    /// Sensor rail parameters.
    #[serde(default)]
    pub sensors: SensorsConfig,

    /// Telemetry dispatch parameters.
    #[serde(default)]
    pub dispatch: DispatchConfig,

    /// Simulation boundary parameters.
    #[serde(default)]
    pub simulation: SimulationBoundsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The `SEATSENSE_SINKS` environment variable (comma-separated URLs)
    /// overrides `dispatch.sinks`, so deployments can point at different
    /// dashboards without editing the file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.dispatch.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.dispatch.apply_env_overrides();
        Ok(config)
    }
}

/// World-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Human-readable simulation name.
    #[serde(default = "default_world_name")]
    pub name: String,

    /// Random seed for reproducibility.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Real-time milliseconds per tick; also the simulated timestep.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            name: default_world_name(),
            seed: default_seed(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

/// Room dimensions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoomConfig {
    /// Room extent along X.
    #[serde(default = "default_room_width")]
    pub width: f32,

    /// Room extent along Z.
    #[serde(default = "default_room_length")]
    pub length: f32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            width: default_room_width(),
            length: default_room_length(),
        }
    }
}

/// One sensor rail and the zones it covers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RailConfig {
    /// Rail identifier, e.g. `"rail-back"`.
    pub id: String,

    /// Zone numbers assigned to this rail.
    pub zones: Vec<u32>,
}

/// Sensor rail parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SensorsConfig {
    /// Carriage travel speed between checkpoints, units per second.
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,

    /// Stationary dwell at each checkpoint, seconds.
    #[serde(default = "default_scan_duration_s")]
    pub scan_duration_s: f32,

    /// Carriage speed during the calibration sweep, units per second.
    #[serde(default = "default_calibration_speed")]
    pub calibration_speed: f32,

    /// The rails and their zone assignments.
    #[serde(default = "default_rails")]
    pub rails: Vec<RailConfig>,
}

impl Default for SensorsConfig {
    fn default() -> Self {
        Self {
            move_speed: default_move_speed(),
            scan_duration_s: default_scan_duration_s(),
            calibration_speed: default_calibration_speed(),
            rails: default_rails(),
        }
    }
}

/// Telemetry dispatch parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DispatchConfig {
    /// Base URLs of the telemetry sinks.
    #[serde(default = "default_sinks")]
    pub sinks: Vec<String>,

    /// Wall-clock interval between camera-frame/status pushes, ms.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,

    /// Per-request timeout, ms.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl DispatchConfig {
    /// Override the sink list from `SEATSENSE_SINKS` (comma-separated)
    /// when set. Lets deployments redirect telemetry without editing the
    /// config file.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SEATSENSE_SINKS") {
            let sinks: Vec<String> = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToOwned::to_owned)
                .collect();
            if !sinks.is_empty() {
                self.sinks = sinks;
            }
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            sinks: default_sinks(),
            frame_interval_ms: default_frame_interval_ms(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Simulation boundary configuration.
///
/// A value of 0 for either bound means unlimited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulationBoundsConfig {
    /// Maximum number of ticks before the simulation ends (0 = unlimited).
    #[serde(default)]
    pub max_ticks: u64,

    /// Maximum wall-clock seconds before the simulation ends (0 = unlimited).
    #[serde(default)]
    pub max_real_time_seconds: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_world_name() -> String {
    "Reading Room Twin".to_owned()
}

const fn default_seed() -> u64 {
    42
}

const fn default_tick_interval_ms() -> u64 {
    50
}

const fn default_room_width() -> f32 {
    20.0
}

const fn default_room_length() -> f32 {
    16.0
}

const fn default_move_speed() -> f32 {
    2.0
}

const fn default_scan_duration_s() -> f32 {
    3.0
}

const fn default_calibration_speed() -> f32 {
    0.8
}

fn default_rails() -> Vec<RailConfig> {
    vec![
        RailConfig {
            id: "rail-back".to_owned(),
            zones: vec![1, 2, 3, 4],
        },
        RailConfig {
            id: "rail-front".to_owned(),
            zones: vec![5, 6, 7],
        },
    ]
}

fn default_sinks() -> Vec<String> {
    vec![
        "http://localhost:5001".to_owned(),
        "http://localhost:5000".to_owned(),
    ]
}

const fn default_frame_interval_ms() -> u64 {
    1000
}

const fn default_request_timeout_ms() -> u64 {
    2000
}

fn default_log_level() -> String {
    "info".to_owned()
}
