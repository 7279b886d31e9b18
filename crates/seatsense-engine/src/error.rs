//! Error types for the engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during engine startup and simulation execution.

/// Top-level error for the engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: seatsense_core::config::ConfigError,
    },

    /// Simulation clock initialization failed.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: seatsense_core::clock::ClockError,
    },

    /// Room construction failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: seatsense_world::WorldError,
    },

    /// Scanner construction failed.
    #[error("sensor error: {source}")]
    Sensor {
        /// The underlying sensor error.
        #[from]
        source: seatsense_sensors::SensorError,
    },

    /// Dispatcher construction failed.
    #[error("dispatch error: {source}")]
    Dispatch {
        /// The underlying dispatch error.
        #[from]
        source: seatsense_dispatch::DispatchError,
    },

    /// Simulation runner failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: seatsense_core::runner::RunnerError,
    },
}
