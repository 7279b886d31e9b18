//! Simulation clock, tick cycle, and orchestration for the Seatsense
//! simulation.
//!
//! This crate owns the 3-phase tick cycle that drives the simulation:
//! the actor phase, the sensor phase, and the encode phase.
//!
//! # Modules
//!
//! - [`clock`] -- [`SimClock`]: tick counter with a fixed simulated
//!   timestep.
//! - [`config`] -- Configuration loading from `seatsense-config.yaml`
//!   into strongly-typed structs.
//! - [`tick`] -- The tick cycle engine loop and [`SimulationState`].
//! - [`runner`] -- Bounded async loop with real-time pacing and the
//!   [`TickCallback`] seam.
//!
//! [`SimClock`]: clock::SimClock
//! [`SimulationState`]: tick::SimulationState
//! [`TickCallback`]: runner::TickCallback

pub mod clock;
pub mod config;
pub mod runner;
pub mod tick;
