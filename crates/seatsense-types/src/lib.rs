//! Shared type definitions for the Seatsense occupancy simulation.
//!
//! This crate is the single source of truth for types used across the
//! Seatsense workspace. Wire-payload types defined here flow downstream to
//! `TypeScript` via `ts-rs` for the occupancy dashboard.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe identifier wrappers for actors, seats, sensors,
//!   and zones
//! - [`enums`] -- Enumeration types (actor states, object classes, scan
//!   phases, sweep direction)
//! - [`geometry`] -- Room-space points and movement helpers
//! - [`structs`] -- Entity and wire-payload structs (seats, readings,
//!   packets, frames, status)

pub mod enums;
pub mod geometry;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{ActorState, ObjectClass, ScanPhase, SweepDirection};
pub use geometry::{Point3, smoothstep};
pub use ids::{ActorId, SeatId, SensorId, ZoneId};
pub use structs::{CameraFrame, Seat, StatusReport, TelemetryPacket, TelemetryReading};
