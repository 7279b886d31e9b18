//! Non-blocking telemetry fan-out for the Seatsense simulation.
//!
//! # Modules
//!
//! - [`dispatcher`] -- [`Dispatcher`]: fire-and-forget HTTP fan-out of
//!   telemetry, camera, and status payloads
//! - [`sink`] -- [`Sink`]: per-destination failure-streak accounting
//! - [`frame`] -- [`FrameSource`] seam for camera payloads
//! - [`error`] -- [`DispatchError`]
//!
//! [`Dispatcher`]: dispatcher::Dispatcher
//! [`Sink`]: sink::Sink
//! [`FrameSource`]: frame::FrameSource
//! [`DispatchError`]: error::DispatchError

pub mod dispatcher;
pub mod error;
pub mod frame;
pub mod sink;

pub use dispatcher::Dispatcher;
pub use error::DispatchError;
pub use frame::{FrameSource, PlaceholderFrameSource};
pub use sink::Sink;
