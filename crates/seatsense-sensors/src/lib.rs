//! Rail scanner state machine and telemetry encoder for the Seatsense
//! simulation.
//!
//! # Modules
//!
//! - [`scanner`] -- [`RailScanner`]: calibration + checkpoint-sweep state
//!   machine, one per physical rail
//! - [`sweep`] -- checkpoint partitioning and boustrophedon traversal math
//! - [`encoder`] -- pure actor-state to sensor-reading mapping
//! - [`presence`] -- [`PresenceProbe`]: the scanner's injected view of
//!   ground truth
//! - [`error`] -- [`SensorError`]
//!
//! [`RailScanner`]: scanner::RailScanner
//! [`PresenceProbe`]: presence::PresenceProbe
//! [`SensorError`]: error::SensorError

pub mod encoder;
pub mod error;
pub mod presence;
pub mod scanner;
pub mod sweep;

pub use encoder::encode_seat;
pub use error::SensorError;
pub use presence::{ConstantProbe, GHOST_BAG_RADIUS, PresenceProbe};
pub use scanner::{RailScanner, ScannerParams};
pub use sweep::{Checkpoint, advance_sweep, partition_checkpoints};
