//! Seat catalog, room plan, and abandoned-item ledger for the Seatsense
//! simulation.
//!
//! # Modules
//!
//! - [`registry`] -- [`SeatRegistry`]: the static seat catalog grouped
//!   into scan zones
//! - [`room`] -- [`RoomPlan`] geometry and the standard 28-seat layout
//! - [`abandoned`] -- append-only ledger of bags left behind by departed
//!   actors (ghost occupancy sources)
//! - [`error`] -- [`WorldError`]
//!
//! [`SeatRegistry`]: registry::SeatRegistry
//! [`RoomPlan`]: room::RoomPlan
//! [`WorldError`]: error::WorldError

pub mod abandoned;
pub mod error;
pub mod registry;
pub mod room;

pub use abandoned::{AbandonedBag, AbandonedItems};
pub use error::WorldError;
pub use registry::SeatRegistry;
pub use room::{RoomPlan, create_standard_room};
