//! Error types for world operations.

use seatsense_types::SeatId;

/// Errors that can occur when building or querying the world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A seat with this identifier is already registered.
    #[error("duplicate seat id: {seat_id}")]
    DuplicateSeat {
        /// The offending seat identifier.
        seat_id: SeatId,
    },

    /// The room dimensions cannot hold the standard seat layout.
    #[error("invalid room dimensions: {reason}")]
    InvalidRoom {
        /// Explanation of what is wrong with the dimensions.
        reason: String,
    },
}
