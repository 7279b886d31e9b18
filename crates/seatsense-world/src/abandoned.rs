//! Ledger of belongings abandoned in the room.
//!
//! When an actor leaves without their bag, the bag stays at the seat
//! indefinitely: nothing ever removes entries from this ledger. The sensor
//! ground-truth presence check treats a bag near a seat as an occupancy
//! signal, so an abandoned bag keeps the zone reading "occupied" long after
//! its owner is gone (ghost occupancy).

use seatsense_types::{Point3, SeatId};
use serde::Serialize;

/// A bag left behind at a seat.
#[derive(Debug, Clone, Serialize)]
pub struct AbandonedBag {
    /// Where the bag rests.
    pub position: Point3,
    /// The seat the owner had reserved.
    pub seat: SeatId,
    /// The tick at which the owner was retired.
    pub left_at_tick: u64,
}

/// Append-only record of abandoned bags.
#[derive(Debug, Clone, Default)]
pub struct AbandonedItems {
    bags: Vec<AbandonedBag>,
}

impl AbandonedItems {
    /// Create an empty ledger.
    pub const fn new() -> Self {
        Self { bags: Vec::new() }
    }

    /// Record a bag left behind.
    pub fn leave_bag(&mut self, bag: AbandonedBag) {
        self.bags.push(bag);
    }

    /// Whether any abandoned bag lies within `radius` of `point` on the
    /// XZ plane.
    pub fn any_near(&self, point: &Point3, radius: f32) -> bool {
        self.bags
            .iter()
            .any(|bag| bag.position.xz_distance(point) < radius)
    }

    /// Number of abandoned bags.
    pub fn count(&self) -> usize {
        self.bags.len()
    }

    /// Iterate over all abandoned bags.
    pub fn iter(&self) -> impl Iterator<Item = &AbandonedBag> {
        self.bags.iter()
    }
}
