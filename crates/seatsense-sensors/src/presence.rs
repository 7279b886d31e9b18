//! Ground-truth presence queries.
//!
//! The scanner classifies the zone it is currently dwelling on by asking
//! the world, through this trait, whether the zone is really occupied. The
//! query is injected at tick time so the scanner never reaches into actor
//! or world state itself; the simulation core assembles the probe from the
//! pool, the seat registry, and the abandoned-item ledger.
//!
//! Note that this classification is *not* what gets emitted: the telemetry
//! packet is produced by the encoder from per-seat actor states, and the
//! encoder does not consult abandoned bags. A seat with a ghost bag is
//! flagged occupied here while the packet reports it `empty`.

use seatsense_types::ZoneId;

/// Radius around a seat within which an abandoned bag counts as an
/// occupancy signal.
pub const GHOST_BAG_RADIUS: f32 = 1.0;

/// Read-only view of ground-truth occupancy, one zone at a time.
pub trait PresenceProbe {
    /// Whether the zone currently registers any occupancy signal: a live
    /// actor in a presence-signal state on one of its seats, or an
    /// abandoned bag within [`GHOST_BAG_RADIUS`] of one.
    fn zone_occupied(&self, zone: ZoneId) -> bool;
}

/// A probe with a fixed answer, for tests and disabled setups.
#[derive(Debug, Clone, Copy)]
pub struct ConstantProbe(pub bool);

impl PresenceProbe for ConstantProbe {
    fn zone_occupied(&self, _zone: ZoneId) -> bool {
        self.0
    }
}
