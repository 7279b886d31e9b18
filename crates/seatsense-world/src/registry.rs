//! Static seat catalog grouped into scan zones.
//!
//! The registry is pure data: it is built once at room construction and
//! never mutated afterwards. Zones are implicit groupings of seats sharing
//! a [`ZoneId`]; one zone is observed per sensor dwell.

use std::collections::BTreeMap;

use seatsense_types::{Seat, SeatId, ZoneId};

use crate::error::WorldError;

/// Catalog of all seats in the room, indexed by id and by zone.
#[derive(Debug, Clone, Default)]
pub struct SeatRegistry {
    /// All seats keyed by identifier.
    seats: BTreeMap<SeatId, Seat>,
    /// Seat ids grouped by zone, in insertion order.
    zones: BTreeMap<ZoneId, Vec<SeatId>>,
}

impl SeatRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            seats: BTreeMap::new(),
            zones: BTreeMap::new(),
        }
    }

    /// Register a seat.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateSeat`] if a seat with the same id is
    /// already registered.
    pub fn add_seat(&mut self, seat: Seat) -> Result<(), WorldError> {
        if self.seats.contains_key(&seat.id) {
            return Err(WorldError::DuplicateSeat {
                seat_id: seat.id,
            });
        }
        self.zones
            .entry(seat.zone)
            .or_default()
            .push(seat.id.clone());
        self.seats.insert(seat.id.clone(), seat);
        Ok(())
    }

    /// Look up a seat by id.
    pub fn seat(&self, id: &SeatId) -> Option<&Seat> {
        self.seats.get(id)
    }

    /// Whether a seat with this id exists.
    pub fn contains(&self, id: &SeatId) -> bool {
        self.seats.contains_key(id)
    }

    /// All seats in a zone, in registration order. Empty for unknown zones.
    pub fn seats_in_zone(&self, zone: ZoneId) -> Vec<&Seat> {
        self.zones
            .get(&zone)
            .map(|ids| ids.iter().filter_map(|id| self.seats.get(id)).collect())
            .unwrap_or_default()
    }

    /// All registered zone ids in ascending order.
    pub fn zone_ids(&self) -> Vec<ZoneId> {
        self.zones.keys().copied().collect()
    }

    /// Iterate over every seat in the catalog.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.seats.values()
    }

    /// All seat ids in the catalog.
    pub fn seat_ids(&self) -> Vec<SeatId> {
        self.seats.keys().cloned().collect()
    }

    /// Total number of seats.
    pub fn total_seats(&self) -> usize {
        self.seats.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use seatsense_types::Point3;

    use super::*;

    fn make_seat(id: &str, zone: u32) -> Seat {
        Seat {
            id: SeatId::from(id),
            zone: ZoneId::new(zone),
            position: Point3::ZERO,
        }
    }

    #[test]
    fn add_and_look_up() {
        let mut registry = SeatRegistry::new();
        registry.add_seat(make_seat("S1", 1)).unwrap();
        assert!(registry.contains(&SeatId::from("S1")));
        assert_eq!(
            registry.seat(&SeatId::from("S1")).unwrap().zone,
            ZoneId::new(1)
        );
        assert!(registry.seat(&SeatId::from("S99")).is_none());
    }

    #[test]
    fn duplicate_seat_rejected() {
        let mut registry = SeatRegistry::new();
        registry.add_seat(make_seat("S1", 1)).unwrap();
        let result = registry.add_seat(make_seat("S1", 2));
        assert!(matches!(result, Err(WorldError::DuplicateSeat { .. })));
        // The original entry is untouched.
        assert_eq!(
            registry.seat(&SeatId::from("S1")).unwrap().zone,
            ZoneId::new(1)
        );
    }

    #[test]
    fn zone_grouping() {
        let mut registry = SeatRegistry::new();
        registry.add_seat(make_seat("S1", 1)).unwrap();
        registry.add_seat(make_seat("S2", 1)).unwrap();
        registry.add_seat(make_seat("S3", 2)).unwrap();

        assert_eq!(registry.seats_in_zone(ZoneId::new(1)).len(), 2);
        assert_eq!(registry.seats_in_zone(ZoneId::new(2)).len(), 1);
        assert!(registry.seats_in_zone(ZoneId::new(9)).is_empty());
        assert_eq!(registry.zone_ids(), vec![ZoneId::new(1), ZoneId::new(2)]);
    }
}
