//! Room plan and the standard seat layout.
//!
//! The room is a rectangle: X spans the width, Z the length. The entrance
//! sits at the +Z end on the center aisle (x = 0), and the water cooler in
//! the +X/+Z corner. Actors navigate along the center aisle, so the plan
//! exposes the handful of well-known points the path builders need.
//!
//! The standard layout packs 28 seats into 7 zones of 4: zones 1-4 form a
//! row of cubicle clusters near the back wall (covered by the back sensor
//! rail), zones 5-7 a row of reading tables past the middle (covered by
//! the front rail).

use seatsense_types::{Point3, Seat, SeatId, ZoneId};
use tracing::info;

use crate::error::WorldError;
use crate::registry::SeatRegistry;

/// Number of back-row zones (covered by the back rail).
const BACK_ZONES: u32 = 4;

/// Number of front-row zones (covered by the front rail).
const FRONT_ZONES: u32 = 3;

/// Margin kept clear along each side wall, in distance units.
const SIDE_MARGIN: f32 = 4.0;

/// Chair seat height above the floor.
const CHAIR_HEIGHT: f32 = 0.45;

/// Lateral/longitudinal offset of each seat from its zone center.
const SEAT_OFFSET: f32 = 0.8;

/// Fixed geometry of the room, shared read-only by actors and sensors.
#[derive(Debug, Clone, Copy)]
pub struct RoomPlan {
    /// Room extent along X.
    pub width: f32,
    /// Room extent along Z.
    pub length: f32,
}

impl RoomPlan {
    /// Half the room length (distance from center to the entrance wall).
    pub fn half_length(&self) -> f32 {
        self.length / 2.0
    }

    /// Width usable for seating and rail travel, excluding side margins.
    pub fn usable_width(&self) -> f32 {
        self.width - SIDE_MARGIN
    }

    /// Where actors appear when they enter, just inside the entrance.
    pub fn entry_point(&self) -> Point3 {
        Point3::new(0.0, 0.0, self.half_length() - 0.5)
    }

    /// Where actors despawn, just past the entrance.
    pub fn exit_point(&self) -> Point3 {
        Point3::new(0.0, 0.0, self.half_length() + 2.0)
    }

    /// The water cooler in the corner near the entrance.
    pub fn cooler_point(&self) -> Point3 {
        Point3::new(self.width / 2.0 - 1.5, 0.0, self.half_length() - 1.5)
    }

    /// The calibration travel span for a sensor rail: one unit past each
    /// end of the usable width.
    pub fn calibration_span(&self) -> (f32, f32) {
        let half_usable = self.usable_width() / 2.0;
        (-half_usable - 1.0, half_usable + 1.0)
    }
}

/// Build the standard 28-seat, 7-zone room.
///
/// Seats are numbered `S1..S28` in zone order, so zone 1 holds `S1..S4`
/// and zone 7 holds `S25..S28`.
///
/// # Errors
///
/// Returns [`WorldError::InvalidRoom`] if the dimensions leave no usable
/// seating area.
pub fn create_standard_room(width: f32, length: f32) -> Result<(RoomPlan, SeatRegistry), WorldError> {
    if width <= SIDE_MARGIN {
        return Err(WorldError::InvalidRoom {
            reason: format!("width {width} leaves no usable seating area"),
        });
    }
    if length < 8.0 {
        return Err(WorldError::InvalidRoom {
            reason: format!("length {length} is too short for two seating rows"),
        });
    }

    let plan = RoomPlan { width, length };
    let mut registry = SeatRegistry::new();

    let back_row_z = -plan.half_length() + 3.0;
    let front_row_z = plan.half_length() - 6.0;

    let mut seat_counter: u32 = 0;

    // Back row: zones 1..=4.
    for col in 0..BACK_ZONES {
        let zone = ZoneId::new(col.saturating_add(1));
        let cx = zone_column_x(plan.usable_width(), BACK_ZONES, col);
        add_zone_seats(&mut registry, zone, cx, back_row_z, &mut seat_counter)?;
    }

    // Front row: zones 5..=7.
    for col in 0..FRONT_ZONES {
        let zone = ZoneId::new(col.saturating_add(BACK_ZONES).saturating_add(1));
        let cx = zone_column_x(plan.usable_width(), FRONT_ZONES, col);
        add_zone_seats(&mut registry, zone, cx, front_row_z, &mut seat_counter)?;
    }

    info!(
        seats = registry.total_seats(),
        zones = registry.zone_ids().len(),
        width,
        length,
        "Standard room built"
    );

    Ok((plan, registry))
}

/// Center X of a zone column: the usable width divided evenly into
/// `columns` slots, column centers at half-slot offsets.
fn zone_column_x(usable_width: f32, columns: u32, col: u32) -> f32 {
    let spacing = usable_width / columns.max(1) as f32;
    -usable_width / 2.0 + spacing / 2.0 + col as f32 * spacing
}

/// Add the four seats of one zone, clustered around its column center.
fn add_zone_seats(
    registry: &mut SeatRegistry,
    zone: ZoneId,
    cx: f32,
    cz: f32,
    seat_counter: &mut u32,
) -> Result<(), WorldError> {
    let offsets = [
        (-SEAT_OFFSET, -SEAT_OFFSET),
        (SEAT_OFFSET, -SEAT_OFFSET),
        (-SEAT_OFFSET, SEAT_OFFSET),
        (SEAT_OFFSET, SEAT_OFFSET),
    ];

    for (dx, dz) in offsets {
        *seat_counter = seat_counter.saturating_add(1);
        registry.add_seat(Seat {
            id: SeatId::new(format!("S{seat_counter}")),
            zone,
            position: Point3::new(cx + dx, CHAIR_HEIGHT, cz + dz),
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn standard_room_has_28_seats_in_7_zones() {
        let (_, registry) = create_standard_room(20.0, 16.0).unwrap();
        assert_eq!(registry.total_seats(), 28);
        let zones = registry.zone_ids();
        assert_eq!(zones.len(), 7);
        for zone in zones {
            assert_eq!(registry.seats_in_zone(zone).len(), 4);
        }
    }

    #[test]
    fn seat_numbering_follows_zone_order() {
        let (_, registry) = create_standard_room(20.0, 16.0).unwrap();
        let zone1 = registry.seats_in_zone(ZoneId::new(1));
        let ids: Vec<&str> = zone1.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["S1", "S2", "S3", "S4"]);

        let zone7 = registry.seats_in_zone(ZoneId::new(7));
        let ids: Vec<&str> = zone7.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["S25", "S26", "S27", "S28"]);
    }

    #[test]
    fn zone_columns_ascend_left_to_right() {
        let (_, registry) = create_standard_room(20.0, 16.0).unwrap();
        let mut previous = f32::MIN;
        for zone in 1..=4 {
            let seats = registry.seats_in_zone(ZoneId::new(zone));
            let cx: f32 = seats.iter().map(|s| s.position.x).sum::<f32>() / seats.len() as f32;
            assert!(cx > previous, "zone {zone} column out of order");
            previous = cx;
        }
    }

    #[test]
    fn calibration_span_extends_past_usable_width() {
        let (plan, _) = create_standard_room(20.0, 16.0).unwrap();
        let (start, end) = plan.calibration_span();
        assert!((start - -9.0).abs() < 1e-6);
        assert!((end - 9.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_dimensions_rejected() {
        assert!(create_standard_room(3.0, 16.0).is_err());
        assert!(create_standard_room(20.0, 4.0).is_err());
    }

    #[test]
    fn well_known_points_are_inside_the_room() {
        let (plan, _) = create_standard_room(20.0, 16.0).unwrap();
        let entry = plan.entry_point();
        assert!(entry.z < plan.half_length());
        let cooler = plan.cooler_point();
        assert!(cooler.x < plan.width / 2.0);
        assert!(cooler.z < plan.half_length());
        // The exit is deliberately outside: actors despawn past the door.
        assert!(plan.exit_point().z > plan.half_length());
    }
}
