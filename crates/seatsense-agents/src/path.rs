//! Waypoint route builders for actor movement.
//!
//! All routes run along the center aisle (x = 0): actors first travel in Z
//! along the aisle, then cut across in X to their destination. Every
//! waypoint sits on the floor plane (y = 0); the walker only compares XZ
//! distance anyway.

use rand::Rng;
use seatsense_types::Point3;
use seatsense_world::RoomPlan;

/// Route from the entrance to a seat: down the aisle to the seat's row,
/// then across to the chair.
pub fn route_to_seat(plan: &RoomPlan, chair: &Point3) -> Vec<Point3> {
    vec![
        Point3::new(0.0, 0.0, plan.half_length() - 1.5),
        Point3::new(0.0, 0.0, chair.z),
        Point3::new(chair.x, 0.0, chair.z),
    ]
}

/// Route from a seat to the water cooler. The final waypoint is jittered
/// laterally so queued actors do not stack on the exact same spot.
pub fn route_to_cooler(plan: &RoomPlan, chair: &Point3, rng: &mut impl Rng) -> Vec<Point3> {
    let cooler = plan.cooler_point();
    vec![
        Point3::new(0.0, 0.0, chair.z),
        Point3::new(0.0, 0.0, cooler.z),
        Point3::new(
            cooler.x + rng.random_range(-0.3..=0.3),
            0.0,
            cooler.z + 0.4,
        ),
    ]
}

/// Route from the water cooler back to a seat.
pub fn route_back(plan: &RoomPlan, chair: &Point3) -> Vec<Point3> {
    let cooler = plan.cooler_point();
    vec![
        Point3::new(0.0, 0.0, cooler.z),
        Point3::new(0.0, 0.0, chair.z),
        Point3::new(chair.x, 0.0, chair.z),
    ]
}

/// Route from a seat out of the room. The last waypoint lies past the
/// entrance so the actor visibly walks out before despawning.
pub fn route_out(plan: &RoomPlan, chair: &Point3) -> Vec<Point3> {
    vec![
        Point3::new(0.0, 0.0, chair.z),
        Point3::new(0.0, 0.0, plan.half_length() - 1.0),
        Point3::new(0.0, 0.0, plan.half_length() + 2.0),
    ]
}
