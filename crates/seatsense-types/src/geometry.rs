//! Minimal 3D geometry for actor movement and sensor positioning.
//!
//! Actors move on the XZ floor plane; the Y axis only matters for the
//! seated-pose interpolation and for where belongings rest. Distances used
//! by movement and the sensor presence check are therefore measured on the
//! XZ plane.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A point in room space. X spans the room width, Z the room length, Y is
/// height above the floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Point3 {
    /// Position along the room width.
    pub x: f32,
    /// Height above the floor.
    pub y: f32,
    /// Position along the room length.
    pub z: f32,
}

impl Point3 {
    /// The origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a point from its components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Distance to `other` measured on the XZ floor plane.
    pub fn xz_distance(&self, other: &Self) -> f32 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        dx.hypot(dz)
    }

    /// Move up to `max_step` toward `target` on the XZ plane, keeping the
    /// current Y. Never overshoots: if the target is within `max_step`,
    /// the result lands exactly on it (at the current Y).
    pub fn stepped_toward_xz(&self, target: &Self, max_step: f32) -> Self {
        let dist = self.xz_distance(target);
        if dist <= max_step || dist <= f32::EPSILON {
            return Self::new(target.x, self.y, target.z);
        }
        let scale = max_step / dist;
        Self::new(
            self.x + (target.x - self.x) * scale,
            self.y,
            self.z + (target.z - self.z) * scale,
        )
    }

    /// Linear interpolation between `self` (t = 0) and `other` (t = 1).
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }
}

/// Hermite smoothstep of `t` clamped to `[0, 1]`.
///
/// Used for the sit/stand pose interpolation so actors ease in and out of
/// the seated position instead of snapping.
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
