//! Type-safe identifier wrappers for simulation entities.
//!
//! Actors get UUID v7 (time-ordered) identifiers. Seats, sensors, and
//! zones carry the human-readable identifiers that appear on the wire
//! (`"S3"`, `"rail-back"`, `"Z2"`), wrapped in newtypes so the compiler
//! prevents accidental mixing.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a simulated actor.
    ActorId
}

/// Identifier of a seat in the room catalog (e.g. `"S3"`).
///
/// Seat identifiers appear verbatim as JSON object keys in telemetry
/// packets, so they serialize as plain strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SeatId(pub String);

impl SeatId {
    /// Create a seat identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SeatId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SeatId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Identifier of a physical sensor rail (e.g. `"rail-back"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SensorId(pub String);

impl SensorId {
    /// Create a sensor identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SensorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SensorId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Identifier of a scan zone: a group of seats observed together from one
/// checkpoint.
///
/// Serializes as the bare number; the wire-format label (`"Z<n>"`) used in
/// telemetry packets comes from [`ZoneId::label`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export, export_to = "bindings/")]
pub struct ZoneId(pub u32);

impl ZoneId {
    /// Create a zone identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Return the inner numeric value.
    pub const fn into_inner(self) -> u32 {
        self.0
    }

    /// Return the wire-format zone label, e.g. `"Z2"`.
    pub fn label(self) -> String {
        format!("Z{}", self.0)
    }
}

impl core::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ZoneId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actor_ids_are_unique() {
        let a = ActorId::new();
        let b = ActorId::new();
        assert_ne!(a, b);
        assert_ne!(a.into_inner(), Uuid::nil());
    }

    #[test]
    fn seat_id_serializes_as_plain_string() {
        let id = SeatId::from("S3");
        let json = serde_json::to_string(&id).ok();
        assert_eq!(json.as_deref(), Some("\"S3\""));
    }

    #[test]
    fn zone_label_has_z_prefix() {
        assert_eq!(ZoneId::new(2).label(), "Z2");
        assert_eq!(ZoneId::new(7).label(), "Z7");
    }

    #[test]
    fn sensor_id_display_matches_inner() {
        let id = SensorId::from("rail-back");
        assert_eq!(id.to_string(), "rail-back");
        assert_eq!(id.as_str(), "rail-back");
    }
}
