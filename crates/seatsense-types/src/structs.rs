//! Core entity and wire-payload structs.
//!
//! The wire types ([`TelemetryPacket`], [`CameraFrame`], [`StatusReport`])
//! define the JSON contract consumed by the external dashboard; their field
//! names are the wire names. They flow downstream to `TypeScript` via
//! `ts-rs`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::ObjectClass;
use crate::geometry::Point3;
use crate::ids::{SeatId, SensorId, ZoneId};

/// A seat in the room catalog. Immutable after room construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Seat {
    /// Seat identifier, e.g. `"S3"`.
    pub id: SeatId,
    /// The scan zone this seat belongs to.
    pub zone: ZoneId,
    /// Chair position in room space.
    pub position: Point3,
}

/// One synthetic sensor reading for a single seat.
///
/// Ephemeral: recomputed on every dwell completion, never persisted here.
/// All numeric fields are clamped to `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TelemetryReading {
    /// Occupancy likelihood in `[0, 1]`.
    pub presence: f32,
    /// Gross motion level in `[0, 1]`.
    pub motion: f32,
    /// Detected object classification.
    pub object_type: ObjectClass,
    /// Classifier confidence in `[0, 1]`.
    pub confidence: f32,
    /// Whether sub-threshold micro-motion (breathing, typing) was detected.
    pub micro_motion: bool,
}

impl TelemetryReading {
    /// The reading reported for a seat with nothing detected.
    pub const fn empty() -> Self {
        Self {
            presence: 0.0,
            motion: 0.0,
            object_type: ObjectClass::Empty,
            confidence: 0.0,
            micro_motion: false,
        }
    }
}

/// A telemetry packet: one zone's seat readings from one dwell completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TelemetryPacket {
    /// Unix timestamp (seconds) when the dwell completed.
    pub timestamp: i64,
    /// Zone label, e.g. `"Z2"`.
    pub zone_id: String,
    /// The emitting sensor rail.
    pub sensor: SensorId,
    /// Per-seat readings for every seat in the zone.
    pub seats: BTreeMap<SeatId, TelemetryReading>,
}

/// A synthetic camera-frame payload pushed once per frame interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CameraFrame {
    /// The sensor rail the frame came from.
    pub sensor: SensorId,
    /// Base64-encoded JPEG data.
    pub frame: String,
}

/// Aggregate sensor status payload: one free-text status line per sensor,
/// serialized as a bare JSON object.
pub type StatusReport = BTreeMap<SensorId, String>;
