//! Checkpoint partitioning and boustrophedon sweep traversal.
//!
//! Pure functions, deliberately free of scanner state: the math here is
//! what the invariants in the scanner tests pin down.
//!
//! # Traversal
//!
//! The sweep oscillates end-to-end instead of wrapping around: after the
//! last checkpoint the direction flips and the carriage retraces its path.
//! Every checkpoint is revisited with period `2 * (count - 1)` dwell
//! cycles. A single checkpoint is a fixed point and never advances.

use seatsense_types::{SweepDirection, ZoneId};

/// A fixed scan position along a rail, mapped 1:1 to a zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkpoint {
    /// Carriage position along the rail.
    pub x: f32,
    /// The zone observed from this position.
    pub zone: ZoneId,
}

/// Partition the calibration travel span into one evenly spaced checkpoint
/// per zone.
///
/// The span is divided into `zones.len()` equal slots with each checkpoint
/// at its slot center, so a span of `-10..10` with four zones yields
/// checkpoints at `-7.5, -2.5, 2.5, 7.5`. Zone ids are assigned in
/// ascending order left to right regardless of the order given.
pub fn partition_checkpoints(
    calib_start: f32,
    calib_end: f32,
    zones: &[ZoneId],
) -> Vec<Checkpoint> {
    if zones.is_empty() {
        return Vec::new();
    }

    let mut ordered: Vec<ZoneId> = zones.to_vec();
    ordered.sort_unstable();

    let count = ordered.len();
    let spacing = (calib_end - calib_start) / count as f32;

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, zone)| Checkpoint {
            x: calib_start + spacing / 2.0 + i as f32 * spacing,
            zone,
        })
        .collect()
}

/// Advance the sweep by one dwell cycle.
///
/// Moves one step in the current direction; at either end the direction
/// flips and the index steps back inside, so the end checkpoints are
/// visited once per half-cycle and interior checkpoints twice per full
/// cycle. With fewer than two checkpoints the sweep is a fixed point.
pub const fn advance_sweep(
    index: usize,
    direction: SweepDirection,
    count: usize,
) -> (usize, SweepDirection) {
    if count < 2 {
        return (index, direction);
    }

    match direction {
        SweepDirection::Forward => {
            let next = index.saturating_add(1);
            if next > count - 1 {
                (count - 2, SweepDirection::Reverse)
            } else {
                (next, SweepDirection::Forward)
            }
        }
        SweepDirection::Reverse => {
            if index == 0 {
                (1, SweepDirection::Forward)
            } else {
                (index - 1, SweepDirection::Reverse)
            }
        }
    }
}
