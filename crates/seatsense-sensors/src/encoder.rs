//! Synthetic telemetry encoding: actor state to sensor reading.
//!
//! A pure mapping invoked once per seat per dwell completion. The reading
//! is what a camera/radar fusion stack would plausibly report for the
//! seat, with jitter drawn from an injectable RNG so tests can pin the
//! values with a fixed seed.
//!
//! | Actor state                          | object | presence    | motion       | confidence  | micro |
//! |--------------------------------------|--------|-------------|--------------|-------------|-------|
//! | Study, Study2, Sit, Sit2, Place      | person | 0.85 ± 0.10 | 0.15 ± 0.10  | 0.90 ± 0.05 | yes   |
//! | WalkToCooler, Drink, WalkBack        | bag    | 0.45 ± 0.15 | 0.02 + 0.03u | 0.75 ± 0.10 | no    |
//! | Pack, Stand, Stand2                  | person | 0.70 ± 0.15 | 0.60 ± 0.20  | 0.80 ± 0.10 | yes   |
//! | none, Spawn, WalkToSeat, WalkOut     | empty  | 0           | 0            | 0           | no    |
//!
//! All numeric fields are clamped to `[0, 1]` after jitter. The encoder
//! considers only the single actor assigned to the seat (the reservation
//! invariant guarantees there is at most one) — abandoned bags are not
//! consulted, so a ghost seat reads `empty` here even while the scanner's
//! ground-truth check flags its zone occupied.

use rand::Rng;
use seatsense_types::{ActorState, ObjectClass, TelemetryReading};

/// Encode the reading for one seat given the state of its assigned actor,
/// if any.
pub fn encode_seat(state: Option<ActorState>, rng: &mut impl Rng) -> TelemetryReading {
    let reading = match state {
        Some(
            ActorState::Study
            | ActorState::Study2
            | ActorState::Sit
            | ActorState::Sit2
            | ActorState::Place,
        ) => TelemetryReading {
            presence: jitter(rng, 0.85, 0.10),
            motion: jitter(rng, 0.15, 0.10),
            object_type: ObjectClass::Person,
            confidence: jitter(rng, 0.90, 0.05),
            micro_motion: true,
        },
        Some(ActorState::WalkToCooler | ActorState::Drink | ActorState::WalkBack) => {
            TelemetryReading {
                presence: jitter(rng, 0.45, 0.15),
                motion: 0.02 + rng.random_range(0.0..=0.03),
                object_type: ObjectClass::Bag,
                confidence: jitter(rng, 0.75, 0.10),
                micro_motion: false,
            }
        }
        Some(ActorState::Pack | ActorState::Stand | ActorState::Stand2) => TelemetryReading {
            presence: jitter(rng, 0.70, 0.15),
            motion: jitter(rng, 0.60, 0.20),
            object_type: ObjectClass::Person,
            confidence: jitter(rng, 0.80, 0.10),
            micro_motion: true,
        },
        _ => return TelemetryReading::empty(),
    };

    clamped(reading)
}

/// Symmetric jitter around `center`.
fn jitter(rng: &mut impl Rng, center: f32, spread: f32) -> f32 {
    center + rng.random_range(-spread..=spread)
}

/// Clamp all numeric fields to `[0, 1]`.
fn clamped(reading: TelemetryReading) -> TelemetryReading {
    TelemetryReading {
        presence: reading.presence.clamp(0.0, 1.0),
        motion: reading.motion.clamp(0.0, 1.0),
        confidence: reading.confidence.clamp(0.0, 1.0),
        ..reading
    }
}
