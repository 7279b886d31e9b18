//! Enumeration types shared across the Seatsense simulation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Behavioral state of a simulated actor.
///
/// The happy path is a total order: `Spawn` through `Done`. The water-break
/// branch (`Stand` through `Study2`) is entered only by actors whose
/// profile planned a break; everyone else goes straight from `Study` to
/// `Pack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ActorState {
    /// Brief settle-in dwell right after spawning, before pathing begins.
    Spawn,
    /// Walking from the entrance to the assigned seat.
    WalkToSeat,
    /// Lowering into the seat (first arrival).
    Sit,
    /// Staged reveal of belongings onto desk and floor.
    Place,
    /// First study session.
    Study,
    /// Rising from the seat to fetch water.
    Stand,
    /// Walking from the seat to the water cooler.
    WalkToCooler,
    /// Drinking at the cooler.
    Drink,
    /// Walking from the cooler back to the seat.
    WalkBack,
    /// Lowering into the seat again after the break.
    Sit2,
    /// Second, shorter study session after the break.
    Study2,
    /// Staged re-attachment of belongings before leaving.
    Pack,
    /// Rising from the seat to leave.
    Stand2,
    /// Walking from the seat to the exit.
    WalkOut,
    /// Terminal state: the actor has left the room.
    Done,
}

impl ActorState {
    /// Whether this is the terminal state.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done)
    }

    /// Whether an actor in this state registers as an occupancy signal for
    /// its assigned seat.
    ///
    /// Everything between spawn settle and departure counts, including the
    /// water-break walk: the actor's belongings stay on the desk while they
    /// fetch water. Only `Spawn`, the exit walk, and the terminal state do
    /// not register.
    pub const fn is_presence_signal(self) -> bool {
        !matches!(self, Self::Spawn | Self::WalkOut | Self::Done)
    }

    /// Whether the actor is traversing a waypoint route in this state.
    pub const fn is_walking(self) -> bool {
        matches!(
            self,
            Self::WalkToSeat | Self::WalkToCooler | Self::WalkBack | Self::WalkOut
        )
    }
}

/// Object classification reported for a seat in a telemetry reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "lowercase")]
pub enum ObjectClass {
    /// Nothing detected at the seat.
    Empty,
    /// Belongings detected without a person (the occupant stepped away).
    Bag,
    /// A person detected at the seat.
    Person,
}

impl core::fmt::Display for ObjectClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Self::Empty => "empty",
            Self::Bag => "bag",
            Self::Person => "person",
        };
        write!(f, "{s}")
    }
}

/// Lifecycle phase of a rail scanner.
///
/// Calibration runs exactly once per rail lifetime; the phase never
/// returns to `Calibrating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ScanPhase {
    /// Sweeping the rail end-to-end to discover checkpoint positions.
    Calibrating,
    /// Cyclically traveling between checkpoints and dwelling at each.
    Scanning,
}

/// Direction of the boustrophedon checkpoint sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SweepDirection {
    /// Ascending checkpoint index.
    Forward,
    /// Descending checkpoint index.
    Reverse,
}

impl SweepDirection {
    /// Return the opposite direction.
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}
