//! The rail scanner: a two-phase state machine per physical sensor rail.
//!
//! A scanner starts in `Calibrating`: the carriage travels the rail
//! end-to-end once, "discovering" the seat clusters below. On completion
//! the swept span is partitioned into one checkpoint per assigned zone and
//! the scanner switches to `Scanning` for the rest of its lifetime:
//! travel to the current checkpoint, dwell there for the scan duration,
//! report the dwell completion (the core turns it into a telemetry
//! packet), advance the sweep, repeat.

use seatsense_types::{ScanPhase, SensorId, SweepDirection, ZoneId};
use tracing::{debug, info, warn};

use crate::error::SensorError;
use crate::presence::PresenceProbe;
use crate::sweep::{self, Checkpoint};

/// Carriage distance at which a checkpoint counts as reached.
const CHECKPOINT_TOLERANCE: f32 = 0.05;

/// Motion and timing parameters for one rail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScannerParams {
    /// Carriage travel speed between checkpoints, units per second.
    pub move_speed: f32,
    /// Stationary dwell at each checkpoint, seconds.
    pub scan_duration: f32,
    /// Carriage speed during the calibration sweep, units per second.
    pub calibration_speed: f32,
    /// Calibration travel start position.
    pub calib_start: f32,
    /// Calibration travel end position.
    pub calib_end: f32,
}

/// A rail-mounted scanner working through calibration and the checkpoint
/// sweep.
#[derive(Debug, Clone)]
pub struct RailScanner {
    id: SensorId,
    params: ScannerParams,
    /// Zones assigned to this rail, ascending.
    zones: Vec<ZoneId>,
    /// A rail with nothing to observe is inert: it never calibrates,
    /// scans, or emits.
    enabled: bool,
    phase: ScanPhase,
    carriage_x: f32,
    checkpoints: Vec<Checkpoint>,
    checkpoint_index: usize,
    direction: SweepDirection,
    at_checkpoint: bool,
    dwell_timer: f32,
    status: String,
    /// Ground-truth classification of the checkpoint currently dwelled on.
    last_presence: bool,
}

impl RailScanner {
    /// Create a scanner for one rail.
    ///
    /// A rail assigned no zones constructs disabled (inert) rather than
    /// failing: the simulation keeps running without it.
    ///
    /// # Errors
    ///
    /// Returns [`SensorError`] if the calibration span is empty/inverted
    /// or any speed/duration is not positive.
    pub fn new(
        id: SensorId,
        mut zones: Vec<ZoneId>,
        params: ScannerParams,
    ) -> Result<Self, SensorError> {
        if params.calib_end <= params.calib_start {
            return Err(SensorError::InvalidCalibrationSpan {
                start: params.calib_start,
                end: params.calib_end,
            });
        }
        for (name, value) in [
            ("move_speed", params.move_speed),
            ("scan_duration", params.scan_duration),
            ("calibration_speed", params.calibration_speed),
        ] {
            if value <= 0.0 {
                return Err(SensorError::NonPositiveParameter { name, value });
            }
        }

        zones.sort_unstable();
        let enabled = !zones.is_empty();
        if !enabled {
            warn!(sensor = %id, "Rail has no assigned zones, scanner disabled");
        }

        Ok(Self {
            id,
            params,
            zones,
            enabled,
            phase: ScanPhase::Calibrating,
            carriage_x: params.calib_start,
            checkpoints: Vec::new(),
            checkpoint_index: 0,
            direction: SweepDirection::Forward,
            at_checkpoint: false,
            dwell_timer: 0.0,
            status: if enabled {
                String::from("INITIALIZING")
            } else {
                String::from("DISABLED")
            },
            last_presence: false,
        })
    }

    /// Advance the scanner by `dt` seconds. Returns the zone whose dwell
    /// completed this tick, if any — the signal to emit one telemetry
    /// packet.
    pub fn tick(&mut self, dt: f32, probe: &dyn PresenceProbe) -> Option<ZoneId> {
        if !self.enabled {
            return None;
        }
        match self.phase {
            ScanPhase::Calibrating => {
                self.calibrate(dt);
                None
            }
            ScanPhase::Scanning => self.scan(dt, probe),
        }
    }

    /// One calibration step: travel toward the far end, then partition.
    fn calibrate(&mut self, dt: f32) {
        self.status = format!("CALIBRATING X={:.1}", self.carriage_x);
        self.carriage_x += self.params.calibration_speed * dt;

        if self.carriage_x >= self.params.calib_end {
            self.carriage_x = self.params.calib_end;
            self.finish_calibration();
        }
    }

    /// Partition the swept span and switch to scanning. Runs exactly once.
    fn finish_calibration(&mut self) {
        self.checkpoints =
            sweep::partition_checkpoints(self.params.calib_start, self.params.calib_end, &self.zones);

        info!(
            sensor = %self.id,
            checkpoints = self.checkpoints.len(),
            "Calibration complete, switching to scan mode"
        );
        for (i, cp) in self.checkpoints.iter().enumerate() {
            debug!(sensor = %self.id, checkpoint = i, x = cp.x, zone = %cp.zone, "Checkpoint mapped");
        }

        self.checkpoint_index = 0;
        self.direction = SweepDirection::Forward;
        self.at_checkpoint = false;
        self.dwell_timer = 0.0;
        self.phase = ScanPhase::Scanning;
        self.status = String::from("SCANNING");
    }

    /// One scanning step: either dwell at the current checkpoint or travel
    /// toward it.
    fn scan(&mut self, dt: f32, probe: &dyn PresenceProbe) -> Option<ZoneId> {
        let Some(current) = self.checkpoints.get(self.checkpoint_index).copied() else {
            return None;
        };

        if self.at_checkpoint {
            self.dwell_timer += dt;
            self.last_presence = probe.zone_occupied(current.zone);
            self.status = format!("SCANNING Zone {}", current.zone);

            if self.dwell_timer >= self.params.scan_duration {
                self.at_checkpoint = false;
                self.dwell_timer = 0.0;
                let (index, direction) = sweep::advance_sweep(
                    self.checkpoint_index,
                    self.direction,
                    self.checkpoints.len(),
                );
                self.checkpoint_index = index;
                self.direction = direction;
                self.status = String::from("MOVING");
                return Some(current.zone);
            }
            return None;
        }

        let diff = current.x - self.carriage_x;
        if diff.abs() > CHECKPOINT_TOLERANCE {
            let step = self.params.move_speed * dt;
            self.carriage_x += diff.signum() * step.min(diff.abs());
        } else {
            self.carriage_x = current.x;
            self.at_checkpoint = true;
            self.dwell_timer = 0.0;
        }
        None
    }

    /// The rail's identifier.
    pub const fn id(&self) -> &SensorId {
        &self.id
    }

    /// Current lifecycle phase.
    pub const fn phase(&self) -> ScanPhase {
        self.phase
    }

    /// Whether the scanner is operational.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current free-text status line for the status payload.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The discovered checkpoints (empty until calibration completes).
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    /// Current sweep index.
    pub const fn checkpoint_index(&self) -> usize {
        self.checkpoint_index
    }

    /// Current sweep direction.
    pub const fn direction(&self) -> SweepDirection {
        self.direction
    }

    /// Current carriage position along the rail.
    pub const fn carriage_x(&self) -> f32 {
        self.carriage_x
    }

    /// The zone of the checkpoint currently targeted or dwelled on.
    pub fn current_zone(&self) -> Option<ZoneId> {
        self.checkpoints
            .get(self.checkpoint_index)
            .map(|cp| cp.zone)
    }

    /// Ground-truth classification of the last dwelled checkpoint.
    pub const fn last_presence(&self) -> bool {
        self.last_presence
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use seatsense_types::ScanPhase;

    use super::*;
    use crate::presence::ConstantProbe;

    fn params() -> ScannerParams {
        ScannerParams {
            move_speed: 2.0,
            scan_duration: 3.0,
            calibration_speed: 0.8,
            calib_start: -10.0,
            calib_end: 10.0,
        }
    }

    fn zones(ids: &[u32]) -> Vec<ZoneId> {
        ids.iter().copied().map(ZoneId::new).collect()
    }

    fn make_scanner(zone_ids: &[u32]) -> RailScanner {
        RailScanner::new(SensorId::from("rail-test"), zones(zone_ids), params()).unwrap()
    }

    /// Tick until calibration finishes (bounded).
    fn run_calibration(scanner: &mut RailScanner) {
        let probe = ConstantProbe(false);
        for _ in 0..10_000 {
            let _ = scanner.tick(0.05, &probe);
            if scanner.phase() == ScanPhase::Scanning {
                return;
            }
        }
        panic!("calibration did not finish");
    }

    /// Tick until the next dwell completion, returning the emitted zone.
    fn run_to_dwell_completion(scanner: &mut RailScanner, occupied: bool) -> ZoneId {
        let probe = ConstantProbe(occupied);
        for _ in 0..100_000 {
            if let Some(zone) = scanner.tick(0.05, &probe) {
                return zone;
            }
        }
        panic!("no dwell completion");
    }

    #[test]
    fn calibration_partitions_the_span_once() {
        let mut scanner = make_scanner(&[1, 2, 3, 4]);
        assert_eq!(scanner.phase(), ScanPhase::Calibrating);
        run_calibration(&mut scanner);

        let xs: Vec<f32> = scanner.checkpoints().iter().map(|cp| cp.x).collect();
        let expected = [-7.5_f32, -2.5, 2.5, 7.5];
        assert_eq!(xs.len(), 4);
        for (x, want) in xs.iter().zip(expected.iter()) {
            assert!((x - want).abs() < 1e-4);
        }
    }

    #[test]
    fn phase_never_returns_to_calibrating() {
        let mut scanner = make_scanner(&[1, 2]);
        run_calibration(&mut scanner);
        let probe = ConstantProbe(false);
        for _ in 0..50_000 {
            let _ = scanner.tick(0.05, &probe);
            assert_eq!(scanner.phase(), ScanPhase::Scanning);
        }
    }

    #[test]
    fn dwell_completion_emits_the_checkpoint_zone_in_sweep_order() {
        let mut scanner = make_scanner(&[1, 2, 3, 4]);
        run_calibration(&mut scanner);

        let mut emitted = Vec::new();
        for _ in 0..8 {
            emitted.push(run_to_dwell_completion(&mut scanner, false).into_inner());
        }
        // Boustrophedon order: up, turn, back down, turn again.
        assert_eq!(emitted, vec![1, 2, 3, 4, 3, 2, 1, 2]);
    }

    #[test]
    fn direction_reverses_exactly_at_the_last_checkpoint() {
        let mut scanner = make_scanner(&[1, 2, 3, 4]);
        run_calibration(&mut scanner);

        // Dwell through checkpoints 0..=3; after the 4th completion the
        // index must step back to 2 with the direction reversed.
        for _ in 0..4 {
            let _ = run_to_dwell_completion(&mut scanner, false);
        }
        assert_eq!(scanner.checkpoint_index(), 2);
        assert_eq!(scanner.direction(), SweepDirection::Reverse);
    }

    #[test]
    fn index_stays_in_bounds_over_many_cycles() {
        let mut scanner = make_scanner(&[5, 6, 7]);
        run_calibration(&mut scanner);
        let probe = ConstantProbe(false);
        for _ in 0..200_000 {
            let _ = scanner.tick(0.05, &probe);
            assert!(scanner.checkpoint_index() < scanner.checkpoints().len());
        }
    }

    #[test]
    fn single_zone_is_a_fixed_point() {
        let mut scanner = make_scanner(&[3]);
        run_calibration(&mut scanner);
        assert_eq!(scanner.checkpoints().len(), 1);

        for _ in 0..5 {
            let zone = run_to_dwell_completion(&mut scanner, false);
            assert_eq!(zone, ZoneId::new(3));
            assert_eq!(scanner.checkpoint_index(), 0);
        }
    }

    #[test]
    fn zoneless_rail_is_inert() {
        let mut scanner = make_scanner(&[]);
        assert!(!scanner.is_enabled());
        assert_eq!(scanner.status(), "DISABLED");

        let probe = ConstantProbe(true);
        for _ in 0..10_000 {
            assert!(scanner.tick(0.05, &probe).is_none());
        }
        assert_eq!(scanner.phase(), ScanPhase::Calibrating);
    }

    #[test]
    fn dwell_classifies_presence_from_the_probe() {
        let mut scanner = make_scanner(&[1, 2]);
        run_calibration(&mut scanner);

        let _ = run_to_dwell_completion(&mut scanner, true);
        assert!(scanner.last_presence());
        let _ = run_to_dwell_completion(&mut scanner, false);
        assert!(!scanner.last_presence());
    }

    #[test]
    fn status_reflects_the_machine() {
        let mut scanner = make_scanner(&[1, 2]);
        assert_eq!(scanner.status(), "INITIALIZING");

        let probe = ConstantProbe(false);
        let _ = scanner.tick(0.05, &probe);
        assert!(scanner.status().starts_with("CALIBRATING"));

        run_calibration(&mut scanner);
        let _ = run_to_dwell_completion(&mut scanner, false);
        assert_eq!(scanner.status(), "MOVING");
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let bad_span = ScannerParams {
            calib_start: 5.0,
            calib_end: -5.0,
            ..params()
        };
        assert!(RailScanner::new(SensorId::from("r"), zones(&[1]), bad_span).is_err());

        let bad_speed = ScannerParams {
            move_speed: 0.0,
            ..params()
        };
        assert!(RailScanner::new(SensorId::from("r"), zones(&[1]), bad_speed).is_err());
    }
}
