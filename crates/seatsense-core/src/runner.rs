//! Bounded simulation loop.
//!
//! [`run_simulation`] drives the tick cycle with real-time pacing and two
//! stop conditions: a tick budget and a wall-clock budget (either may be
//! unlimited). After every tick the injected [`TickCallback`] receives the
//! summary — that is where the engine binary hands packets to the
//! dispatcher, so the loop itself never performs I/O and never awaits a
//! network operation.

use std::time::Instant;

use tracing::{info, warn};

use crate::config::SimulationBoundsConfig;
use crate::tick::{self, SimulationState, TickError, TickSummary};

/// Errors that can occur during the simulation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A tick execution failed.
    #[error("tick error: {source}")]
    Tick {
        /// The underlying tick error.
        #[from]
        source: TickError,
    },
}

/// Why the simulation stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationEndReason {
    /// The configured tick budget was exhausted.
    MaxTicksReached,
    /// The configured wall-clock budget was exhausted.
    MaxRealTimeReached,
}

/// Result of the simulation run.
#[derive(Debug)]
pub struct SimulationResult {
    /// The reason the simulation ended.
    pub end_reason: SimulationEndReason,
    /// The last tick summary, if any tick completed.
    pub final_summary: Option<TickSummary>,
    /// Total number of ticks executed.
    pub total_ticks: u64,
}

/// Callback invoked after each tick completes.
///
/// Implementations forward packets to the dispatcher, update dashboards,
/// collect metrics, etc. The callback receives the tick summary and the
/// current simulation state.
pub trait TickCallback: Send {
    /// Called after a tick completes successfully.
    fn on_tick(&mut self, summary: &TickSummary, state: &SimulationState);
}

/// A no-op tick callback for testing.
pub struct NoOpCallback;

impl TickCallback for NoOpCallback {
    fn on_tick(&mut self, _summary: &TickSummary, _state: &SimulationState) {}
}

/// Run the simulation loop until a bound is hit.
///
/// With both bounds set to 0 the loop runs until the process is stopped
/// externally; outstanding dispatch tasks spawned by the callback are left
/// to finish or time out on their own when the loop returns.
///
/// # Errors
///
/// Returns [`RunnerError`] if a tick execution fails unrecoverably.
pub async fn run_simulation(
    state: &mut SimulationState,
    bounds: &SimulationBoundsConfig,
    callback: &mut dyn TickCallback,
) -> Result<SimulationResult, RunnerError> {
    let started = Instant::now();
    let mut last_summary: Option<TickSummary> = None;
    let mut total_ticks: u64 = 0;
    let interval = state.clock.interval();

    info!(
        max_ticks = bounds.max_ticks,
        max_real_time_seconds = bounds.max_real_time_seconds,
        interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX),
        "Simulation starting"
    );

    loop {
        // --- Check wall-clock limit (before tick) ---
        if bounds.max_real_time_seconds > 0
            && started.elapsed().as_secs() >= bounds.max_real_time_seconds
        {
            info!(
                max_seconds = bounds.max_real_time_seconds,
                "Real-time limit reached"
            );
            return Ok(SimulationResult {
                end_reason: SimulationEndReason::MaxRealTimeReached,
                final_summary: last_summary,
                total_ticks,
            });
        }

        // --- Execute tick ---
        let summary = tick::run_tick(state)?;
        total_ticks = total_ticks.saturating_add(1);

        // --- Notify callback ---
        callback.on_tick(&summary, state);

        // --- Check tick limit (after tick) ---
        if bounds.max_ticks > 0 && summary.tick >= bounds.max_ticks {
            info!(
                tick = summary.tick,
                max_ticks = bounds.max_ticks,
                "Tick limit reached"
            );
            return Ok(SimulationResult {
                end_reason: SimulationEndReason::MaxTicksReached,
                final_summary: Some(summary),
                total_ticks,
            });
        }

        last_summary = Some(summary);

        // --- Sleep for real-time pacing ---
        tokio::time::sleep(interval).await;
    }
}

/// Log the simulation end sequence.
pub fn log_simulation_end(result: &SimulationResult) {
    info!(
        reason = ?result.end_reason,
        total_ticks = result.total_ticks,
        final_tick = result.final_summary.as_ref().map(|s| s.tick),
        final_actors_active = result.final_summary.as_ref().map(|s| s.actors_active),
        bags_abandoned = result.final_summary.as_ref().map(|s| s.bags_abandoned_total),
        "Simulation ended"
    );

    if result.final_summary.is_none() {
        warn!("Simulation ended with no ticks executed");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use seatsense_agents::BehaviorConfig;
    use seatsense_sensors::{RailScanner, ScannerParams};
    use seatsense_types::{SensorId, ZoneId};
    use seatsense_world::create_standard_room;

    use super::*;
    use crate::clock::SimClock;
    use crate::tick::SimulationState;

    fn make_state() -> SimulationState {
        let (plan, registry) = create_standard_room(20.0, 16.0).unwrap();
        let (calib_start, calib_end) = plan.calibration_span();
        let scanners = vec![
            RailScanner::new(
                SensorId::from("rail-back"),
                vec![ZoneId::new(1), ZoneId::new(2)],
                ScannerParams {
                    move_speed: 2.0,
                    scan_duration: 3.0,
                    calibration_speed: 8.0,
                    calib_start,
                    calib_end,
                },
            )
            .unwrap(),
        ];
        // 1 ms ticks keep the paced test fast.
        let clock = SimClock::new(1).unwrap();
        SimulationState::new(
            clock,
            plan,
            registry,
            BehaviorConfig::default(),
            scanners,
            42,
        )
    }

    #[tokio::test]
    async fn bounded_by_max_ticks() {
        let mut state = make_state();
        let bounds = SimulationBoundsConfig {
            max_ticks: 5,
            max_real_time_seconds: 0,
        };
        let mut cb = NoOpCallback;

        let result = run_simulation(&mut state, &bounds, &mut cb).await.unwrap();
        assert_eq!(result.end_reason, SimulationEndReason::MaxTicksReached);
        assert_eq!(result.total_ticks, 5);
        assert_eq!(result.final_summary.unwrap().tick, 5);
    }

    #[tokio::test]
    async fn tick_callback_is_called_every_tick() {
        struct CountCallback {
            count: u64,
        }
        impl TickCallback for CountCallback {
            fn on_tick(&mut self, _summary: &TickSummary, _state: &SimulationState) {
                self.count = self.count.saturating_add(1);
            }
        }

        let mut state = make_state();
        let bounds = SimulationBoundsConfig {
            max_ticks: 3,
            max_real_time_seconds: 0,
        };
        let mut cb = CountCallback { count: 0 };

        let _ = run_simulation(&mut state, &bounds, &mut cb).await.unwrap();
        assert_eq!(cb.count, 3);
    }

    #[tokio::test]
    async fn wall_clock_bound_stops_the_loop() {
        let mut state = make_state();
        let bounds = SimulationBoundsConfig {
            max_ticks: 0,
            max_real_time_seconds: 1,
        };
        let mut cb = NoOpCallback;

        let result = run_simulation(&mut state, &bounds, &mut cb).await.unwrap();
        assert_eq!(result.end_reason, SimulationEndReason::MaxRealTimeReached);
        assert!(result.total_ticks > 0);
    }
}
