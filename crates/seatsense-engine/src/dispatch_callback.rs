//! Bridge from tick summaries to the telemetry dispatcher.
//!
//! The tick loop stays free of I/O: it only reports what happened. This
//! callback is where those reports leave the process — telemetry packets
//! on every tick that produced them, and camera-frame plus status payloads
//! on a wall-clock cadence independent of the simulation timestep.

use std::time::{Duration, Instant};

use seatsense_core::runner::TickCallback;
use seatsense_core::tick::{SimulationState, TickSummary};
use seatsense_dispatch::{Dispatcher, FrameSource, PlaceholderFrameSource};

/// [`TickCallback`] that forwards tick output to the dispatcher.
pub struct DispatchCallback {
    dispatcher: Dispatcher,
    frame_source: PlaceholderFrameSource,
    frame_interval: Duration,
    last_frame_push: Instant,
}

impl DispatchCallback {
    /// Create a callback pushing frames/status every `frame_interval`.
    pub fn new(dispatcher: Dispatcher, frame_interval: Duration) -> Self {
        Self {
            dispatcher,
            frame_source: PlaceholderFrameSource,
            frame_interval,
            last_frame_push: Instant::now(),
        }
    }
}

impl TickCallback for DispatchCallback {
    fn on_tick(&mut self, summary: &TickSummary, _state: &SimulationState) {
        for packet in &summary.packets {
            self.dispatcher.publish_telemetry(packet);
        }

        if self.last_frame_push.elapsed() >= self.frame_interval {
            self.last_frame_push = Instant::now();
            for sensor in summary.statuses.keys() {
                if let Some(frame) = self.frame_source.next_frame(sensor) {
                    self.dispatcher.publish_frame(&frame);
                }
            }
            self.dispatcher.publish_status(&summary.statuses);
        }
    }
}
