//! Fire-and-forget fan-out of telemetry, camera, and status payloads.
//!
//! Every publish call spawns one detached request task per sink and
//! returns immediately: the simulation tick never waits on the network.
//! Each request carries its own timeout; nothing is queued, bounded, or
//! retried — the next scheduled payload supersedes a lost one with fresh
//! data. Under sustained sink unavailability the number of outstanding
//! requests is unbounded; that is an accepted operational risk of the
//! best-effort design, not corrected here.
//!
//! Publish methods must be called from within a Tokio runtime (the
//! simulation runner provides one). On shutdown, in-flight requests finish
//! or time out on their own; there is no cancellation path.

use std::sync::Arc;
use std::time::Duration;

use seatsense_types::{CameraFrame, StatusReport, TelemetryPacket};
use tracing::{debug, warn};

use crate::error::DispatchError;
use crate::sink::Sink;

/// Telemetry endpoint path on each sink.
const TELEMETRY_PATH: &str = "/api/telemetry";

/// Camera-frame endpoint path on each sink.
const CAMERA_PATH: &str = "/api/camera";

/// Sensor-status endpoint path on each sink.
const STATUS_PATH: &str = "/api/status";

/// Non-blocking fan-out sender over a fixed set of sinks.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: reqwest::Client,
    sinks: Vec<Arc<Sink>>,
    request_timeout: Duration,
}

impl Dispatcher {
    /// Build a dispatcher over the configured sink base URLs.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidSinkUrl`] if any URL does not parse,
    /// or [`DispatchError::NoSinks`] for an empty list.
    pub fn new(sink_urls: &[String], request_timeout: Duration) -> Result<Self, DispatchError> {
        if sink_urls.is_empty() {
            return Err(DispatchError::NoSinks);
        }

        let mut sinks = Vec::with_capacity(sink_urls.len());
        for url in sink_urls {
            let parsed = reqwest::Url::parse(url).map_err(|e| DispatchError::InvalidSinkUrl {
                url: url.clone(),
                message: format!("{e}"),
            })?;
            // Keep the canonical string without a trailing slash so path
            // concatenation stays predictable.
            let mut base = parsed.to_string();
            while base.ends_with('/') {
                base.pop();
            }
            sinks.push(Arc::new(Sink::new(base)));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            sinks,
            request_timeout,
        })
    }

    /// Push one telemetry packet to every sink.
    pub fn publish_telemetry(&self, packet: &TelemetryPacket) {
        match serde_json::to_value(packet) {
            Ok(body) => self.post_all(TELEMETRY_PATH, body),
            Err(e) => warn!(error = %e, "Failed to serialize telemetry packet"),
        }
    }

    /// Push one synthetic camera frame to every sink.
    pub fn publish_frame(&self, frame: &CameraFrame) {
        match serde_json::to_value(frame) {
            Ok(body) => self.post_all(CAMERA_PATH, body),
            Err(e) => warn!(error = %e, "Failed to serialize camera frame"),
        }
    }

    /// Push the aggregate sensor status to every sink.
    pub fn publish_status(&self, status: &StatusReport) {
        match serde_json::to_value(status) {
            Ok(body) => self.post_all(STATUS_PATH, body),
            Err(e) => warn!(error = %e, "Failed to serialize status report"),
        }
    }

    /// Spawn one detached POST per sink. Never awaited by the caller.
    fn post_all(&self, path: &'static str, body: serde_json::Value) {
        for sink in &self.sinks {
            let client = self.client.clone();
            let sink = Arc::clone(sink);
            let url = format!("{}{}", sink.base_url(), path);
            let body = body.clone();
            let timeout = self.request_timeout;

            tokio::spawn(async move {
                let result = client
                    .post(&url)
                    .timeout(timeout)
                    .json(&body)
                    .send()
                    .await;

                match result {
                    Ok(response) if response.status().is_success() => {
                        sink.record_success();
                    }
                    Ok(response) => {
                        // The sink answered but rejected the payload; that
                        // is not a connectivity streak.
                        debug!(url, status = %response.status(), "Sink rejected payload");
                    }
                    Err(e) => {
                        if sink.record_failure() {
                            warn!(url, error = %e, "Cannot reach sink, suppressing further warnings until it recovers");
                        }
                    }
                }
            });
        }
    }

    /// The configured sinks, for status inspection.
    pub fn sinks(&self) -> &[Arc<Sink>] {
        &self.sinks
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use seatsense_types::SensorId;

    use super::*;

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn rejects_empty_and_malformed_sink_lists() {
        let result = Dispatcher::new(&[], Duration::from_secs(2));
        assert!(matches!(result, Err(DispatchError::NoSinks)));

        let result = Dispatcher::new(&urls(&["not a url"]), Duration::from_secs(2));
        assert!(matches!(result, Err(DispatchError::InvalidSinkUrl { .. })));
    }

    #[test]
    fn normalizes_trailing_slashes() {
        let dispatcher =
            Dispatcher::new(&urls(&["http://localhost:5001/"]), Duration::from_secs(2)).unwrap();
        assert_eq!(
            dispatcher.sinks().first().unwrap().base_url(),
            "http://localhost:5001"
        );
    }

    #[tokio::test]
    async fn publish_returns_immediately_and_counts_failures() {
        // Nothing listens on the discard port, so every request fails with
        // a connection error shortly after being spawned.
        let dispatcher =
            Dispatcher::new(&urls(&["http://127.0.0.1:9"]), Duration::from_millis(500)).unwrap();

        let mut status = BTreeMap::new();
        status.insert(SensorId::from("rail-back"), String::from("SCANNING"));

        let started = std::time::Instant::now();
        dispatcher.publish_status(&status);
        // The call itself must not block on the network.
        assert!(started.elapsed() < Duration::from_millis(100));

        // Give the detached tasks time to fail.
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(dispatcher.sinks().first().unwrap().consecutive_failures() >= 1);
    }
}
