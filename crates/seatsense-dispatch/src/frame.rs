//! Camera frame sourcing for the `/api/camera` payload.
//!
//! Actual frame capture (render targets, JPEG encoding) happens outside
//! this core, so the dispatcher only needs something that yields an
//! already-encoded frame per sensor. [`PlaceholderFrameSource`] serves a
//! fixed 1x1 JPEG so the camera channel and its consumers stay exercised;
//! a real capture pipeline plugs in through the same trait.

use seatsense_types::{CameraFrame, SensorId};

/// Base64 of a minimal 1x1 JPEG, served as the placeholder frame.
const PLACEHOLDER_JPEG_BASE64: &str = "/9j/4AAQSkZJRgABAQAAAQABAAD/2wBDAAgGBgcGBQgHBwcJCQgKDBQNDAsLDBkSEw8UHRofHh0aHBwgJC4nICIsIxwcKDcpLDAxNDQ0Hyc5PTgyPC4zNDL/wAALCAABAAEBAREA/8QAFAABAAAAAAAAAAAAAAAAAAAACv/EABQQAQAAAAAAAAAAAAAAAAAAAAD/2gAIAQEAAD8AVN//2Q==";

/// Supplier of encoded camera frames, one per sensor per frame interval.
pub trait FrameSource {
    /// The next frame for `sensor`, already base64-encoded, or `None` if
    /// no frame is available this interval.
    fn next_frame(&mut self, sensor: &SensorId) -> Option<CameraFrame>;
}

/// Frame source that always serves the embedded placeholder JPEG.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderFrameSource;

impl FrameSource for PlaceholderFrameSource {
    fn next_frame(&mut self, sensor: &SensorId) -> Option<CameraFrame> {
        Some(CameraFrame {
            sensor: sensor.clone(),
            frame: PLACEHOLDER_JPEG_BASE64.to_owned(),
        })
    }
}
