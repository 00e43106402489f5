//! Frame pacing for real-time preview.

use std::time::{Duration, Instant};

/// Wall-clock pacing for real-time preview, with a smoothed FPS readout.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Minimum time between frames (zero = unlimited).
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f64,
    /// Weight of the newest sample (0.0-1.0)
    smoothing: f64,
}

impl FrameTiming {
    /// Timer for the given frame rate; non-positive or non-finite rates
    /// disable limiting.
    pub fn new(target_fps: f64) -> Self {
        let min_frame_duration = if target_fps.is_finite() && target_fps > 0.0 {
            Duration::from_secs_f64(1.0 / target_fps)
        } else {
            Duration::ZERO
        };

        Self {
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: if min_frame_duration.is_zero() {
                60.0
            } else {
                target_fps
            },
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame.
    pub fn should_render(&self) -> bool {
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Time left until the next frame is due.
    pub fn remaining(&self) -> Duration {
        self.min_frame_duration
            .saturating_sub(self.last_frame.elapsed())
    }

    /// Block until the next frame is due.
    pub fn wait(&self) {
        if !self.should_render() {
            std::thread::sleep(self.remaining());
        }
    }

    /// Call after each frame to update timing.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f64();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
    }

    /// Current FPS (smoothed).
    pub fn fps(&self) -> f64 {
        self.smoothed_fps
    }
}
