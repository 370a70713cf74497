//! Frame timing for the orbital animation.
//!
//! The orbital transforms are a pure function of total elapsed time, so the
//! clock's job is simple: report elapsed seconds since startup and the delta
//! since the last frame for camera movement. Deltas are clamped so a stall
//! (window drag, debugger pause) doesn't teleport the camera.

use std::time::Instant;
use tracing::warn;

/// Maximum per-frame delta handed to the camera, in seconds.
pub const MAX_FRAME_TIME: f32 = 0.25;

/// Timing values for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Seconds since the clock started. Drives the orbital animator.
    pub elapsed: f32,
    /// Clamped seconds since the previous frame. Drives camera movement.
    pub dt: f32,
}

/// Wall-clock frame timer.
pub struct FrameClock {
    start: Instant,
    previous: Instant,
    frame_count: u64,
    stats_window_start: Instant,
    stats_window_frames: u32,
}

impl FrameClock {
    /// Creates a clock starting from the current instant.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            previous: now,
            frame_count: 0,
            stats_window_start: now,
            stats_window_frames: 0,
        }
    }

    /// Advance to the next frame and return its timing.
    pub fn tick(&mut self) -> FrameTiming {
        let now = Instant::now();
        let raw_dt = now.duration_since(self.previous).as_secs_f32();
        self.previous = now;
        self.frame_count += 1;
        self.stats_window_frames += 1;

        let dt = if raw_dt > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                raw_dt * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            MAX_FRAME_TIME
        } else {
            raw_dt
        };

        FrameTiming {
            elapsed: now.duration_since(self.start).as_secs_f32(),
            dt,
        }
    }

    /// Total frames ticked so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Returns the average FPS over the last stats window and resets it,
    /// or `None` if less than a second has passed since the last report.
    pub fn take_fps_report(&mut self) -> Option<f32> {
        let window = self.stats_window_start.elapsed().as_secs_f32();
        if window < 1.0 {
            return None;
        }
        let fps = self.stats_window_frames as f32 / window;
        self.stats_window_start = Instant::now();
        self.stats_window_frames = 0;
        Some(fps)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure clamping core, shared with tests.
fn clamp_dt(raw_dt: f32) -> f32 {
    raw_dt.min(MAX_FRAME_TIME)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A testable clock that accepts explicit frame times instead of
    /// measuring wall-clock time.
    struct TestableFrameClock {
        elapsed: f32,
    }

    impl TestableFrameClock {
        fn new() -> Self {
            Self { elapsed: 0.0 }
        }

        fn tick(&mut self, frame_time: f32) -> FrameTiming {
            self.elapsed += frame_time;
            FrameTiming {
                elapsed: self.elapsed,
                dt: clamp_dt(frame_time),
            }
        }
    }

    #[test]
    fn test_elapsed_accumulates_unclamped() {
        let mut clock = TestableFrameClock::new();
        clock.tick(0.016);
        clock.tick(2.0); // long stall
        let timing = clock.tick(0.016);
        // Elapsed time keeps the stall; only dt is clamped.
        assert!((timing.elapsed - 2.032).abs() < 1e-6);
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut clock = TestableFrameClock::new();
        let timing = clock.tick(1.0);
        assert_eq!(timing.dt, MAX_FRAME_TIME);
    }

    #[test]
    fn test_short_frame_passes_through() {
        let mut clock = TestableFrameClock::new();
        let timing = clock.tick(0.016);
        assert!((timing.dt - 0.016).abs() < 1e-7);
    }

    #[test]
    fn test_clamp_dt_boundary() {
        assert_eq!(clamp_dt(MAX_FRAME_TIME), MAX_FRAME_TIME);
        assert_eq!(clamp_dt(MAX_FRAME_TIME + 0.01), MAX_FRAME_TIME);
        assert!((clamp_dt(0.1) - 0.1).abs() < 1e-7);
    }

    #[test]
    fn test_new_clock_has_no_frames() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame_count(), 0);
    }

    #[test]
    fn test_fps_report_requires_full_window() {
        let mut clock = FrameClock::new();
        clock.tick();
        // Immediately after start, the one-second window hasn't elapsed.
        assert!(clock.take_fps_report().is_none());
    }
}
