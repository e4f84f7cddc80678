//! Frame timing and fixed-step accounting

use std::time::{Duration, Instant};

/// High-precision frame timer
///
/// Tracks the delta between frames and the total elapsed time. Call
/// [`Timer::tick`] once per frame.
pub struct Timer {
    previous: Instant,
    delta: Duration,
    elapsed: Duration,
    frames: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer starting now
    pub fn new() -> Self {
        Self {
            previous: Instant::now(),
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frames: 0,
        }
    }

    /// Advance the timer by one frame and return the frame delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta = now.duration_since(self.previous);
        self.elapsed += self.delta;
        self.previous = now;
        self.frames += 1;
        self.delta.as_secs_f32()
    }

    /// Time since the last frame in seconds
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Total elapsed time in seconds since timer creation
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Number of frames ticked so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Number of fixed steps a single frame may consume before the backlog is
/// dropped. Keeps a long stall from spiraling into a catch-up storm.
const MAX_STEPS_PER_FRAME: u32 = 8;

/// Fixed-step accumulator for simulation ticks
///
/// Converts variable frame deltas into a whole number of fixed-rate steps
/// plus an interpolation fraction for the remainder.
#[derive(Debug, Clone)]
pub struct FixedStep {
    interval: f32,
    accumulator: f32,
}

impl FixedStep {
    /// Create an accumulator stepping at `rate_hz` steps per second
    ///
    /// A zero rate is a configuration error caught by
    /// [`crate::config::RenderConfig::validate`]; here it is clamped to one
    /// step per second rather than dividing by zero.
    pub fn new(rate_hz: u32) -> Self {
        Self {
            interval: 1.0 / rate_hz.max(1) as f32,
            accumulator: 0.0,
        }
    }

    /// Accumulate a frame delta and return how many fixed steps elapsed
    ///
    /// At most eight steps are returned per call; any remaining backlog
    /// is discarded.
    pub fn advance(&mut self, delta: f32) -> u32 {
        self.accumulator += delta;
        let mut steps = 0;
        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            steps += 1;
            if steps == MAX_STEPS_PER_FRAME {
                self.accumulator = 0.0;
                break;
            }
        }
        steps
    }

    /// Fraction of the next step already accumulated, in `[0, 1)`
    ///
    /// Used to interpolate state between fixed steps.
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.interval
    }

    /// The fixed step interval in seconds
    pub fn interval(&self) -> f32 {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_step_accumulates_whole_steps() {
        let mut step = FixedStep::new(20); // 50 ms interval

        assert_eq!(step.advance(0.049), 0);
        assert_eq!(step.advance(0.002), 1);
        assert_eq!(step.advance(0.150), 3);
    }

    #[test]
    fn test_fixed_step_alpha_fraction() {
        let mut step = FixedStep::new(10); // 100 ms interval
        step.advance(0.050);
        assert_relative_eq!(step.alpha(), 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_fixed_step_drops_backlog_after_stall() {
        let mut step = FixedStep::new(100);
        // A 5 second stall would be 500 steps; the clamp caps it
        assert_eq!(step.advance(5.0), MAX_STEPS_PER_FRAME);
        assert_eq!(step.advance(0.0), 0);
        assert_relative_eq!(step.alpha(), 0.0);
    }
}
