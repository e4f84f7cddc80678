//! Tick scheduling
//!
//! Components that advance over time implement [`Tickable`]; the
//! [`TickScheduler`] dispatches the capability rather than any base-class
//! hierarchy. Simulation runs at a fixed rate with interpolation between
//! steps, and wall-clock time advances once per frame.

use crate::foundation::time::FixedStep;

/// Capability for time-driven components
pub trait Tickable {
    /// Interpolate visual state between fixed steps
    ///
    /// `delta` is the fraction of the next step already elapsed, in
    /// `[0, 1)`.
    fn interpolate_tick(&mut self, delta: f32);

    /// Advance one fixed-rate simulation step
    fn process_tick(&mut self);

    /// Advance wall-clock driven state by `time_delta` seconds
    fn advance_time(&mut self, time_delta: f32);
}

/// Fixed-rate tick dispatcher
///
/// Per frame: every tickable sees `advance_time` once, then
/// `process_tick` for each elapsed fixed step, then `interpolate_tick`
/// with the remainder fraction.
pub struct TickScheduler {
    step: FixedStep,
}

impl TickScheduler {
    /// Create a scheduler ticking at `rate_hz` steps per second
    pub fn new(rate_hz: u32) -> Self {
        Self {
            step: FixedStep::new(rate_hz),
        }
    }

    /// Run one frame's worth of ticks over `tickables`
    pub fn advance(&mut self, delta: f32, tickables: &mut [&mut dyn Tickable]) {
        for tickable in tickables.iter_mut() {
            tickable.advance_time(delta);
        }

        let steps = self.step.advance(delta);
        for _ in 0..steps {
            for tickable in tickables.iter_mut() {
                tickable.process_tick();
            }
        }

        let alpha = self.step.alpha();
        for tickable in tickables.iter_mut() {
            tickable.interpolate_tick(alpha);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        ticks: u32,
        time: f32,
        last_alpha: f32,
    }

    impl Tickable for Counter {
        fn interpolate_tick(&mut self, delta: f32) {
            self.last_alpha = delta;
        }

        fn process_tick(&mut self) {
            self.ticks += 1;
        }

        fn advance_time(&mut self, time_delta: f32) {
            self.time += time_delta;
        }
    }

    #[test]
    fn test_fixed_rate_tick_accounting() {
        let mut scheduler = TickScheduler::new(10); // 100 ms steps
        let mut counter = Counter::default();

        scheduler.advance(0.25, &mut [&mut counter]);

        assert_eq!(counter.ticks, 2);
        assert!((counter.time - 0.25).abs() < 1e-6);
        assert!((counter.last_alpha - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_short_frame_produces_no_steps() {
        let mut scheduler = TickScheduler::new(10);
        let mut counter = Counter::default();

        scheduler.advance(0.05, &mut [&mut counter]);

        assert_eq!(counter.ticks, 0);
        assert!((counter.time - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_steps_accumulate_across_frames() {
        let mut scheduler = TickScheduler::new(10);
        let mut counter = Counter::default();

        scheduler.advance(0.06, &mut [&mut counter]);
        scheduler.advance(0.06, &mut [&mut counter]);

        assert_eq!(counter.ticks, 1);
    }
}
