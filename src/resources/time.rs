use std::time::Instant;

/// Fixed-timestep accumulator decoupling the physics rate from a variable
/// frame rate.
///
/// A driving loop calls [`StepClock::tick`] once per frame and then invokes
/// the model's `step()` for each interval returned by [`StepClock::drain`].
/// While paused, elapsed time keeps accumulating but `drain` yields nothing;
/// on resume the backlog drains at most `max_substeps` intervals per frame,
/// so a long stall is caught up over several frames rather than compressed
/// into one.
pub struct StepClock {
    last_update: Instant,
    accumulator: f64,
    time_step: f64,
    max_substeps: u32,
    paused: bool,
}

impl StepClock {
    pub fn new(time_step: f64, max_substeps: u32) -> Self {
        Self {
            last_update: Instant::now(),
            accumulator: 0.0,
            time_step,
            max_substeps,
            paused: false,
        }
    }

    /// Measure wall-clock time since the previous tick and add it to the
    /// accumulator. Returns the frame time in seconds.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let frame_time = (now - self.last_update).as_secs_f64();
        self.last_update = now;
        self.accumulate(frame_time);
        frame_time
    }

    /// Add an externally measured frame time to the accumulator
    pub fn accumulate(&mut self, seconds: f64) {
        self.accumulator += seconds.max(0.0);
    }

    /// Number of whole fixed steps to run for the accumulated time, capped
    /// at `max_substeps`. Returns 0 while paused.
    pub fn drain(&mut self) -> u32 {
        if self.paused {
            return 0;
        }

        let mut steps = 0;
        while self.accumulator >= self.time_step && steps < self.max_substeps {
            self.accumulator -= self.time_step;
            steps += 1;
        }
        steps
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn reset(&mut self) {
        self.last_update = Instant::now();
        self.accumulator = 0.0;
        self.paused = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drains_whole_multiples() {
        let mut clock = StepClock::new(0.01, 8);

        clock.accumulate(0.035);
        assert_eq!(clock.drain(), 3);

        // The 0.005 remainder carries over to the next frame.
        clock.accumulate(0.005);
        assert_eq!(clock.drain(), 1);
        assert_eq!(clock.drain(), 0);
    }

    #[test]
    fn test_pause_keeps_accumulating() {
        let mut clock = StepClock::new(0.01, 4);

        clock.pause();
        clock.accumulate(0.05);
        assert_eq!(clock.drain(), 0);

        // Resuming drains the backlog at the bounded catch-up rate.
        clock.resume();
        assert_eq!(clock.drain(), 4);
        assert_eq!(clock.drain(), 1);
        assert_eq!(clock.drain(), 0);
    }

    #[test]
    fn test_max_substeps_bounds_catch_up() {
        let mut clock = StepClock::new(0.01, 4);
        clock.accumulate(1.0);
        assert_eq!(clock.drain(), 4);
        assert_eq!(clock.drain(), 4);
    }

    #[test]
    fn test_tick_measures_elapsed_time() {
        let mut clock = StepClock::new(0.01, 4);
        let frame_time = clock.tick();
        assert!(frame_time >= 0.0);
    }

    #[test]
    fn test_reset_clears_backlog() {
        let mut clock = StepClock::new(0.01, 4);
        clock.accumulate(0.5);
        clock.pause();

        clock.reset();
        assert!(!clock.is_paused());
        assert_eq!(clock.drain(), 0);
    }
}
