//! Time sources and per-frame delta tracking.

use std::time::Instant;

use tracing::warn;

/// Longest frame delta the simulation accepts, in seconds. Longer stalls
/// (a dragged window, a debugger pause) are clamped so the camera does not
/// leap and the orbits do not skip ahead.
pub const MAX_FRAME_DT: f64 = 0.25;

/// Monotonic seconds since some fixed start.
pub trait TimeSource {
    /// Current time in seconds. Never decreases.
    fn now(&mut self) -> f64;
}

/// Wall-clock time since construction.
#[derive(Debug, Clone)]
pub struct WallClock {
    start: Instant,
}

impl WallClock {
    /// Start counting from now.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for WallClock {
    fn now(&mut self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock for tests and headless runs.
///
/// With a non-zero step, every [`now`](TimeSource::now) call advances by
/// that step before reading, so each frame sees exactly one step.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: f64,
    step: f64,
}

impl ManualClock {
    /// Frozen at zero until [`advance`](Self::advance)d.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances by `step` seconds on every read.
    pub fn fixed_step(step: f64) -> Self {
        Self {
            now: 0.0,
            step: step.max(0.0),
        }
    }

    /// Move forward by `dt` seconds. Negative or non-finite values are ignored.
    pub fn advance(&mut self, dt: f64) {
        if dt.is_finite() && dt > 0.0 {
            self.now += dt;
        }
    }

    /// Current time without stepping.
    pub fn peek(&self) -> f64 {
        self.now
    }
}

impl TimeSource for ManualClock {
    fn now(&mut self) -> f64 {
        self.now += self.step;
        self.now
    }
}

/// One frame's timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame, clamped to [`MAX_FRAME_DT`].
    pub dt: f64,
    /// Accumulated simulation time; drives the orbits.
    pub sim_time: f64,
    /// Zero-based frame number.
    pub frame: u64,
}

/// Turns successive clock readings into clamped frame deltas.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: f64,
    sim_time: f64,
    frames: u64,
}

impl FrameClock {
    /// Nothing elapsed yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reading and return the frame's timing.
    pub fn tick(&mut self, now: f64) -> FrameTime {
        let raw = now - self.last;
        let mut dt = if raw.is_finite() { raw.max(0.0) } else { 0.0 };
        if now.is_finite() {
            self.last = now;
        }

        if dt > MAX_FRAME_DT {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                dt * 1000.0,
                MAX_FRAME_DT * 1000.0
            );
            dt = MAX_FRAME_DT;
        }

        self.sim_time += dt;
        let time = FrameTime {
            dt,
            sim_time: self.sim_time,
            frame: self.frames,
        };
        self.frames += 1;
        time
    }

    /// Simulation seconds so far.
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Frames ticked so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f64 = 1.0 / 60.0;

    #[test]
    fn test_fixed_step_clock() {
        let mut clock = ManualClock::fixed_step(STEP);
        assert!((clock.now() - STEP).abs() < 1e-12);
        assert!((clock.now() - 2.0 * STEP).abs() < 1e-12);
        assert!((clock.peek() - 2.0 * STEP).abs() < 1e-12);
    }

    #[test]
    fn test_manual_clock_never_goes_back() {
        let mut clock = ManualClock::new();
        clock.advance(1.0);
        clock.advance(-5.0);
        clock.advance(f64::NAN);
        assert_eq!(clock.now(), 1.0);
    }

    #[test]
    fn test_wall_clock_monotonic() {
        let mut clock = WallClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a && a >= 0.0);
    }

    #[test]
    fn test_deltas_accumulate() {
        let mut fc = FrameClock::new();
        let mut clock = ManualClock::fixed_step(STEP);
        for _ in 0..60 {
            let t = fc.tick(clock.now());
            assert!((t.dt - STEP).abs() < 1e-9);
        }
        assert!((fc.sim_time() - 1.0).abs() < 1e-9);
        assert_eq!(fc.frame_count(), 60);
    }

    #[test]
    fn test_long_frame_clamped() {
        let mut fc = FrameClock::new();
        let t = fc.tick(3.0);
        assert_eq!(t.dt, MAX_FRAME_DT);
        assert_eq!(t.sim_time, MAX_FRAME_DT);
        let t = fc.tick(3.1);
        assert!((t.dt - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_backwards_or_bad_reading_is_zero_dt() {
        let mut fc = FrameClock::new();
        fc.tick(1.0);
        assert_eq!(fc.tick(0.5).dt, 0.0);
        assert_eq!(fc.tick(f64::NAN).dt, 0.0);
        assert_eq!(fc.tick(0.6).frame, 3);
    }
}
