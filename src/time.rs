//! Frame timing.
//!
//! The steppers advance by a fixed increment per tick, so the animation
//! speed would follow the display refresh rate if they were called once per
//! repaint. [`Time`] measures real frame times and hands out whole ticks at
//! a fixed rate instead.
//!
//! ```ignore
//! let mut time = Time::new();
//!
//! // In the frame callback:
//! for _ in 0..time.update() {
//!     sim.tick();
//! }
//! ```

use std::time::{Duration, Instant};

/// Default tick rate, matching the 60 FPS the animations were tuned for.
pub const TICK_RATE: f64 = 60.0;

/// Ticks handed out per frame at most, so a stalled window never
/// fast-forwards the animation.
const MAX_TICKS_PER_FRAME: u32 = 8;

/// Fixed-rate tick source with FPS tracking.
#[derive(Debug)]
pub struct Time {
    last_frame: Instant,
    /// Real time since last frame in seconds.
    delta_secs: f64,
    /// Unconsumed time in seconds.
    accumulator: f64,
    tick_interval: f64,
    tick_count: u64,
    frame_count: u64,
    fps: f64,
    fps_frame_count: u64,
    fps_update_time: Instant,
    fps_update_interval: Duration,
    paused: bool,
}

impl Time {
    pub fn new() -> Self {
        Self::with_rate(TICK_RATE)
    }

    /// Tick source producing `rate` ticks per second.
    pub fn with_rate(rate: f64) -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            delta_secs: 0.0,
            accumulator: 0.0,
            tick_interval: 1.0 / rate.max(f64::MIN_POSITIVE),
            tick_count: 0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
            paused: false,
        }
    }

    /// Measure the frame that just ended. Returns how many ticks to run.
    pub fn update(&mut self) -> u32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;

        self.frame_count += 1;
        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f64 / fps_elapsed.as_secs_f64();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        self.advance(delta)
    }

    /// Feed `delta` seconds of frame time. Returns how many ticks to run.
    pub fn advance(&mut self, delta: f64) -> u32 {
        if self.paused {
            self.delta_secs = 0.0;
            return 0;
        }

        self.delta_secs = delta.max(0.0);
        self.accumulator += self.delta_secs;

        let due = (self.accumulator / self.tick_interval).floor();
        let ticks = (due as u32).min(MAX_TICKS_PER_FRAME);
        if due as u32 > MAX_TICKS_PER_FRAME {
            // Drop the backlog
            self.accumulator = 0.0;
        } else {
            self.accumulator -= due * self.tick_interval;
        }

        self.tick_count += ticks as u64;
        ticks
    }

    /// Time since last frame in seconds.
    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta_secs
    }

    /// Total ticks handed out.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.tick_count
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn fps(&self) -> f64 {
        self.fps
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// While paused no ticks are produced and no backlog builds up.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.last_frame = Instant::now();
            self.accumulator = 0.0;
            self.paused = false;
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_time_new() {
        let time = Time::new();
        assert_eq!(time.frame(), 0);
        assert_eq!(time.ticks(), 0);
        assert!(!time.is_paused());
    }

    #[test]
    fn test_ticks_follow_real_time() {
        let mut time = Time::with_rate(60.0);
        let mut total = 0;
        // Two seconds of 144 Hz frames
        for _ in 0..288 {
            total += time.advance(1.0 / 144.0);
        }
        assert!((119..=120).contains(&total), "{total}");
        assert_eq!(time.ticks(), total as u64);
    }

    #[test]
    fn test_slow_frames_get_several_ticks() {
        let mut time = Time::with_rate(60.0);
        assert_eq!(time.advance(0.055), 3);
    }

    #[test]
    fn test_stall_is_capped() {
        let mut time = Time::with_rate(60.0);
        assert_eq!(time.advance(5.0), MAX_TICKS_PER_FRAME);
        // Backlog dropped
        assert_eq!(time.advance(0.0), 0);
    }

    #[test]
    fn test_pause() {
        let mut time = Time::with_rate(60.0);
        time.pause();
        assert_eq!(time.advance(1.0), 0);
        assert_eq!(time.delta(), 0.0);
        time.resume();
        assert_eq!(time.advance(0.04), 2);
    }

    #[test]
    fn test_update_counts_frames() {
        let mut time = Time::new();
        thread::sleep(Duration::from_millis(20));
        let ticks = time.update();
        assert!(ticks >= 1);
        assert_eq!(time.frame(), 1);
        assert!(time.delta() > 0.0);
    }
}
