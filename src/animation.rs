//! Mutable per-session animation state and its Start/Stop/Reset machine.
//!
//! ```text
//! Stopped --start--> Running
//! Running --stop---> Stopped
//! any -----reset---> Stopped, angles = 0, trails empty
//! ```
//!
//! Start and Stop never touch the angles or trails. Reset re-initializes in
//! place and leaves the simulation parameters alone.

use log::debug;

use crate::trail::Trail;

/// Whether the stepper is allowed to advance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Stopped,
    Running,
}

/// Accumulated phases and trail history for one orbit visualization.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    /// Orbital phase in radians. Grows without bound; trig handles the wrap.
    pub angle: f64,
    /// Rotation of the relativistic ellipse's major axis.
    pub precession_angle: f64,
    pub trail_newton: Trail,
    pub trail_relativistic: Trail,
    status: Status,
}

impl AnimationState {
    /// Fresh, stopped state with empty trails of `trail_capacity` points each.
    pub fn new(trail_capacity: usize) -> Self {
        Self {
            angle: 0.0,
            precession_angle: 0.0,
            trail_newton: Trail::new(trail_capacity),
            trail_relativistic: Trail::new(trail_capacity),
            status: Status::Stopped,
        }
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn start(&mut self) {
        if self.status != Status::Running {
            debug!("animation started at angle {:.3}", self.angle);
            self.status = Status::Running;
        }
    }

    pub fn stop(&mut self) {
        if self.status != Status::Stopped {
            debug!("animation stopped at angle {:.3}", self.angle);
            self.status = Status::Stopped;
        }
    }

    /// Flip between running and stopped.
    pub fn toggle_running(&mut self) {
        match self.status {
            Status::Running => self.stop(),
            Status::Stopped => self.start(),
        }
    }

    /// Stop, zero every phase and empty both trails.
    pub fn reset(&mut self) {
        debug!("animation reset");
        self.status = Status::Stopped;
        self.angle = 0.0;
        self.precession_angle = 0.0;
        self.clear_trails();
    }

    /// Empty both trails without touching phases or status.
    pub fn clear_trails(&mut self) {
        self.trail_newton.clear();
        self.trail_relativistic.clear();
    }
}
