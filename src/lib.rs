//! # relviz - interactive relativity visualizations
//!
//! Two classroom demonstrations of general relativity, built on the same
//! small engine:
//!
//! - **Perihelion precession**: a Newtonian ellipse beside one whose major
//!   axis slowly rotates, with trails showing the drift.
//! - **GPS clock drift**: how planet mass, planet size and orbit radius
//!   change the gravitational and velocity time dilation of a satellite
//!   clock.
//!
//! The physics is closed-form and evaluated once per frame. Precession is
//! exaggerated for visibility; nothing here is meant for scientific use.
//!
//! ## Quick Start
//!
//! ```ignore
//! use relviz::prelude::*;
//!
//! let mut sim = PerihelionSim::new(OrbitConfig::desktop());
//! let mut time = Time::new();
//!
//! loop {
//!     for _ in 0..time.update() {
//!         sim.tick();
//!     }
//!     draw(sim.state(), sim.toggles());
//! }
//! ```
//!
//! ## Layout
//!
//! | Piece | Module |
//! |-------|--------|
//! | Formulas | [`physics`] |
//! | Bounded trails | [`trail`] |
//! | Start/Stop/Reset state | [`animation`] |
//! | Sliders, toggles, input events | [`controls`], [`input`] |
//! | Frame steppers | [`scenario`] |
//! | Presets and JSON config | [`config`] |
//! | Dashboard sessions and raster frames | [`dashboard`], [`raster`] |

pub mod animation;
pub mod assets;
pub mod config;
pub mod controls;
pub mod dashboard;
pub mod error;
pub mod input;
pub mod physics;
pub mod raster;
pub mod scenario;
pub mod starfield;
pub mod time;
pub mod trail;

pub use glam::DVec2;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use relviz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animation::{AnimationState, Status};
    pub use crate::config::{GpsConfig, OrbitConfig, StepPolicy, VizConfig, PRESETS};
    pub use crate::controls::{DisplayToggles, Slider, SliderSpec, Toggle, Track};
    pub use crate::dashboard::{
        DashboardAction, DashboardRequest, DashboardResponse, DashboardScript, Session, SessionId, SessionStore,
    };
    pub use crate::input::{Command, InputEvent, KeyCode, Response};
    pub use crate::physics::{time_dilation, DilationReport, DilationUnit};
    pub use crate::scenario::{GpsSim, GpsSlider, OrbitSample, PerihelionSim, Scenario};
    pub use crate::starfield::StarField;
    pub use crate::time::Time;
    pub use crate::trail::Trail;
    pub use crate::DVec2;
}
