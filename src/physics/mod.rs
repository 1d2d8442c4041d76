//! Closed-form physics evaluated once per frame.
//!
//! Nothing here holds state. [`orbit`] covers the perihelion scenario and
//! [`dilation`] the GPS clock drift.

pub mod constants;
pub mod dilation;
pub mod orbit;

pub use dilation::{time_dilation, DilationReport, DilationUnit};
pub use orbit::{orbit_point, orbit_radius, precession_increment};
