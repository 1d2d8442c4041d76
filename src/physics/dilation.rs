//! Clock drift of a satellite relative to a clock on the planet surface.
//!
//! Two additive terms, both fractional rates (seconds per second):
//!
//! - gravitational: `GM/c² · (1/Rp − 1/r)`, positive above the surface
//!   because the satellite sits higher in the potential well
//! - velocity: `−v²/(2c²)` with `v = sqrt(GM/r)`, always negative
//!
//! [`time_dilation`] scales both to a per-day figure in the requested unit.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::{
    earth_masses_to_kg, km_to_m, GRAVITATIONAL_CONSTANT, SECONDS_PER_DAY, SPEED_OF_LIGHT,
};

/// Unit a [`DilationReport`] is expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DilationUnit {
    #[default]
    MicrosPerDay,
    NanosPerDay,
}

impl DilationUnit {
    /// Multiplier from seconds per day to this unit.
    pub fn scale(self) -> f64 {
        match self {
            DilationUnit::MicrosPerDay => 1e6,
            DilationUnit::NanosPerDay => 1e9,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            DilationUnit::MicrosPerDay => "µs/day",
            DilationUnit::NanosPerDay => "ns/day",
        }
    }
}

/// Both dilation terms and their sum, all in `unit`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DilationReport {
    pub gravitational: f64,
    pub velocity: f64,
    pub total: f64,
    pub unit: DilationUnit,
}

impl fmt::Display for DilationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let u = self.unit.suffix();
        write!(
            f,
            "{:+.3} {u} (grav {:+.3} {u}, vel {:+.3} {u})",
            self.total, self.gravitational, self.velocity
        )
    }
}

/// Circular orbital speed in m/s around a body of `mass_kg` at `r_m` metres.
#[inline]
pub fn circular_speed(mass_kg: f64, r_m: f64) -> f64 {
    (GRAVITATIONAL_CONSTANT * mass_kg / r_m).sqrt()
}

/// Fractional rate gained by the satellite clock from its height.
#[inline]
pub fn gravitational_shift(mass_kg: f64, planet_radius_m: f64, r_m: f64) -> f64 {
    let gm_c2 = GRAVITATIONAL_CONSTANT * mass_kg / (SPEED_OF_LIGHT * SPEED_OF_LIGHT);
    gm_c2 * (1.0 / planet_radius_m - 1.0 / r_m)
}

/// Fractional rate lost by the satellite clock to its orbital motion.
#[inline]
pub fn velocity_shift(mass_kg: f64, r_m: f64) -> f64 {
    let v = circular_speed(mass_kg, r_m);
    -(v * v) / (2.0 * SPEED_OF_LIGHT * SPEED_OF_LIGHT)
}

/// Daily clock drift for a satellite on a circular orbit.
///
/// `orbit_radius_km` is measured from the planet centre and is expected to
/// exceed `planet_radius_km`; the GPS controls keep it that way.
pub fn time_dilation(
    mass_earths: f64,
    planet_radius_km: f64,
    orbit_radius_km: f64,
    unit: DilationUnit,
) -> DilationReport {
    let mass = earth_masses_to_kg(mass_earths);
    let rp = km_to_m(planet_radius_km);
    let r = km_to_m(orbit_radius_km);

    let per_day = SECONDS_PER_DAY * unit.scale();
    let gravitational = gravitational_shift(mass, rp, r) * per_day;
    let velocity = velocity_shift(mass, r) * per_day;

    DilationReport {
        gravitational,
        velocity,
        total: gravitational + velocity,
        unit,
    }
}
