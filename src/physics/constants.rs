//! Physical constants and unit helpers.

/// Newtonian gravitational constant, m³·kg⁻¹·s⁻².
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Mass of the Earth, kg.
pub const EARTH_MASS_KG: f64 = 5.972e24;

/// Mean radius of the Earth, km.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

#[inline]
pub fn earth_masses_to_kg(m: f64) -> f64 {
    m * EARTH_MASS_KG
}

#[inline]
pub fn km_to_m(km: f64) -> f64 {
    km * 1000.0
}
