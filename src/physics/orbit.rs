//! Kepler ellipse parametrization with an artificial apsidal rotation.
//!
//! The orbit is written in polar form around the focus `F`:
//!
//! ```text
//! r(θ, φ) = a·(1 − e²) / (1 + e·cos(θ − φ))
//! ```
//!
//! With `φ = 0` the major axis is fixed (Newtonian orbit). Feeding an
//! accumulated `φ` rotates the ellipse, which is how the relativistic curve
//! shows perihelion precession. The rotation rate is a visual knob, not the
//! general-relativistic shift.

use glam::DVec2;

/// Radial distance from the focus at orbital phase `theta` for an ellipse
/// whose periapsis sits at angle `phi`.
#[inline]
pub fn orbit_radius(a: f64, e: f64, theta: f64, phi: f64) -> f64 {
    a * (1.0 - e * e) / (1.0 + e * (theta - phi).cos())
}

/// Position on the orbit, relative to the scene origin.
#[inline]
pub fn orbit_point(focus: DVec2, a: f64, e: f64, theta: f64, phi: f64) -> DVec2 {
    let r = orbit_radius(a, e, theta, phi);
    focus + DVec2::new(r * theta.cos(), r * theta.sin())
}

/// Closest approach, reached at `theta == phi`.
#[inline]
pub fn perihelion_distance(a: f64, e: f64) -> f64 {
    a * (1.0 - e)
}

/// Farthest point, reached at `theta == phi + π`.
#[inline]
pub fn aphelion_distance(a: f64, e: f64) -> f64 {
    a * (1.0 + e)
}

/// Angle added to the precession phase on every tick.
///
/// `factor` is the precision knob: `1.0` adds nothing, `0.0` gives the
/// fastest rotation. Values outside `[0, 1]` are clamped.
#[inline]
pub fn precession_increment(base_rate: f64, factor: f64, exaggeration: f64) -> f64 {
    base_rate * (1.0 - factor.clamp(0.0, 1.0)) * exaggeration
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_radius_extremes() {
        for &(a, e) in &[(200.0, 0.3), (250.0, 0.2), (1.0, 0.0), (10.0, 0.95)] {
            assert!((orbit_radius(a, e, 0.0, 0.0) - perihelion_distance(a, e)).abs() < EPS);
            assert!((orbit_radius(a, e, PI, 0.0) - aphelion_distance(a, e)).abs() < EPS);
        }
    }

    #[test]
    fn test_radius_is_periodic() {
        let (a, e) = (200.0, 0.3);
        for i in 0..64 {
            let theta = i as f64 * 0.37 - 5.0;
            let r0 = orbit_radius(a, e, theta, 0.0);
            let r1 = orbit_radius(a, e, theta + TAU, 0.0);
            let r2 = orbit_radius(a, e, theta - 3.0 * TAU, 0.0);
            assert!((r0 - r1).abs() < 1e-7);
            assert!((r0 - r2).abs() < 1e-7);
        }
    }

    #[test]
    fn test_radius_stays_between_apsides() {
        let (a, e) = (250.0, 0.2);
        for i in 0..360 {
            let r = orbit_radius(a, e, (i as f64).to_radians(), 0.0);
            assert!(r >= perihelion_distance(a, e) - EPS);
            assert!(r <= aphelion_distance(a, e) + EPS);
        }
    }

    #[test]
    fn test_rotated_periapsis_follows_phi() {
        let (a, e) = (200.0, 0.3);
        let phi = 1.2;
        assert!((orbit_radius(a, e, phi, phi) - perihelion_distance(a, e)).abs() < EPS);
        assert!((orbit_radius(a, e, phi + PI, phi) - aphelion_distance(a, e)).abs() < EPS);
    }

    #[test]
    fn test_orbit_point_offsets_from_focus() {
        let focus = DVec2::new(450.0, 350.0);
        let p = orbit_point(focus, 200.0, 0.3, 0.0, 0.0);
        assert!((p.x - (450.0 + 140.0)).abs() < EPS);
        assert!((p.y - 350.0).abs() < EPS);

        let q = orbit_point(focus, 200.0, 0.0, PI / 2.0, 0.0);
        assert!((q.x - 450.0).abs() < 1e-9);
        assert!((q.y - 550.0).abs() < 1e-9);
    }

    #[test]
    fn test_precession_increment_bounds() {
        assert_eq!(precession_increment(0.0007, 1.0, 25.0), 0.0);
        assert!((precession_increment(0.0007, 0.0, 25.0) - 0.0175).abs() < EPS);
        assert!((precession_increment(0.0007, 0.5, 25.0) - 0.00875).abs() < EPS);
        // Out-of-range knobs clamp instead of reversing the rotation
        assert_eq!(precession_increment(0.0007, 1.5, 25.0), 0.0);
        assert_eq!(
            precession_increment(0.0007, -1.0, 25.0),
            precession_increment(0.0007, 0.0, 25.0)
        );
    }
}
