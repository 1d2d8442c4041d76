//! Software renderer for the perihelion scenario.
//!
//! Produces one RGB image per frame, which is what the dashboard returns
//! for every interaction. The drawing is plain: background
//! fill, the Newtonian trail as single pixels, the relativistic trail as a
//! 2px polyline, and gradient discs for the planets.

use glam::DVec2;
use image::{Rgb, RgbImage};
use std::path::Path;

use crate::controls::DisplayToggles;
use crate::error::RenderError;
use crate::scenario::PerihelionSim;

pub const BACKGROUND: [u8; 3] = [5, 5, 15];
pub const NEWTON_TRAIL: [u8; 3] = [255, 255, 255];
pub const RELATIVISTIC_TRAIL: [u8; 3] = [60, 255, 150];
const SUN: [u8; 3] = [255, 220, 80];

/// Solid-black frame returned right after a reset.
pub fn black_frame(width: u32, height: u32) -> RgbImage {
    RgbImage::new(width, height)
}

/// Draw the current state of `sim`, honouring `toggles`.
///
/// Scene coordinates are shifted by `offset` before drawing, so a
/// simulation centred on the origin can be placed mid-image.
pub fn render_orbit_frame(
    sim: &PerihelionSim,
    toggles: DisplayToggles,
    width: u32,
    height: u32,
    offset: DVec2,
) -> RgbImage {
    let mut canvas = Canvas::new(width, height, BACKGROUND);
    let state = sim.state();

    canvas.gradient_disc(sim.config().focus + offset, 14, SUN, [120, 60, 10]);

    if toggles.newton_curve {
        for p in state.trail_newton.iter() {
            canvas.put(p + offset, NEWTON_TRAIL);
        }
    }

    if toggles.relativistic_curve && state.trail_relativistic.len() > 2 {
        let mut points = state.trail_relativistic.iter().map(|p| p + offset);
        if let Some(mut prev) = points.next() {
            for p in points {
                canvas.thick_line(prev, p, RELATIVISTIC_TRAIL);
                prev = p;
            }
        }
    }

    let planets = sim.positions();
    if toggles.newton_marker {
        canvas.gradient_disc(planets.newton + offset, 6, [180, 180, 180], [80, 80, 80]);
    }
    if toggles.relativistic_marker {
        canvas.gradient_disc(planets.relativistic + offset, 8, [255, 200, 120], [200, 100, 50]);
    }

    canvas.into_image()
}

/// Write a frame as PNG.
pub fn save_png(frame: &RgbImage, path: impl AsRef<Path>) -> Result<(), RenderError> {
    frame.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Minimal clipped drawing surface.
struct Canvas {
    img: RgbImage,
}

impl Canvas {
    fn new(width: u32, height: u32, fill: [u8; 3]) -> Self {
        Self {
            img: RgbImage::from_pixel(width, height, Rgb(fill)),
        }
    }

    fn into_image(self) -> RgbImage {
        self.img
    }

    fn put_px(&mut self, x: i64, y: i64, color: [u8; 3]) {
        if x >= 0 && y >= 0 && (x as u32) < self.img.width() && (y as u32) < self.img.height() {
            self.img.put_pixel(x as u32, y as u32, Rgb(color));
        }
    }

    fn put(&mut self, p: DVec2, color: [u8; 3]) {
        self.put_px(p.x.round() as i64, p.y.round() as i64, color);
    }

    /// Bresenham line, doubled vertically and horizontally for a 2px stroke.
    fn thick_line(&mut self, a: DVec2, b: DVec2, color: [u8; 3]) {
        let (mut x0, mut y0) = (a.x.round() as i64, a.y.round() as i64);
        let (x1, y1) = (b.x.round() as i64, b.y.round() as i64);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put_px(x0, y0, color);
            self.put_px(x0 + 1, y0, color);
            self.put_px(x0, y0 + 1, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Filled disc shading from `inner` at the centre to `outer` at the rim.
    fn gradient_disc(&mut self, center: DVec2, radius: u32, inner: [u8; 3], outer: [u8; 3]) {
        let (cx, cy) = (center.x.round() as i64, center.y.round() as i64);
        let r = radius as i64;
        for dy in -r..=r {
            for dx in -r..=r {
                let d2 = dx * dx + dy * dy;
                if d2 > r * r {
                    continue;
                }
                let t = (d2 as f64).sqrt() / radius.max(1) as f64;
                self.put_px(cx + dx, cy + dy, lerp_rgb(inner, outer, t));
            }
        }
    }
}

fn lerp_rgb(a: [u8; 3], b: [u8; 3], t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f64 * (1.0 - t) + y as f64 * t).round() as u8;
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrbitConfig;
    use crate::controls::Toggle;

    fn running_sim(ticks: usize) -> PerihelionSim {
        let mut sim = PerihelionSim::new(OrbitConfig::dashboard());
        sim.start();
        for _ in 0..ticks {
            sim.tick();
        }
        sim
    }

    #[test]
    fn test_black_frame() {
        let frame = black_frame(16, 8);
        assert_eq!(frame.dimensions(), (16, 8));
        assert!(frame.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn test_newton_trail_is_drawn() {
        let sim = running_sim(40);
        let frame = render_orbit_frame(&sim, DisplayToggles::default(), 800, 800, DVec2::ZERO);
        let oldest = sim.state().trail_newton.iter().next().unwrap();
        let px = frame.get_pixel(oldest.x.round() as u32, oldest.y.round() as u32);
        assert_ne!(px.0, BACKGROUND);
    }

    #[test]
    fn test_hidden_everything_leaves_background_and_sun() {
        let sim = running_sim(40);
        let mut toggles = DisplayToggles::default();
        for t in Toggle::ALL {
            toggles.set(t, false);
        }
        let frame = render_orbit_frame(&sim, toggles, 800, 800, DVec2::ZERO);
        let focus = sim.config().focus;
        let lit = frame.pixels().filter(|p| p.0 != BACKGROUND).count();
        // Only the sun disc remains
        assert!(lit > 0 && lit < 1000, "{lit}");
        assert_ne!(frame.get_pixel(focus.x as u32, focus.y as u32).0, BACKGROUND);
    }

    #[test]
    fn test_offscreen_points_are_clipped() {
        let mut config = OrbitConfig::dashboard();
        config.focus = DVec2::new(-5000.0, -5000.0);
        let mut sim = PerihelionSim::new(config);
        sim.start();
        for _ in 0..10 {
            sim.tick();
        }
        let frame = render_orbit_frame(&sim, DisplayToggles::default(), 64, 64, DVec2::ZERO);
        assert!(frame.pixels().all(|p| p.0 == BACKGROUND));
    }

    #[test]
    fn test_offset_centres_desktop_orbit() {
        let mut sim = PerihelionSim::new(OrbitConfig::desktop());
        sim.tick();
        let mut toggles = DisplayToggles::default();
        toggles.set(Toggle::NewtonMarker, false);
        toggles.set(Toggle::RelativisticMarker, false);
        let frame = render_orbit_frame(&sim, toggles, 600, 600, DVec2::new(300.0, 300.0));
        let p = sim.state().trail_newton.latest().unwrap() + DVec2::new(300.0, 300.0);
        assert_eq!(frame.get_pixel(p.x.round() as u32, p.y.round() as u32).0, NEWTON_TRAIL);
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        save_png(&black_frame(4, 4), &path).unwrap();
        assert!(path.exists());
    }
}
