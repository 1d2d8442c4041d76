//! Twinkling background stars.

use glam::DVec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub pos: DVec2,
    /// Base radius in pixels, 1 or 2.
    pub size: f64,
}

impl Star {
    /// Radius at animation `phase`: the star pulses between half and full
    /// size, never below one pixel.
    pub fn twinkle_radius(&self, phase: f64) -> f64 {
        let offset = 0.5 + 0.5 * ((self.pos.x * 12.0 + self.pos.y * 7.0 + phase) * 0.002).sin();
        (self.size * offset).floor().max(1.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    /// Scatter `count` stars over a `width` x `height` area. Small stars
    /// are twice as common as large ones.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, count: usize) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                pos: DVec2::new(rng.gen_range(0.0..=width), rng.gen_range(0.0..=height)),
                size: if rng.gen_range(0..3) == 2 { 2.0 } else { 1.0 },
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}
