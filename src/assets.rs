//! Decorative sprites (planet, satellite).
//!
//! A missing or broken image is never an error for the user: the sprite is
//! replaced by a generated disc and a warning is logged.

use image::{Rgba, RgbaImage};
use log::warn;
use std::path::Path;

use crate::error::AssetError;

/// Load an image file as RGBA.
pub fn load_image(path: impl AsRef<Path>) -> Result<RgbaImage, AssetError> {
    let bytes = std::fs::read(path)?;
    let img = image::load_from_memory(&bytes)?;
    Ok(img.to_rgba8())
}

/// Load a sprite, or fall back to a filled disc of `radius` in `color`.
pub fn load_sprite(path: impl AsRef<Path>, radius: u32, color: [u8; 3]) -> RgbaImage {
    let path = path.as_ref();
    match load_image(path) {
        Ok(img) => img,
        Err(e) => {
            warn!("sprite {} unavailable ({}), using placeholder", path.display(), e);
            placeholder(radius, color)
        }
    }
}

/// Opaque disc of `radius` on a transparent square.
pub fn placeholder(radius: u32, color: [u8; 3]) -> RgbaImage {
    let side = radius.max(1) * 2;
    let r = radius as f64;
    RgbaImage::from_fn(side, side, |x, y| {
        let dx = x as f64 + 0.5 - r;
        let dy = y as f64 + 0.5 - r;
        if dx * dx + dy * dy <= r * r {
            Rgba([color[0], color[1], color[2], 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}
