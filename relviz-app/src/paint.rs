//! Drawing helpers on top of [`egui::Painter`].

use eframe::egui::{self, Color32, Pos2, Rect, Stroke};
use glam::DVec2;
use image::RgbaImage;
use relviz::starfield::StarField;
use relviz::trail::Trail;

pub const NEWTON_TRAIL: Color32 = Color32::from_rgb(255, 255, 255);
pub const RELATIVISTIC_TRAIL: Color32 = Color32::from_rgb(60, 255, 150);
pub const ORBIT_GUIDE: Color32 = Color32::from_rgb(70, 90, 130);

/// Maps simulation coordinates onto the screen, placing `center` at `origin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneTransform {
    pub origin: Pos2,
    pub center: DVec2,
}

impl SceneTransform {
    pub fn new(origin: Pos2, center: DVec2) -> Self {
        Self { origin, center }
    }

    pub fn to_screen(&self, p: DVec2) -> Pos2 {
        let d = p - self.center;
        self.origin + egui::vec2(d.x as f32, d.y as f32)
    }
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

/// Deep-space backdrop: a radial gradient from `rect`'s centre outwards.
pub fn paint_background(painter: &egui::Painter, rect: Rect) {
    const RINGS: usize = 32;
    let outer = Color32::from_rgb(2, 2, 8);
    let inner = Color32::from_rgb(14, 16, 36);
    painter.rect_filled(rect, 0.0, outer);
    let max_r = rect.size().length() * 0.5;
    for i in 0..RINGS {
        let t = i as f32 / RINGS as f32;
        let r = max_r * (1.0 - t);
        painter.circle_filled(rect.center(), r, lerp_color(outer, inner, t));
    }
}

/// Stars inside `rect`, pulsing with `phase`.
pub fn paint_stars(painter: &egui::Painter, rect: Rect, stars: &StarField, phase: f64) {
    for star in stars.stars() {
        let pos = rect.min + egui::vec2(star.pos.x as f32, star.pos.y as f32);
        if rect.contains(pos) {
            painter.circle_filled(pos, star.twinkle_radius(phase) as f32, Color32::from_gray(220));
        }
    }
}

/// Disc shaded from `inner` at the centre to `outer` at the rim.
pub fn paint_gradient_disc(painter: &egui::Painter, center: Pos2, radius: f32, inner: Color32, outer: Color32) {
    let rings = (radius.ceil() as usize).clamp(1, 24);
    for i in 0..rings {
        let t = i as f32 / rings as f32;
        painter.circle_filled(center, radius * (1.0 - t), lerp_color(outer, inner, t));
    }
}

/// Sun at `center` with a soft halo.
pub fn paint_sun(painter: &egui::Painter, center: Pos2) {
    for i in 0..8 {
        let r = 40.0 - i as f32 * 3.0;
        let alpha = 6 + i * 4;
        painter.circle_filled(center, r, Color32::from_rgba_unmultiplied(255, 180, 60, alpha));
    }
    paint_gradient_disc(
        painter,
        center,
        14.0,
        Color32::from_rgb(255, 240, 160),
        Color32::from_rgb(230, 120, 20),
    );
}

/// Recorded positions spaced out enough to read as dots.
const DOT_SPACING: usize = 3;
const DOT_RADIUS: f32 = 2.0;

/// A dot on every third recorded position.
pub fn paint_dotted_trail(painter: &egui::Painter, view: SceneTransform, trail: &Trail, color: Color32) {
    for p in dotted_points(trail) {
        painter.circle_filled(view.to_screen(p), DOT_RADIUS, color);
    }
}

/// Positions of a dotted trail, oldest first.
pub fn dotted_points(trail: &Trail) -> impl Iterator<Item = DVec2> + '_ {
    trail.iter().step_by(DOT_SPACING)
}

/// Connected polyline through the recorded positions. Needs more than two
/// points to be drawn at all.
pub fn paint_polyline_trail(painter: &egui::Painter, view: SceneTransform, trail: &Trail, color: Color32) {
    if trail.len() <= 2 {
        return;
    }
    let points: Vec<Pos2> = trail.iter().map(|p| view.to_screen(p)).collect();
    painter.add(egui::Shape::line(points, Stroke::new(2.0, color)));
}

/// Upload an RGBA image as an egui texture.
pub fn load_texture(ctx: &egui::Context, name: &str, img: &RgbaImage) -> egui::TextureHandle {
    let size = [img.width() as usize, img.height() as usize];
    let color = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
    ctx.load_texture(name, color, egui::TextureOptions::LINEAR)
}

/// Draw `texture` stretched over a `radius`-sized square around `center`.
pub fn paint_sprite(painter: &egui::Painter, texture: &egui::TextureHandle, center: Pos2, radius: f32) {
    let rect = Rect::from_center_size(center, egui::vec2(radius * 2.0, radius * 2.0));
    let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    painter.image(texture.id(), rect, uv, Color32::WHITE);
}
