//! Controls, readout and scene for the GPS scenario.

use eframe::egui::{self, Color32, Stroke};
use relviz::physics::constants::EARTH_RADIUS_KM;
use relviz::scenario::GpsSim;
use relviz::starfield::StarField;

use super::render_slider;
use crate::paint::{paint_background, paint_sprite, paint_stars, ORBIT_GUIDE};

/// Planet and satellite images, uploaded once at start-up.
pub struct GpsSprites {
    pub planet: egui::TextureHandle,
    pub satellite: egui::TextureHandle,
}

const SATELLITE_RADIUS: f32 = 14.0;

fn signed(value: f64, suffix: &str) -> String {
    format!("{value:+.2} {suffix}")
}

pub fn render_gps_panel(ui: &mut egui::Ui, sim: &mut GpsSim) {
    ui.heading("Planet");

    let rp = sim.controls.planet_radius.value();
    render_slider(
        ui,
        &mut sim.controls.planet_radius,
        &format!("{rp:.0} km ({:.2} R⊕)", rp / EARTH_RADIUS_KM),
    );
    let mass = sim.controls.mass.value();
    render_slider(ui, &mut sim.controls.mass, &format!("{mass:.1} M⊕"));

    ui.add_space(8.0);
    ui.separator();
    ui.heading("Satellite");

    let r = sim.controls.orbit_radius.value();
    render_slider(
        ui,
        &mut sim.controls.orbit_radius,
        &format!("{r:.0} km ({:.1} R⊕)", r / EARTH_RADIUS_KM),
    );
    let speed = sim.controls.speed.value();
    render_slider(ui, &mut sim.controls.speed, &format!("{speed:.1}x"));

    ui.add_space(8.0);
    ui.separator();
    ui.heading("Clock drift");

    let readout = sim.readout();
    let d = readout.dilation;
    let suffix = d.unit.suffix();
    egui::Grid::new("gps_readout").num_columns(2).show(ui, |ui| {
        ui.label("Altitude");
        ui.label(format!("{:.0} km", readout.altitude_km));
        ui.end_row();
        ui.label("Gravitational");
        ui.label(egui::RichText::new(signed(d.gravitational, suffix)).color(Color32::LIGHT_GREEN));
        ui.end_row();
        ui.label("Velocity");
        ui.label(egui::RichText::new(signed(d.velocity, suffix)).color(Color32::LIGHT_RED));
        ui.end_row();
        ui.label("Total");
        ui.label(egui::RichText::new(signed(d.total, suffix)).strong());
        ui.end_row();
    });

    ui.add_space(4.0);
    ui.label(
        egui::RichText::new("Positive: the satellite clock runs fast compared to one on the surface.")
            .small()
            .weak(),
    );
    ui.add_space(8.0);
    ui.label(egui::RichText::new("↑↓ speed · Esc menu").small().weak());
}

/// Planet at the centre of `rect`, the orbit as a circle and the satellite on it.
pub fn render_gps_scene(
    painter: &egui::Painter,
    rect: egui::Rect,
    sim: &GpsSim,
    sprites: &GpsSprites,
    stars: &StarField,
    phase: f64,
) {
    paint_background(painter, rect);
    paint_stars(painter, rect, stars, phase);

    let center = rect.center();
    let orbit_px = sim.orbit_radius_px() as f32;
    painter.circle_stroke(center, orbit_px, Stroke::new(1.0, ORBIT_GUIDE));
    paint_sprite(painter, &sprites.planet, center, sim.planet_radius_px() as f32);

    let offset = sim.satellite_offset();
    let sat = center + egui::vec2(offset.x as f32, offset.y as f32);
    paint_sprite(painter, &sprites.satellite, sat, SATELLITE_RADIUS);
}
