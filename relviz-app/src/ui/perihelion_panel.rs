//! Controls and scene for the perihelion scenario.

use eframe::egui::{self, Color32};
use relviz::controls::Toggle;
use relviz::input::Command;
use relviz::physics::orbit::{aphelion_distance, perihelion_distance};
use relviz::scenario::PerihelionSim;
use relviz::starfield::StarField;

use super::render_slider;
use crate::paint::{
    paint_background, paint_dotted_trail, paint_gradient_disc, paint_polyline_trail, paint_stars, paint_sun,
    SceneTransform, NEWTON_TRAIL, RELATIVISTIC_TRAIL,
};

/// Side panel. Button presses come back as commands so they take the same
/// path as keyboard accelerators.
pub fn render_perihelion_panel(ui: &mut egui::Ui, sim: &mut PerihelionSim) -> Vec<Command> {
    let mut commands = Vec::new();

    ui.heading("Simulation");
    let run_controls = sim.has_run_controls();
    let running = sim.state().is_running();
    if run_controls {
        let (label, color) = if running {
            ("Running", Color32::LIGHT_GREEN)
        } else {
            ("Stopped", Color32::LIGHT_RED)
        };
        ui.label(egui::RichText::new(label).color(color));
    } else {
        ui.label(egui::RichText::new("Animating continuously").weak());
    }

    ui.horizontal(|ui| {
        if run_controls {
            if ui.add_enabled(!running, egui::Button::new("Start")).clicked() {
                commands.push(Command::Start);
            }
            if ui.add_enabled(running, egui::Button::new("Stop")).clicked() {
                commands.push(Command::Stop);
            }
        }
        if ui.button("Reset").on_hover_text("Rewind and clear trails").clicked() {
            commands.push(Command::Reset);
        }
    });
    if ui.button("Clear trails").clicked() {
        commands.push(Command::ClearTrails);
    }

    ui.add_space(8.0);
    ui.separator();
    ui.heading("Parameters");

    let speed = sim.controls.speed.value();
    render_slider(ui, &mut sim.controls.speed, &format!("{speed:.1}x"));

    let precision = sim.precision();
    match sim.controls.precision.as_mut() {
        Some(slider) => {
            render_slider(ui, slider, &format!("{precision:.2}"));
            ui.label(egui::RichText::new("0 = full relativity, 1 = Newtonian").small().weak());
        }
        None => {
            ui.label(format!("Precision: {precision:.2} (fixed)"));
        }
    }

    ui.add_space(8.0);
    ui.separator();
    ui.heading("Display");

    let toggles = sim.toggles();
    for (i, toggle) in Toggle::ALL.into_iter().enumerate() {
        let mut on = toggles.is_on(toggle);
        if ui.checkbox(&mut on, format!("{} [{}]", toggle.label(), i + 1)).changed() {
            commands.push(Command::Toggle(toggle));
        }
    }

    ui.add_space(8.0);
    ui.separator();
    ui.heading("Orbit");

    let config = sim.config();
    let state = sim.state();
    egui::Grid::new("orbit_info").num_columns(2).show(ui, |ui| {
        ui.label("Eccentricity");
        ui.label(format!("{:.2}", config.eccentricity));
        ui.end_row();
        ui.label("Perihelion");
        ui.label(format!("{:.0} px", perihelion_distance(config.semi_major_axis, config.eccentricity)));
        ui.end_row();
        ui.label("Aphelion");
        ui.label(format!("{:.0} px", aphelion_distance(config.semi_major_axis, config.eccentricity)));
        ui.end_row();
        ui.label("Precession");
        ui.label(format!("{:.2}°", state.precession_angle.to_degrees()));
        ui.end_row();
        ui.label("Trail points");
        ui.label(format!("{} / {}", state.trail_relativistic.len(), state.trail_relativistic.capacity()));
        ui.end_row();
    });

    ui.add_space(8.0);
    ui.label(egui::RichText::new(key_hints(run_controls)).small().weak());

    commands
}

fn key_hints(run_controls: bool) -> String {
    let common = "R reset · C clear · ↑↓ speed · ←→ precision · 1-4 display";
    if run_controls {
        format!("Space start/stop · {common}")
    } else {
        common.to_string()
    }
}

/// Draw the orbit scene into `rect`, with the sun at its centre.
pub fn render_perihelion_scene(painter: &egui::Painter, rect: egui::Rect, sim: &PerihelionSim, stars: &StarField, phase: f64) {
    paint_background(painter, rect);
    paint_stars(painter, rect, stars, phase);

    let view = SceneTransform::new(rect.center(), sim.config().focus);
    let toggles = sim.toggles();
    let state = sim.state();

    paint_sun(painter, view.to_screen(sim.config().focus));

    if toggles.newton_curve {
        paint_dotted_trail(painter, view, &state.trail_newton, NEWTON_TRAIL);
    }
    if toggles.relativistic_curve {
        paint_polyline_trail(painter, view, &state.trail_relativistic, RELATIVISTIC_TRAIL);
    }

    let planets = sim.positions();
    if toggles.newton_marker {
        paint_gradient_disc(
            painter,
            view.to_screen(planets.newton),
            6.0,
            Color32::from_rgb(180, 180, 180),
            Color32::from_rgb(80, 80, 80),
        );
    }
    if toggles.relativistic_marker {
        paint_gradient_disc(
            painter,
            view.to_screen(planets.relativistic),
            8.0,
            Color32::from_rgb(255, 200, 120),
            Color32::from_rgb(200, 100, 50),
        );
    }
}
