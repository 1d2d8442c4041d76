//! relviz - desktop window for the relativity visualizations
//!
//! Opens on a scenario menu. Each scenario runs in the central viewport with
//! its controls in a side panel; Esc returns to the menu.

use eframe::egui;
use log::{info, warn};
use std::time::Instant;

use relviz::assets::load_sprite;
use relviz::config::{VizConfig, PRESETS};
use relviz::input::{InputEvent, KeyCode, Response};
use relviz::raster::{render_orbit_frame, save_png};
use relviz::scenario::{GpsSim, PerihelionSim, Scenario};
use relviz::starfield::StarField;
use relviz::time::Time;
use relviz::DVec2;
use relviz_app::keys::input_events;
use relviz_app::paint::load_texture;
use relviz_app::ui::{
    render_gps_panel, render_gps_scene, render_main_menu, render_perihelion_panel, render_perihelion_scene,
    GpsSprites,
};

const STAR_COUNT: usize = 220;
const EXPORT_SIZE: u32 = 800;
const PLANET_SPRITE: &str = "assets/earth.png";
const SATELLITE_SPRITE: &str = "assets/satellite.png";

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("relviz"),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native("relviz", options, Box::new(|cc| Ok(Box::new(VizApp::new(cc)))))
}

struct VizApp {
    config: VizConfig,
    /// `None` while the menu is shown.
    screen: Option<Scenario>,
    perihelion: PerihelionSim,
    gps: GpsSim,
    time: Time,
    stars: StarField,
    sprites: GpsSprites,
    current_file: Option<String>,
    status_message: Option<(String, Instant)>,
}

impl VizApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = (PRESETS[0].config)();
        let stars = StarField::generate(&mut rand::thread_rng(), 1920.0, 1200.0, STAR_COUNT);

        let planet = load_sprite(PLANET_SPRITE, 64, [70, 120, 220]);
        let satellite = load_sprite(SATELLITE_SPRITE, 16, [210, 210, 210]);
        let sprites = GpsSprites {
            planet: load_texture(&cc.egui_ctx, "planet", &planet),
            satellite: load_texture(&cc.egui_ctx, "satellite", &satellite),
        };

        let mut time = Time::new();
        time.pause();

        Self {
            perihelion: PerihelionSim::new(config.perihelion.clone()),
            gps: GpsSim::new(config.gps.clone()),
            config,
            screen: None,
            time,
            stars,
            sprites,
            current_file: None,
            status_message: None,
        }
    }

    fn show_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Rebuild both scenarios from `config`.
    fn apply_config(&mut self, config: VizConfig) {
        self.perihelion = PerihelionSim::new(config.perihelion.clone());
        self.gps = GpsSim::new(config.gps.clone());
        self.config = config;
    }

    fn enter(&mut self, scenario: Scenario) {
        info!("entering {}", scenario.title());
        self.screen = Some(scenario);
        self.time.resume();
    }

    fn back_to_menu(&mut self) {
        self.screen = None;
        self.time.pause();
    }

    fn handle_event(&mut self, ctx: &egui::Context, event: InputEvent) {
        let response = match self.screen {
            Some(Scenario::Perihelion) => self.perihelion.handle(event),
            Some(Scenario::Gps) => self.gps.handle(event),
            None => {
                match event {
                    InputEvent::Key(KeyCode::Key1) => self.enter(Scenario::Perihelion),
                    InputEvent::Key(KeyCode::Key2) => self.enter(Scenario::Gps),
                    InputEvent::Key(KeyCode::Escape) => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
                    _ => {}
                }
                return;
            }
        };
        if response == Response::Back {
            self.back_to_menu();
        }
    }

    fn save_config_as(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name(format!("{}.json", self.config.name))
            .save_file()
        {
            let path_str = path.display().to_string();
            match self.config.save(&path) {
                Ok(()) => {
                    self.show_status(format!("Saved to {}", path_str));
                    self.current_file = Some(path_str);
                }
                Err(e) => self.show_status(format!("Save failed: {}", e)),
            }
        }
    }

    fn load_config(&mut self) {
        if let Some(path) = rfd::FileDialog::new().add_filter("JSON", &["json"]).pick_file() {
            let path_str = path.display().to_string();
            match VizConfig::load(&path) {
                Ok(config) => {
                    self.apply_config(config);
                    self.show_status(format!("Loaded {}", path_str));
                    self.current_file = Some(path_str);
                }
                Err(e) => {
                    warn!("loading {} failed: {}", path_str, e);
                    self.show_status(format!("Load failed: {}", e));
                }
            }
        }
    }

    /// Render the perihelion scene off-screen and write it as PNG.
    fn export_frame(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name("orbit.png")
            .save_file()
        else {
            return;
        };

        let half = EXPORT_SIZE as f64 * 0.5;
        let offset = DVec2::splat(half) - self.perihelion.config().focus;
        let frame = render_orbit_frame(&self.perihelion, self.perihelion.toggles(), EXPORT_SIZE, EXPORT_SIZE, offset);
        match save_png(&frame, &path) {
            Ok(()) => self.show_status(format!("Exported {}", path.display())),
            Err(e) => self.show_status(format!("Export failed: {}", e)),
        }
    }
}

impl eframe::App for VizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let ticks = self.time.update();

        for event in input_events(ctx) {
            self.handle_event(ctx, event);
        }

        match self.screen {
            Some(Scenario::Perihelion) => {
                for _ in 0..ticks {
                    self.perihelion.tick();
                }
            }
            Some(Scenario::Gps) => {
                for _ in 0..ticks {
                    self.gps.tick();
                }
            }
            None => {}
        }

        // Menu bar
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open...").clicked() {
                        self.load_config();
                        ui.close_menu();
                    }
                    if ui.button("Save As...").clicked() {
                        self.save_config_as();
                        ui.close_menu();
                    }
                    if ui
                        .add_enabled(self.screen == Some(Scenario::Perihelion), egui::Button::new("Export frame..."))
                        .clicked()
                    {
                        self.export_frame();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Scenario", |ui| {
                    for scenario in Scenario::ALL {
                        if ui.button(scenario.title()).clicked() {
                            self.enter(scenario);
                            ui.close_menu();
                        }
                    }
                    ui.separator();
                    if ui.button("Main menu").clicked() {
                        self.back_to_menu();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Presets", |ui| {
                    for preset in PRESETS {
                        if ui.button(preset.name).on_hover_text(preset.description).clicked() {
                            self.apply_config((preset.config)());
                            self.current_file = None;
                            self.show_status(format!("Loaded preset: {}", preset.name));
                            ui.close_menu();
                        }
                    }
                });

                if let Some(scenario) = self.screen {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(scenario.title()).strong());
                    });
                }
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some((msg, time)) = &self.status_message {
                    if time.elapsed().as_secs() < 5 {
                        ui.label(msg);
                    } else {
                        self.status_message = None;
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{:.0} FPS", self.time.fps()));
                    ui.separator();
                    ui.label(egui::RichText::new(&self.config.name).small().weak());
                    if let Some(file) = &self.current_file {
                        ui.separator();
                        ui.label(egui::RichText::new(file).small().weak());
                    }
                });
            });
        });

        let phase = ctx.input(|i| i.time) * 1000.0;

        match self.screen {
            None => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    if let Some(scenario) = render_main_menu(ui) {
                        self.enter(scenario);
                    }
                });
            }
            Some(Scenario::Perihelion) => {
                let commands = egui::SidePanel::right("controls")
                    .min_width(260.0)
                    .show(ctx, |ui| {
                        egui::ScrollArea::vertical()
                            .show(ui, |ui| render_perihelion_panel(ui, &mut self.perihelion))
                            .inner
                    })
                    .inner;
                for command in commands {
                    if self.perihelion.handle(InputEvent::Command(command)) == Response::Back {
                        self.back_to_menu();
                    }
                }

                egui::CentralPanel::default()
                    .frame(egui::Frame::NONE)
                    .show(ctx, |ui| {
                        let rect = ui.max_rect();
                        render_perihelion_scene(ui.painter(), rect, &self.perihelion, &self.stars, phase);
                    });
            }
            Some(Scenario::Gps) => {
                egui::SidePanel::right("controls").min_width(260.0).show(ctx, |ui| {
                    render_gps_panel(ui, &mut self.gps);
                });

                egui::CentralPanel::default()
                    .frame(egui::Frame::NONE)
                    .show(ctx, |ui| {
                        let rect = ui.max_rect();
                        render_gps_scene(ui.painter(), rect, &self.gps, &self.sprites, &self.stars, phase);
                    });
            }
        }

        ctx.request_repaint();
    }
}
