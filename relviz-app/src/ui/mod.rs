//! UI panels for the desktop app

mod gps_panel;
mod menu;
mod perihelion_panel;
mod slider;

pub use gps_panel::{render_gps_panel, render_gps_scene, GpsSprites};
pub use menu::render_main_menu;
pub use perihelion_panel::{render_perihelion_panel, render_perihelion_scene};
pub use slider::render_slider;
