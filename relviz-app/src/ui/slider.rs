//! Painted slider bound to a [`relviz::controls::Slider`].
//!
//! The widget only lays the slider out and draws it. Dragging is handled by
//! the scenario, which receives the raw pointer events and checks them
//! against the track rectangle set here.

use eframe::egui::{self, Color32, Stroke};
use relviz::controls::{Slider, Track};

const ROW_HEIGHT: f32 = 40.0;
const BAR_HEIGHT: f32 = 6.0;

/// Lay out one slider row and move its track under the painted bar.
pub fn render_slider(ui: &mut egui::Ui, slider: &mut Slider, value_text: &str) {
    ui.label(format!("{}: {}", slider.label(), value_text));

    let width = ui.available_width().max(60.0);
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, ROW_HEIGHT * 0.5), egui::Sense::hover());
    let bar = egui::Rect::from_center_size(rect.center(), egui::vec2(rect.width() - 16.0, BAR_HEIGHT));

    let track = bar.expand2(egui::vec2(0.0, (Track::default().height as f32 - BAR_HEIGHT) * 0.5));
    slider.set_track(Track::new(track.left() as f64, track.top() as f64, track.width() as f64));

    if response.hovered() || slider.is_grabbed() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
    }

    let painter = ui.painter();
    painter.rect_filled(bar, 3.0, Color32::from_gray(70));

    let span = slider.max() - slider.min();
    for &tick in slider.ticks() {
        if span > 0.0 {
            let x = bar.left() + bar.width() * ((tick - slider.min()) / span) as f32;
            painter.line_segment(
                [egui::pos2(x, bar.bottom() + 2.0), egui::pos2(x, bar.bottom() + 6.0)],
                Stroke::new(1.0, Color32::from_gray(140)),
            );
        }
    }

    let handle_x = bar.left() + bar.width() * slider.fraction() as f32;
    let filled = egui::Rect::from_min_max(bar.min, egui::pos2(handle_x, bar.max.y));
    painter.rect_filled(filled, 3.0, Color32::from_rgb(70, 130, 220));

    let handle_color = if slider.is_grabbed() {
        Color32::from_rgb(255, 220, 120)
    } else {
        Color32::from_gray(230)
    };
    painter.circle_filled(egui::pos2(handle_x, bar.center().y), 7.0, handle_color);
}
