//! egui input to relviz [`InputEvent`]s.

use eframe::egui;
use glam::DVec2;
use relviz::input::{InputEvent, KeyCode};

/// Map an egui key to the keys the scenarios understand.
pub fn key_code(key: egui::Key) -> KeyCode {
    match key {
        egui::Key::ArrowUp => KeyCode::Up,
        egui::Key::ArrowDown => KeyCode::Down,
        egui::Key::ArrowLeft => KeyCode::Left,
        egui::Key::ArrowRight => KeyCode::Right,
        egui::Key::Space => KeyCode::Space,
        egui::Key::Escape => KeyCode::Escape,
        egui::Key::C => KeyCode::C,
        egui::Key::R => KeyCode::R,
        egui::Key::Num1 => KeyCode::Key1,
        egui::Key::Num2 => KeyCode::Key2,
        egui::Key::Num3 => KeyCode::Key3,
        egui::Key::Num4 => KeyCode::Key4,
        _ => KeyCode::Other,
    }
}

pub fn to_dvec(pos: egui::Pos2) -> DVec2 {
    DVec2::new(pos.x as f64, pos.y as f64)
}

/// Translate one raw egui event. Key repeats are dropped so a held key
/// does not flip a toggle back and forth.
pub fn translate(event: &egui::Event) -> Option<InputEvent> {
    match event {
        egui::Event::Key {
            key,
            pressed: true,
            repeat: false,
            ..
        } => match key_code(*key) {
            KeyCode::Other => None,
            code => Some(InputEvent::Key(code)),
        },
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            ..
        } => Some(if *pressed {
            InputEvent::PointerPressed(to_dvec(*pos))
        } else {
            InputEvent::PointerReleased
        }),
        egui::Event::PointerMoved(pos) => Some(InputEvent::PointerMoved(to_dvec(*pos))),
        _ => None,
    }
}

/// All events of the current frame, in arrival order.
pub fn input_events(ctx: &egui::Context) -> Vec<InputEvent> {
    ctx.input(|i| i.events.iter().filter_map(translate).collect())
}
