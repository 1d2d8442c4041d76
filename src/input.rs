//! Input events for the visualizations.
//!
//! Front ends translate their raw window events into [`InputEvent`] and
//! hand them to a scenario. Each control gets its own variant, so a scenario
//! handles them with one `match` and never inspects events at runtime.
//!
//! ```ignore
//! use relviz::input::{InputEvent, KeyCode};
//!
//! sim.handle(InputEvent::Key(KeyCode::Up)); // speed up
//! sim.handle(InputEvent::PointerPressed(pos));
//! ```

use glam::DVec2;

use crate::controls::Toggle;

/// Keys the scenarios listen to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Up,
    Down,
    Left,
    Right,
    Space,
    Escape,
    C,
    R,
    Key1,
    Key2,
    Key3,
    Key4,
    Other,
}

/// A discrete control action, from a button, a menu or a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    ToggleRunning,
    Reset,
    ClearTrails,
    SpeedUp,
    SpeedDown,
    PrecisionUp,
    PrecisionDown,
    Toggle(Toggle),
    /// Leave the scenario and return to the menu.
    Back,
}

/// Everything a scenario can react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerPressed(DVec2),
    PointerReleased,
    PointerMoved(DVec2),
    Key(KeyCode),
    Command(Command),
}

impl From<Command> for InputEvent {
    fn from(command: Command) -> Self {
        InputEvent::Command(command)
    }
}

/// Keyboard accelerators of the perihelion scenario.
pub fn perihelion_accelerator(key: KeyCode) -> Option<Command> {
    let command = match key {
        KeyCode::Up => Command::SpeedUp,
        KeyCode::Down => Command::SpeedDown,
        KeyCode::Right => Command::PrecisionUp,
        KeyCode::Left => Command::PrecisionDown,
        KeyCode::Space => Command::ToggleRunning,
        KeyCode::R => Command::Reset,
        KeyCode::C => Command::ClearTrails,
        KeyCode::Key1 => Command::Toggle(Toggle::NewtonCurve),
        KeyCode::Key2 => Command::Toggle(Toggle::NewtonMarker),
        KeyCode::Key3 => Command::Toggle(Toggle::RelativisticCurve),
        KeyCode::Key4 => Command::Toggle(Toggle::RelativisticMarker),
        KeyCode::Escape => Command::Back,
        KeyCode::Other => return None,
    };
    Some(command)
}

/// Keyboard accelerators of the GPS scenario.
pub fn gps_accelerator(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Escape => Some(Command::Back),
        KeyCode::Up => Some(Command::SpeedUp),
        KeyCode::Down => Some(Command::SpeedDown),
        _ => None,
    }
}

/// What the front end should do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Response {
    /// Nothing visible changed.
    #[default]
    Ignored,
    /// Parameters, toggles or state changed.
    Changed,
    /// The user asked to leave the scenario.
    Back,
}

impl Response {
    pub(crate) fn changed(changed: bool) -> Self {
        if changed {
            Response::Changed
        } else {
            Response::Ignored
        }
    }
}
