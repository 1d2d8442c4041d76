//! relviz desktop front end
//!
//! This crate provides:
//! - Translation of egui input into relviz input events
//! - Painter helpers for the orbit and GPS scenes
//! - Side panels with the scenario controls
//! - A dashboard runner that replays scripted interactions to PNG frames

pub mod keys;
pub mod paint;
pub mod ui;
