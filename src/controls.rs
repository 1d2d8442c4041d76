//! Slider and toggle state behind the control panels.
//!
//! Widgets are drawn elsewhere. This module owns what they mean: a slider
//! maps a pointer position on its track to a value clamped to `[min, max]`
//! and snapped to `step`; toggles are plain presentation flags.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Extra clickable margin above and below the visible track.
const GRAB_MARGIN: f64 = 12.0;

/// Serializable description of a slider: range, granularity and start value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    /// Values marked on the track.
    #[serde(default)]
    pub ticks: Vec<f64>,
}

impl SliderSpec {
    pub fn new(min: f64, max: f64, step: f64, default: f64) -> Self {
        Self {
            min,
            max,
            step,
            default,
            ticks: Vec::new(),
        }
    }

    pub fn with_ticks(mut self, ticks: impl Into<Vec<f64>>) -> Self {
        self.ticks = ticks.into();
        self
    }
}

/// Screen rectangle of a slider's visible bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Track {
    pub fn new(left: f64, top: f64, width: f64) -> Self {
        Self {
            left,
            top,
            width,
            height: 12.0,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Whether `pos` lands in the grab area, which is taller than the bar.
    pub fn grab_contains(&self, pos: DVec2) -> bool {
        pos.x >= self.left
            && pos.x <= self.right()
            && pos.y >= self.top - GRAB_MARGIN
            && pos.y <= self.top + self.height + GRAB_MARGIN
    }
}

impl Default for Track {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

/// A value picked by dragging a handle along a track.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    label: String,
    min: f64,
    max: f64,
    step: f64,
    value: f64,
    ticks: Vec<f64>,
    track: Track,
    grabbed: bool,
}

impl Slider {
    /// Build a slider from its spec. The start value is clamped and snapped.
    pub fn new(label: impl Into<String>, spec: &SliderSpec) -> Self {
        let mut slider = Self {
            label: label.into(),
            min: spec.min.min(spec.max),
            max: spec.max.max(spec.min),
            step: spec.step.abs(),
            value: spec.min,
            ticks: spec.ticks.clone(),
            track: Track::default(),
            grabbed: false,
        };
        slider.set_value(spec.default);
        slider
    }

    pub fn with_track(mut self, track: Track) -> Self {
        self.track = track;
        self
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    pub fn track(&self) -> Track {
        self.track
    }

    /// Move the track, e.g. after a window resize.
    pub fn set_track(&mut self, track: Track) {
        self.track = track;
    }

    #[inline]
    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    /// Snap `raw` to the step grid, then clamp into range.
    pub fn snap(&self, raw: f64) -> f64 {
        let snapped = if self.step > 0.0 {
            (raw / self.step).round() * self.step
        } else {
            raw
        };
        snapped.clamp(self.min, self.max)
    }

    /// Set the value directly. Returns `true` if it changed.
    pub fn set_value(&mut self, raw: f64) -> bool {
        let next = self.snap(raw);
        let changed = next != self.value;
        self.value = next;
        changed
    }

    /// Move by a whole number of steps, as keyboard accelerators do.
    pub fn nudge(&mut self, steps: i32) -> bool {
        self.set_value(self.value + steps as f64 * self.step)
    }

    /// Raw (unsnapped) value for a pointer at `x`; positions off the
    /// track clamp to its ends.
    pub fn raw_at(&self, x: f64) -> f64 {
        let mx = x.clamp(self.track.left, self.track.right());
        let t = if self.track.width > 0.0 {
            (mx - self.track.left) / self.track.width
        } else {
            0.0
        };
        self.min + t * (self.max - self.min)
    }

    /// Set the value from a pointer at `x`.
    pub fn drag_to(&mut self, x: f64) -> bool {
        self.set_value(self.raw_at(x))
    }

    /// Handle position along the track, `0.0` at `min` and `1.0` at `max`.
    pub fn fraction(&self) -> f64 {
        if self.max > self.min {
            (self.value - self.min) / (self.max - self.min)
        } else {
            0.0
        }
    }

    /// Pointer pressed. Grabs the handle if `pos` is in the grab area.
    pub fn press(&mut self, pos: DVec2) -> bool {
        if self.track.grab_contains(pos) {
            self.grabbed = true;
        }
        self.grabbed
    }

    /// Pointer moved. Only a grabbed slider follows the pointer.
    pub fn motion(&mut self, pos: DVec2) -> bool {
        if self.grabbed {
            self.drag_to(pos.x)
        } else {
            false
        }
    }

    pub fn release(&mut self) {
        self.grabbed = false;
    }
}

/// One of the four visibility switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Toggle {
    NewtonCurve,
    NewtonMarker,
    RelativisticCurve,
    RelativisticMarker,
}

impl Toggle {
    pub const ALL: [Toggle; 4] = [
        Toggle::NewtonCurve,
        Toggle::NewtonMarker,
        Toggle::RelativisticCurve,
        Toggle::RelativisticMarker,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Toggle::NewtonCurve => "Newtonian orbit (dotted)",
            Toggle::NewtonMarker => "Newtonian planet",
            Toggle::RelativisticCurve => "Relativistic orbit (line)",
            Toggle::RelativisticMarker => "Relativistic planet",
        }
    }
}

/// Presentation filters. They never affect the physics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayToggles {
    pub newton_curve: bool,
    pub newton_marker: bool,
    pub relativistic_curve: bool,
    pub relativistic_marker: bool,
}

impl DisplayToggles {
    pub fn is_on(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::NewtonCurve => self.newton_curve,
            Toggle::NewtonMarker => self.newton_marker,
            Toggle::RelativisticCurve => self.relativistic_curve,
            Toggle::RelativisticMarker => self.relativistic_marker,
        }
    }

    pub fn flag_mut(&mut self, toggle: Toggle) -> &mut bool {
        match toggle {
            Toggle::NewtonCurve => &mut self.newton_curve,
            Toggle::NewtonMarker => &mut self.newton_marker,
            Toggle::RelativisticCurve => &mut self.relativistic_curve,
            Toggle::RelativisticMarker => &mut self.relativistic_marker,
        }
    }

    pub fn set(&mut self, toggle: Toggle, on: bool) {
        *self.flag_mut(toggle) = on;
    }

    pub fn toggle(&mut self, toggle: Toggle) {
        let flag = self.flag_mut(toggle);
        *flag = !*flag;
    }
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self {
            newton_curve: true,
            newton_marker: true,
            relativistic_curve: true,
            relativistic_marker: true,
        }
    }
}
