//! Scenario configuration.
//!
//! Every tunable constant of both scenarios lives here, so the desktop and
//! dashboard flavours of the same simulation are just two presets of one
//! implementation. Configurations round-trip through JSON.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::controls::SliderSpec;
use crate::error::ConfigError;
use crate::physics::constants::EARTH_RADIUS_KM;
use crate::physics::DilationUnit;

/// When the frame stepper is allowed to advance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepPolicy {
    /// Advance every tick, regardless of Start/Stop.
    #[default]
    Continuous,
    /// Advance only while the animation is running.
    WhileRunning,
}

fn default_exaggeration() -> f64 {
    25.0
}

/// Perihelion scenario: ellipse shape, timing and controls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// Semi-major axis in scene units (pixels).
    pub semi_major_axis: f64,
    /// Exaggerated for visibility; must be in `[0, 1)`.
    pub eccentricity: f64,
    /// Focus of both ellipses (the Sun) in scene coordinates.
    #[serde(default)]
    pub focus: DVec2,
    /// Orbital phase added per tick at speed 1.
    pub base_increment: f64,
    /// Precession phase per tick at full exaggeration, before scaling.
    pub precession_base_rate: f64,
    #[serde(default = "default_exaggeration")]
    pub precession_exaggeration: f64,
    pub trail_capacity: usize,
    pub speed: SliderSpec,
    /// `None` hides the precision slider and uses `fixed_precision`.
    #[serde(default)]
    pub precision: Option<SliderSpec>,
    #[serde(default)]
    pub fixed_precision: f64,
    #[serde(default)]
    pub step_policy: StepPolicy,
}

impl OrbitConfig {
    /// Desktop window flavour: long trails, wide speed range and a
    /// precision slider.
    pub fn desktop() -> Self {
        Self {
            semi_major_axis: 200.0,
            eccentricity: 0.3,
            focus: DVec2::ZERO,
            base_increment: 0.009,
            precession_base_rate: 0.0007,
            precession_exaggeration: 25.0,
            trail_capacity: 6000,
            speed: SliderSpec::new(1.0, 30.0, 1.0, 1.0),
            precision: Some(SliderSpec::new(0.0, 1.0, 0.01, 0.5).with_ticks([0.5])),
            fixed_precision: 0.5,
            step_policy: StepPolicy::Continuous,
        }
    }

    /// Dashboard flavour: rendered to an 800x800 image, stepped only while
    /// started.
    pub fn dashboard() -> Self {
        Self {
            semi_major_axis: 250.0,
            eccentricity: 0.2,
            focus: DVec2::new(400.0, 400.0),
            base_increment: 0.02,
            precession_base_rate: 0.0007,
            precession_exaggeration: 25.0,
            trail_capacity: 1500,
            speed: SliderSpec::new(0.1, 3.0, 0.1, 1.0),
            precision: None,
            fixed_precision: 0.5,
            step_policy: StepPolicy::WhileRunning,
        }
    }

    /// Check that the orbit is a closed ellipse and every number is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.semi_major_axis.is_finite() && self.semi_major_axis > 0.0) {
            return Err(invalid(format!("semi-major axis must be positive, got {}", self.semi_major_axis)));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(invalid(format!("eccentricity must be in [0, 1), got {}", self.eccentricity)));
        }
        let scalars = [
            ("base_increment", self.base_increment),
            ("precession_base_rate", self.precession_base_rate),
            ("precession_exaggeration", self.precession_exaggeration),
            ("fixed_precision", self.fixed_precision),
            ("focus.x", self.focus.x),
            ("focus.y", self.focus.y),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be finite")));
            }
        }
        check_slider("speed", &self.speed)?;
        if let Some(precision) = &self.precision {
            check_slider("precision", precision)?;
        }
        Ok(())
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self::desktop()
    }
}

/// GPS scenario: slider ranges and display settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GpsConfig {
    /// Planet radius in km.
    pub planet_radius: SliderSpec,
    /// Planet mass in Earth masses.
    pub mass: SliderSpec,
    /// Satellite orbital radius in km, measured from the planet centre.
    pub orbit_radius: SliderSpec,
    /// Display angle added per tick.
    pub angle_increment: f64,
    /// Speed multiplier applied to `angle_increment`.
    pub speed: SliderSpec,
    /// Kilometres per screen pixel when drawing the planet and orbit.
    pub km_per_pixel: f64,
    #[serde(default)]
    pub unit: DilationUnit,
}

impl Default for GpsConfig {
    fn default() -> Self {
        let re = EARTH_RADIUS_KM;
        Self {
            planet_radius: SliderSpec::new(0.3 * re, 3.0 * re, 0.05 * re, re)
                .with_ticks([0.5 * re, re, 1.5 * re, 2.0 * re, 2.5 * re, 3.0 * re]),
            mass: SliderSpec::new(0.5, 3.0, 0.1, 1.0).with_ticks([0.5, 1.0, 1.5, 2.0, 2.5, 3.0]),
            orbit_radius: SliderSpec::new(1.1 * re, 6.0 * re, 0.1 * re, 4.0 * re)
                .with_ticks([1.5 * re, 2.0 * re, 3.0 * re, 4.0 * re, 5.0 * re, 6.0 * re]),
            angle_increment: 0.01,
            speed: SliderSpec::new(0.5, 5.0, 0.5, 1.0),
            km_per_pixel: 100.0,
            unit: DilationUnit::MicrosPerDay,
        }
    }
}

impl GpsConfig {
    /// Check the slider ranges, and that the orbit slider can always sit
    /// above the planet surface.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_slider("planet_radius", &self.planet_radius)?;
        check_slider("mass", &self.mass)?;
        check_slider("orbit_radius", &self.orbit_radius)?;
        check_slider("speed", &self.speed)?;

        if self.planet_radius.min.min(self.planet_radius.max) <= 0.0 {
            return Err(invalid("planet radius range must be positive"));
        }
        if self.mass.min.min(self.mass.max) <= 0.0 {
            return Err(invalid("mass range must be positive"));
        }
        let lowest_planet = self.planet_radius.min.min(self.planet_radius.max);
        let highest_orbit = self.orbit_radius.max.max(self.orbit_radius.min);
        if highest_orbit - lowest_planet <= 0.5 * self.planet_radius.step.abs() {
            return Err(invalid(format!(
                "orbit radius range (max {highest_orbit} km) never clears the planet (min {lowest_planet} km)"
            )));
        }
        if !(self.km_per_pixel.is_finite() && self.km_per_pixel > 0.0) {
            return Err(invalid("km_per_pixel must be positive"));
        }
        if !self.angle_increment.is_finite() {
            return Err(invalid("angle_increment must be finite"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}

fn check_slider(name: &str, spec: &SliderSpec) -> Result<(), ConfigError> {
    let values = [spec.min, spec.max, spec.step, spec.default];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(invalid(format!("slider {name} has a non-finite bound")));
    }
    Ok(())
}

/// Complete configuration for one run of the visualizations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VizConfig {
    pub name: String,
    pub perihelion: OrbitConfig,
    #[serde(default)]
    pub gps: GpsConfig,
}

impl VizConfig {
    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.perihelion.validate()?;
        self.gps.validate()
    }
}

pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub config: fn() -> VizConfig,
}

pub static PRESETS: &[Preset] = &[
    Preset {
        name: "Desktop",
        description: "Continuous animation, 6000-point trails, precision slider",
        config: || VizConfig {
            name: "Desktop".into(),
            perihelion: OrbitConfig::desktop(),
            gps: GpsConfig::default(),
        },
    },
    Preset {
        name: "Dashboard",
        description: "Start/Stop/Reset driven, 1500-point trails, fixed precession",
        config: || VizConfig {
            name: "Dashboard".into(),
            perihelion: OrbitConfig::dashboard(),
            gps: GpsConfig::default(),
        },
    },
    Preset {
        name: "GPS in nanoseconds",
        description: "Desktop orbit with GPS drift reported in ns/day",
        config: || VizConfig {
            name: "GPS in nanoseconds".into(),
            perihelion: OrbitConfig::desktop(),
            gps: GpsConfig {
                unit: DilationUnit::NanosPerDay,
                ..GpsConfig::default()
            },
        },
    },
];

/// Look up a preset by name, ignoring case.
pub fn preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
