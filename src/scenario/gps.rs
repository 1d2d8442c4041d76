//! GPS clock drift: a satellite circling a planet whose size, mass and
//! orbit radius are set with sliders.
//!
//! Dilation is recomputed from the sliders on every frame. The only thing
//! that accumulates is the satellite's display angle.

use glam::DVec2;

use crate::config::GpsConfig;
use crate::controls::Slider;
use crate::input::{gps_accelerator, Command, InputEvent, Response};
use crate::physics::{time_dilation, DilationReport};

/// Which GPS slider an update targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GpsSlider {
    PlanetRadius,
    Mass,
    OrbitRadius,
    Speed,
}

#[derive(Clone, Debug)]
pub struct GpsControls {
    pub planet_radius: Slider,
    pub mass: Slider,
    pub orbit_radius: Slider,
    pub speed: Slider,
}

impl GpsControls {
    pub fn new(config: &GpsConfig) -> Self {
        Self {
            planet_radius: Slider::new("Radius (km)", &config.planet_radius),
            mass: Slider::new("Mass (M_e)", &config.mass),
            orbit_radius: Slider::new("Satellite orbit (km)", &config.orbit_radius),
            speed: Slider::new("Speed (x)", &config.speed),
        }
    }

    pub fn get(&self, which: GpsSlider) -> &Slider {
        match which {
            GpsSlider::PlanetRadius => &self.planet_radius,
            GpsSlider::Mass => &self.mass,
            GpsSlider::OrbitRadius => &self.orbit_radius,
            GpsSlider::Speed => &self.speed,
        }
    }

    pub fn get_mut(&mut self, which: GpsSlider) -> &mut Slider {
        match which {
            GpsSlider::PlanetRadius => &mut self.planet_radius,
            GpsSlider::Mass => &mut self.mass,
            GpsSlider::OrbitRadius => &mut self.orbit_radius,
            GpsSlider::Speed => &mut self.speed,
        }
    }

    fn all_mut(&mut self) -> [&mut Slider; 4] {
        [
            &mut self.planet_radius,
            &mut self.mass,
            &mut self.orbit_radius,
            &mut self.speed,
        ]
    }

    /// Push the satellite back above the surface if the planet grew past it.
    ///
    /// Both slider grids are multiples of the planet step, so anything
    /// closer than half a step counts as touching the surface.
    /// Returns `true` if a slider had to move.
    fn keep_orbit_above_surface(&mut self) -> bool {
        let surface = self.planet_radius.value();
        let min_gap = 0.5 * self.planet_radius.step();
        if self.orbit_radius.value() - surface > min_gap {
            return false;
        }
        let step = self.orbit_radius.step();
        let above = if step > 0.0 {
            ((surface / step).round() + 1.0) * step
        } else {
            surface + min_gap
        };
        self.orbit_radius.set_value(above.max(self.orbit_radius.min()));
        if self.orbit_radius.value() - surface <= min_gap {
            // The orbit slider cannot go high enough; shrink the planet instead
            let below = self.orbit_radius.value() - self.planet_radius.step();
            self.planet_radius.set_value(below);
        }
        true
    }
}

/// Snapshot of what the GPS panel displays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GpsReadout {
    pub mass_earths: f64,
    pub planet_radius_km: f64,
    pub orbit_radius_km: f64,
    /// Height above the surface, `orbit_radius_km - planet_radius_km`.
    pub altitude_km: f64,
    pub dilation: DilationReport,
}

#[derive(Clone, Debug)]
pub struct GpsSim {
    config: GpsConfig,
    pub controls: GpsControls,
    angle: f64,
}

impl GpsSim {
    pub fn new(config: GpsConfig) -> Self {
        let mut controls = GpsControls::new(&config);
        controls.keep_orbit_above_surface();
        Self {
            config,
            controls,
            angle: 0.0,
        }
    }

    pub fn config(&self) -> &GpsConfig {
        &self.config
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Set one slider, then restore the orbit-above-surface constraint.
    pub fn set(&mut self, which: GpsSlider, value: f64) -> bool {
        let changed = self.controls.get_mut(which).set_value(value);
        self.controls.keep_orbit_above_surface() || changed
    }

    /// Advance the satellite's display angle by one frame.
    pub fn tick(&mut self) {
        self.angle += self.config.angle_increment * self.controls.speed.value();
    }

    /// Satellite position relative to the planet centre, in screen pixels.
    pub fn satellite_offset(&self) -> DVec2 {
        let r_px = self.orbit_radius_px();
        DVec2::new(r_px * self.angle.cos(), r_px * self.angle.sin())
    }

    pub fn planet_radius_px(&self) -> f64 {
        self.controls.planet_radius.value() / self.config.km_per_pixel
    }

    pub fn orbit_radius_px(&self) -> f64 {
        self.controls.orbit_radius.value() / self.config.km_per_pixel
    }

    pub fn readout(&self) -> GpsReadout {
        let mass = self.controls.mass.value();
        let rp = self.controls.planet_radius.value();
        let r = self.controls.orbit_radius.value();
        GpsReadout {
            mass_earths: mass,
            planet_radius_km: rp,
            orbit_radius_km: r,
            altitude_km: r - rp,
            dilation: time_dilation(mass, rp, r, self.config.unit),
        }
    }

    pub fn command(&mut self, command: Command) -> Response {
        match command {
            Command::SpeedUp => Response::changed(self.controls.speed.nudge(1)),
            Command::SpeedDown => Response::changed(self.controls.speed.nudge(-1)),
            Command::Reset => {
                self.angle = 0.0;
                Response::Changed
            }
            Command::Back => Response::Back,
            _ => Response::Ignored,
        }
    }

    pub fn handle(&mut self, event: InputEvent) -> Response {
        let changed = match event {
            InputEvent::PointerPressed(pos) => {
                let mut changed = false;
                for slider in self.controls.all_mut() {
                    if slider.press(pos) {
                        changed |= slider.drag_to(pos.x);
                    }
                }
                changed
            }
            InputEvent::PointerMoved(pos) => {
                let mut changed = false;
                for slider in self.controls.all_mut() {
                    changed |= slider.motion(pos);
                }
                changed
            }
            InputEvent::PointerReleased => {
                for slider in self.controls.all_mut() {
                    slider.release();
                }
                false
            }
            InputEvent::Key(key) => {
                return gps_accelerator(key).map_or(Response::Ignored, |c| self.command(c))
            }
            InputEvent::Command(command) => return self.command(command),
        };
        let adjusted = self.controls.keep_orbit_above_surface();
        Response::changed(changed || adjusted)
    }
}

impl Default for GpsSim {
    fn default() -> Self {
        Self::new(GpsConfig::default())
    }
}
