//! Mercury perihelion precession: a fixed Newtonian ellipse next to one
//! whose major axis slowly rotates.

use glam::DVec2;
use log::debug;

use crate::animation::AnimationState;
use crate::config::{OrbitConfig, StepPolicy};
use crate::controls::{DisplayToggles, Slider};
use crate::input::{perihelion_accelerator, Command, InputEvent, Response};
use crate::physics::orbit::{orbit_point, precession_increment};

/// Positions produced by one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitSample {
    pub newton: DVec2,
    pub relativistic: DVec2,
}

/// User-facing controls of the scenario.
#[derive(Clone, Debug)]
pub struct PerihelionControls {
    pub speed: Slider,
    /// `None` when the preset fixes the precision.
    pub precision: Option<Slider>,
    pub toggles: DisplayToggles,
}

impl PerihelionControls {
    pub fn new(config: &OrbitConfig) -> Self {
        Self {
            speed: Slider::new("Speed (x)", &config.speed),
            precision: config.precision.as_ref().map(|spec| Slider::new("Precision", spec)),
            toggles: DisplayToggles::default(),
        }
    }

    fn sliders_mut(&mut self) -> impl Iterator<Item = &mut Slider> {
        std::iter::once(&mut self.speed).chain(self.precision.as_mut())
    }
}

/// One perihelion visualization session: configuration, controls and state.
#[derive(Clone, Debug)]
pub struct PerihelionSim {
    config: OrbitConfig,
    pub controls: PerihelionControls,
    state: AnimationState,
}

impl PerihelionSim {
    pub fn new(config: OrbitConfig) -> Self {
        let controls = PerihelionControls::new(&config);
        let state = AnimationState::new(config.trail_capacity);
        Self {
            config,
            controls,
            state,
        }
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.controls.speed.value()
    }

    /// Current precision knob: `1.0` is realistic, `0.0` maximally exaggerated.
    pub fn precision(&self) -> f64 {
        self.controls
            .precision
            .as_ref()
            .map_or(self.config.fixed_precision, Slider::value)
    }

    pub fn toggles(&self) -> DisplayToggles {
        self.controls.toggles
    }

    pub fn start(&mut self) {
        self.state.start();
    }

    pub fn stop(&mut self) {
        self.state.stop();
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn clear_trails(&mut self) {
        self.state.clear_trails();
    }

    /// Whether Start and Stop affect stepping. Under
    /// [`StepPolicy::Continuous`] the orbit always moves, so front ends
    /// should not offer them.
    pub fn has_run_controls(&self) -> bool {
        self.config.step_policy == StepPolicy::WhileRunning
    }

    /// Whether the next [`tick`](Self::tick) will advance.
    pub fn advances(&self) -> bool {
        match self.config.step_policy {
            StepPolicy::Continuous => true,
            StepPolicy::WhileRunning => self.state.is_running(),
        }
    }

    /// Both planet positions at the current phases, without stepping.
    pub fn positions(&self) -> OrbitSample {
        let c = &self.config;
        OrbitSample {
            newton: orbit_point(c.focus, c.semi_major_axis, c.eccentricity, self.state.angle, 0.0),
            relativistic: orbit_point(
                c.focus,
                c.semi_major_axis,
                c.eccentricity,
                self.state.angle,
                self.state.precession_angle,
            ),
        }
    }

    /// Advance one frame and record both positions in the trails.
    ///
    /// Returns `None` without touching the state when the step policy
    /// holds the animation.
    pub fn tick(&mut self) -> Option<OrbitSample> {
        if !self.advances() {
            return None;
        }

        let dt = self.config.base_increment * self.speed();
        self.state.angle += dt;
        self.state.precession_angle += precession_increment(
            self.config.precession_base_rate,
            self.precision(),
            self.config.precession_exaggeration,
        );

        let sample = self.positions();
        self.state.trail_newton.push(sample.newton);
        self.state.trail_relativistic.push(sample.relativistic);
        Some(sample)
    }

    /// Apply a discrete command.
    ///
    /// Start, Stop and ToggleRunning are ignored when the step policy
    /// keeps the orbit moving regardless.
    pub fn command(&mut self, command: Command) -> Response {
        match command {
            Command::Start | Command::Stop | Command::ToggleRunning if !self.has_run_controls() => {
                Response::Ignored
            }
            Command::Start => {
                let was = self.state.is_running();
                self.start();
                Response::changed(!was)
            }
            Command::Stop => {
                let was = self.state.is_running();
                self.stop();
                Response::changed(was)
            }
            Command::ToggleRunning => {
                self.state.toggle_running();
                Response::Changed
            }
            Command::Reset => {
                self.reset();
                Response::Changed
            }
            Command::ClearTrails => {
                self.clear_trails();
                Response::Changed
            }
            Command::SpeedUp => Response::changed(self.controls.speed.nudge(1)),
            Command::SpeedDown => Response::changed(self.controls.speed.nudge(-1)),
            Command::PrecisionUp => Response::changed(self.nudge_precision(1)),
            Command::PrecisionDown => Response::changed(self.nudge_precision(-1)),
            Command::Toggle(toggle) => {
                self.controls.toggles.toggle(toggle);
                Response::Changed
            }
            Command::Back => Response::Back,
        }
    }

    fn nudge_precision(&mut self, steps: i32) -> bool {
        self.controls
            .precision
            .as_mut()
            .is_some_and(|slider| slider.nudge(steps))
    }

    /// Route an input event to the matching control.
    pub fn handle(&mut self, event: InputEvent) -> Response {
        match event {
            InputEvent::PointerPressed(pos) => {
                let mut changed = false;
                for slider in self.controls.sliders_mut() {
                    if slider.press(pos) {
                        changed |= slider.drag_to(pos.x);
                    }
                }
                Response::changed(changed)
            }
            InputEvent::PointerMoved(pos) => {
                let mut changed = false;
                for slider in self.controls.sliders_mut() {
                    changed |= slider.motion(pos);
                }
                Response::changed(changed)
            }
            InputEvent::PointerReleased => {
                for slider in self.controls.sliders_mut() {
                    slider.release();
                }
                Response::Ignored
            }
            InputEvent::Key(key) => match perihelion_accelerator(key) {
                Some(command) => {
                    debug!("key {:?} -> {:?}", key, command);
                    self.command(command)
                }
                None => Response::Ignored,
            },
            InputEvent::Command(command) => self.command(command),
        }
    }
}

impl Default for PerihelionSim {
    fn default() -> Self {
        Self::new(OrbitConfig::default())
    }
}
