//! The two visualizations. Each owns its controls and state and is stepped
//! once per frame by the front end.

pub mod gps;
pub mod perihelion;

pub use gps::{GpsReadout, GpsSim, GpsSlider};
pub use perihelion::{OrbitSample, PerihelionControls, PerihelionSim};

/// Which visualization is on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scenario {
    #[default]
    Perihelion,
    Gps,
}

impl Scenario {
    pub const ALL: [Scenario; 2] = [Scenario::Perihelion, Scenario::Gps];

    pub fn title(self) -> &'static str {
        match self {
            Scenario::Perihelion => "Mercury's perihelion",
            Scenario::Gps => "GPS navigation",
        }
    }
}
