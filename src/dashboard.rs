//! Session-scoped request handling for the dashboard front end.
//!
//! A dashboard re-runs from the top on every interaction and expects one
//! image back. Each user gets a [`Session`] holding its own simulation; the
//! [`SessionStore`] hands the right one to every request, so two users never
//! share state.

use glam::DVec2;
use image::RgbImage;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::OrbitConfig;
use crate::controls::DisplayToggles;
use crate::error::ConfigError;
use crate::raster::{black_frame, render_orbit_frame};
use crate::scenario::PerihelionSim;

pub const FRAME_WIDTH: u32 = 800;
pub const FRAME_HEIGHT: u32 = 800;

/// Momentary button pressed during an interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardAction {
    Start,
    Stop,
    Reset,
}

/// Widget values submitted with one interaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub speed: f64,
    #[serde(default)]
    pub toggles: DisplayToggles,
    /// Button pressed this time, if any.
    #[serde(default)]
    pub action: Option<DashboardAction>,
}

impl Default for DashboardRequest {
    fn default() -> Self {
        Self {
            speed: 1.0,
            toggles: DisplayToggles::default(),
            action: None,
        }
    }
}

/// What the dashboard shows after an interaction.
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardResponse {
    /// The simulation advanced one step; show this frame.
    Frame(RgbImage),
    /// Reset was pressed; show a black frame.
    Cleared(RgbImage),
    /// Not running; prompt the user to press Start.
    Idle,
}

impl DashboardResponse {
    pub fn image(&self) -> Option<&RgbImage> {
        match self {
            DashboardResponse::Frame(img) | DashboardResponse::Cleared(img) => Some(img),
            DashboardResponse::Idle => None,
        }
    }
}

/// One user's dashboard state.
#[derive(Clone, Debug)]
pub struct Session {
    sim: PerihelionSim,
    width: u32,
    height: u32,
}

impl Session {
    pub fn new(config: OrbitConfig) -> Self {
        Self {
            sim: PerihelionSim::new(config),
            width: FRAME_WIDTH,
            height: FRAME_HEIGHT,
        }
    }

    pub fn with_frame_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn sim(&self) -> &PerihelionSim {
        &self.sim
    }

    /// Apply one interaction and produce its output.
    ///
    /// Start and Stop take effect before stepping, so pressing Start renders
    /// the first frame immediately. Reset stops, clears and returns a black
    /// frame without stepping.
    pub fn handle(&mut self, request: &DashboardRequest) -> DashboardResponse {
        self.sim.controls.speed.set_value(request.speed);
        self.sim.controls.toggles = request.toggles;

        match request.action {
            Some(DashboardAction::Start) => self.sim.start(),
            Some(DashboardAction::Stop) => self.sim.stop(),
            Some(DashboardAction::Reset) => {
                self.sim.reset();
                return DashboardResponse::Cleared(black_frame(self.width, self.height));
            }
            None => {}
        }

        if self.sim.tick().is_none() {
            return DashboardResponse::Idle;
        }
        DashboardResponse::Frame(render_orbit_frame(
            &self.sim,
            request.toggles,
            self.width,
            self.height,
            DVec2::ZERO,
        ))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(OrbitConfig::dashboard())
    }
}

/// Opaque per-user key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u64);

/// All live sessions, keyed by user.
#[derive(Debug)]
pub struct SessionStore {
    config: OrbitConfig,
    frame_size: (u32, u32),
    sessions: HashMap<SessionId, Session>,
}

impl SessionStore {
    /// New sessions are created from `config`.
    pub fn new(config: OrbitConfig) -> Self {
        Self {
            config,
            frame_size: (FRAME_WIDTH, FRAME_HEIGHT),
            sessions: HashMap::new(),
        }
    }

    /// Frame size for sessions created from now on.
    pub fn with_frame_size(mut self, width: u32, height: u32) -> Self {
        self.frame_size = (width, height);
        self
    }

    /// The session for `id`, created on first use.
    pub fn session(&mut self, id: SessionId) -> &mut Session {
        let config = &self.config;
        let (width, height) = self.frame_size;
        self.sessions.entry(id).or_insert_with(|| {
            debug!("session {:?} opened", id);
            Session::new(config.clone()).with_frame_size(width, height)
        })
    }

    /// Route a request to its session.
    pub fn handle(&mut self, id: SessionId, request: &DashboardRequest) -> DashboardResponse {
        self.session(id).handle(request)
    }

    /// Drop a session when its user leaves. Returns `false` if it did not exist.
    pub fn end(&mut self, id: SessionId) -> bool {
        let removed = self.sessions.remove(&id).is_some();
        if removed {
            debug!("session {:?} closed", id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(OrbitConfig::dashboard())
    }
}

/// One recorded interaction of a scripted dashboard run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptStep {
    #[serde(default)]
    pub session: SessionId,
    #[serde(default)]
    pub request: DashboardRequest,
    /// Close the session after this step.
    #[serde(default)]
    pub end: bool,
}

/// A sequence of interactions to replay headlessly, e.g. to produce frames
/// for slides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardScript {
    /// Orbit configuration for new sessions. Defaults to the dashboard preset.
    #[serde(default = "OrbitConfig::dashboard")]
    pub orbit: OrbitConfig,
    pub steps: Vec<ScriptStep>,
}

impl Default for DashboardScript {
    fn default() -> Self {
        Self {
            orbit: OrbitConfig::dashboard(),
            steps: Vec::new(),
        }
    }
}

impl DashboardScript {
    /// Load a script from JSON, rejecting an invalid orbit configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let script: Self = serde_json::from_str(&json)?;
        script.orbit.validate()?;
        Ok(script)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(action: DashboardAction) -> DashboardRequest {
        DashboardRequest {
            action: Some(action),
            ..Default::default()
        }
    }

    #[test]
    fn test_idle_until_started() {
        let mut session = Session::default().with_frame_size(64, 64);
        assert_eq!(session.handle(&DashboardRequest::default()), DashboardResponse::Idle);
        assert_eq!(session.sim().state().angle, 0.0);

        let resp = session.handle(&press(DashboardAction::Start));
        assert!(matches!(resp, DashboardResponse::Frame(_)));
        assert!((session.sim().state().angle - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_each_interaction_steps_once() {
        let mut session = Session::default().with_frame_size(32, 32);
        session.handle(&press(DashboardAction::Start));
        let req = DashboardRequest {
            speed: 2.0,
            ..Default::default()
        };
        for _ in 0..5 {
            session.handle(&req);
        }
        // 0.02 at speed 1, then 5 x 0.04
        assert!((session.sim().state().angle - 0.22).abs() < 1e-9);
        assert_eq!(session.sim().state().trail_newton.len(), 6);
    }

    #[test]
    fn test_stop_then_reset() {
        let mut session = Session::default().with_frame_size(32, 32);
        session.handle(&press(DashboardAction::Start));
        session.handle(&DashboardRequest::default());

        assert_eq!(session.handle(&press(DashboardAction::Stop)), DashboardResponse::Idle);
        assert_eq!(session.handle(&press(DashboardAction::Stop)), DashboardResponse::Idle);
        assert!(session.sim().state().angle > 0.0);

        let resp = session.handle(&press(DashboardAction::Reset));
        let img = resp.image().unwrap();
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0]));
        assert_eq!(session.sim().state().angle, 0.0);
        assert!(session.sim().state().trail_relativistic.is_empty());
        assert_eq!(session.handle(&DashboardRequest::default()), DashboardResponse::Idle);
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut session = Session::default().with_frame_size(8, 8);
        session.handle(&DashboardRequest {
            speed: 99.0,
            action: Some(DashboardAction::Start),
            ..Default::default()
        });
        assert_eq!(session.sim().speed(), 3.0);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let mut store = SessionStore::new(OrbitConfig::dashboard()).with_frame_size(8, 8);
        let (alice, bob) = (SessionId(1), SessionId(2));

        store.handle(alice, &press(DashboardAction::Start));
        store.handle(alice, &DashboardRequest::default());
        assert_eq!(store.handle(bob, &DashboardRequest::default()), DashboardResponse::Idle);

        assert!(store.session(alice).sim().state().angle > 0.0);
        assert_eq!(store.session(bob).sim().state().angle, 0.0);
        assert_eq!(store.len(), 2);

        assert!(store.end(alice));
        assert!(!store.end(alice));
        assert_eq!(store.len(), 1);
        // A returning user starts fresh
        assert_eq!(store.session(alice).sim().state().angle, 0.0);
    }

    #[test]
    fn test_request_json() {
        let req: DashboardRequest = serde_json::from_str(r#"{ "speed": 1.5, "action": "Start" }"#).unwrap();
        assert_eq!(req.action, Some(DashboardAction::Start));
        assert_eq!(req.toggles, DisplayToggles::default());
    }

    #[test]
    fn test_script_defaults() {
        let json = r#"{
            "steps": [
                { "request": { "speed": 1.0, "action": "Start" } },
                { "session": 7 },
                { "session": 7, "end": true }
            ]
        }"#;
        let script: DashboardScript = serde_json::from_str(json).unwrap();
        assert_eq!(script.orbit, OrbitConfig::dashboard());
        assert_eq!(script.steps.len(), 3);
        assert_eq!(script.steps[0].session, SessionId(0));
        assert_eq!(script.steps[1].request, DashboardRequest::default());
        assert!(script.steps[2].end);
    }

    #[test]
    fn test_script_save_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.json");
        let script = DashboardScript {
            orbit: OrbitConfig::dashboard(),
            steps: vec![ScriptStep {
                session: SessionId(2),
                request: press(DashboardAction::Start),
                end: false,
            }],
        };
        script.save(&path).unwrap();
        assert_eq!(DashboardScript::load(&path).unwrap(), script);
        assert!(matches!(
            DashboardScript::load(dir.path().join("missing.json")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_script_with_hyperbolic_orbit_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.json");
        let mut script = DashboardScript::default();
        script.orbit.eccentricity = 1.5;
        script.save(&path).unwrap();
        assert!(matches!(DashboardScript::load(&path), Err(ConfigError::Invalid(_))));
    }
}
