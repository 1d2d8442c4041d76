//! Integration tests for the public engine API.
//!
//! These drive the scenarios the way a front end does: through presets,
//! input events and ticks, then check the observable state.

use std::f64::consts::{PI, TAU};

use relviz::config::{preset, GpsConfig, OrbitConfig, VizConfig, PRESETS};
use relviz::controls::{DisplayToggles, Slider, SliderSpec, Toggle, Track};
use relviz::dashboard::{DashboardAction, DashboardRequest, DashboardResponse, SessionId, SessionStore};
use relviz::input::{Command, InputEvent, KeyCode, Response};
use relviz::physics::orbit::{aphelion_distance, perihelion_distance};
use relviz::physics::{orbit_radius, time_dilation, DilationUnit};
use relviz::scenario::{GpsSim, GpsSlider, PerihelionSim};
use relviz::trail::Trail;
use relviz::DVec2;

// ============================================================================
// Orbit geometry
// ============================================================================

#[test]
fn test_orbit_radius_is_periodic_with_extremes() {
    for &(a, e) in &[(200.0, 0.3), (250.0, 0.2), (100.0, 0.0), (50.0, 0.95)] {
        assert!((orbit_radius(a, e, 0.0, 0.0) - perihelion_distance(a, e)).abs() < 1e-9);
        assert!((orbit_radius(a, e, PI, 0.0) - aphelion_distance(a, e)).abs() < 1e-9);
        for i in 0..36 {
            let theta = i as f64 * 0.3;
            let r = orbit_radius(a, e, theta, 0.0);
            assert!((r - orbit_radius(a, e, theta + TAU, 0.0)).abs() < 1e-9);
            assert!(r >= perihelion_distance(a, e) - 1e-9);
            assert!(r <= aphelion_distance(a, e) + 1e-9);
        }
    }
}

// ============================================================================
// Perihelion scenario
// ============================================================================

#[test]
fn test_precession_monotonic_below_one_constant_at_one() {
    let mut sim = PerihelionSim::new(OrbitConfig::desktop());
    sim.controls.precision.as_mut().unwrap().set_value(0.2);
    let mut last = sim.state().precession_angle;
    for _ in 0..100 {
        sim.tick();
        assert!(sim.state().precession_angle > last);
        last = sim.state().precession_angle;
    }

    sim.controls.precision.as_mut().unwrap().set_value(1.0);
    for _ in 0..100 {
        sim.tick();
        assert_eq!(sim.state().precession_angle, last);
    }
}

#[test]
fn test_newtonian_curve_closes_relativistic_drifts() {
    let mut sim = PerihelionSim::new(OrbitConfig::desktop());
    sim.controls.precision.as_mut().unwrap().set_value(0.9);
    let start = sim.positions();
    let per_orbit = (TAU / 0.009).round() as usize;
    for _ in 0..per_orbit {
        sim.tick();
    }
    let after = sim.positions();
    // One lap later the fixed ellipse is back near its start, the rotating
    // one is not
    assert!(start.newton.distance(after.newton) < 5.0);
    assert!(start.relativistic.distance(after.relativistic) > 10.0);
}

#[test]
fn test_trails_capped_at_capacity() {
    let mut config = OrbitConfig::desktop();
    config.trail_capacity = 50;
    let mut sim = PerihelionSim::new(config);
    let mut pushed = Vec::new();
    for _ in 0..80 {
        pushed.push(sim.tick().unwrap().newton);
    }
    let kept: Vec<DVec2> = sim.state().trail_newton.iter().collect();
    assert_eq!(kept.len(), 50);
    assert_eq!(kept, pushed[30..]);
    assert_eq!(sim.state().trail_relativistic.len(), 50);
}

#[test]
fn test_reset_from_any_state() {
    let mut sim = PerihelionSim::new(OrbitConfig::dashboard());
    sim.handle(InputEvent::Key(KeyCode::Space));
    assert!(sim.state().is_running());
    for _ in 0..25 {
        sim.tick();
    }
    assert_eq!(sim.handle(InputEvent::Key(KeyCode::R)), Response::Changed);
    assert_eq!(sim.state().angle, 0.0);
    assert_eq!(sim.state().precession_angle, 0.0);
    assert!(sim.state().trail_newton.is_empty());
    assert!(sim.state().trail_relativistic.is_empty());
    assert!(!sim.state().is_running());
}

#[test]
fn test_reset_keeps_parameters() {
    let mut sim = PerihelionSim::new(OrbitConfig::desktop());
    sim.handle(InputEvent::Key(KeyCode::Up));
    sim.handle(InputEvent::Key(KeyCode::Up));
    sim.handle(InputEvent::Key(KeyCode::Key2));
    let speed = sim.speed();
    sim.command(Command::Reset);
    assert_eq!(sim.speed(), speed);
    assert!(!sim.toggles().is_on(Toggle::NewtonMarker));
}

#[test]
fn test_stop_twice_same_as_once() {
    let mut once = PerihelionSim::new(OrbitConfig::dashboard());
    once.start();
    once.tick();
    let mut twice = once.clone();

    once.stop();
    twice.stop();
    twice.stop();
    assert_eq!(once.state(), twice.state());
}

#[test]
fn test_clear_trails_keeps_phase_and_status() {
    let mut sim = PerihelionSim::new(OrbitConfig::dashboard());
    sim.start();
    for _ in 0..10 {
        sim.tick();
    }
    let angle = sim.state().angle;
    sim.handle(InputEvent::Key(KeyCode::C));
    assert!(sim.state().trail_newton.is_empty());
    assert_eq!(sim.state().angle, angle);
    assert!(sim.state().is_running());
}

#[test]
fn test_escape_asks_for_menu() {
    let mut sim = PerihelionSim::default();
    assert_eq!(sim.handle(InputEvent::Key(KeyCode::Escape)), Response::Back);
    let mut gps = GpsSim::default();
    assert_eq!(gps.handle(InputEvent::Key(KeyCode::Escape)), Response::Back);
}

#[test]
fn test_pointer_drag_moves_speed_slider() {
    let mut sim = PerihelionSim::new(OrbitConfig::desktop());
    sim.controls.speed.set_track(Track::new(100.0, 50.0, 290.0));

    sim.handle(InputEvent::PointerPressed(DVec2::new(100.0, 55.0)));
    assert_eq!(sim.speed(), 1.0);
    sim.handle(InputEvent::PointerMoved(DVec2::new(390.0, 300.0)));
    assert_eq!(sim.speed(), 30.0);
    sim.handle(InputEvent::PointerReleased);
    sim.handle(InputEvent::PointerMoved(DVec2::new(100.0, 55.0)));
    assert_eq!(sim.speed(), 30.0);
}

// ============================================================================
// Sliders
// ============================================================================

#[test]
fn test_slider_drag_always_snapped_and_clamped() {
    let spec = SliderSpec::new(0.1, 3.0, 0.1, 1.0);
    let mut slider = Slider::new("Speed", &spec).with_track(Track::new(0.0, 0.0, 290.0));
    for i in -50..400 {
        let x = i as f64 * 1.37;
        slider.drag_to(x);
        let raw = slider.raw_at(x);
        let expected = ((raw / 0.1).round() * 0.1).clamp(0.1, 3.0);
        assert!((slider.value() - expected).abs() < 1e-12, "x={x}");
        assert!(slider.value() >= 0.1 && slider.value() <= 3.0);
    }
}

// ============================================================================
// GPS scenario
// ============================================================================

#[test]
fn test_gps_reference_orbit() {
    let d = time_dilation(1.0, 6371.0, 26_600.0, DilationUnit::MicrosPerDay);
    assert!(d.velocity < 0.0);
    assert!(d.gravitational > 0.0);
    assert!(d.total > 10.0 && d.total < 100.0, "{}", d.total);
    assert!((d.total - (d.gravitational + d.velocity)).abs() < 1e-9);
}

#[test]
fn test_gps_orbit_stays_above_surface() {
    let mut sim = GpsSim::new(GpsConfig::default());
    let max_planet = sim.controls.get(GpsSlider::PlanetRadius).max();
    sim.set(GpsSlider::OrbitRadius, 0.0);
    sim.set(GpsSlider::PlanetRadius, max_planet);
    let readout = sim.readout();
    assert!(readout.orbit_radius_km > readout.planet_radius_km);
    assert!(readout.dilation.gravitational > 0.0);
    assert!(readout.dilation.velocity < 0.0);
}

#[test]
fn test_gps_heavier_planet_drifts_more() {
    let mut sim = GpsSim::default();
    let light = sim.readout().dilation.gravitational;
    sim.set(GpsSlider::Mass, 3.0);
    assert!(sim.readout().dilation.gravitational > light);
}

// ============================================================================
// Presets and configuration
// ============================================================================

#[test]
fn test_presets_round_trip_through_json() {
    let dir = tempfile::tempdir().unwrap();
    for p in PRESETS {
        let config = (p.config)();
        let path = dir.path().join(format!("{}.json", p.name));
        config.save(&path).unwrap();
        assert_eq!(VizConfig::load(&path).unwrap(), config);
    }
    assert_eq!(
        (preset("gps in nanoseconds").unwrap().config)().gps.unit,
        DilationUnit::NanosPerDay
    );
}

// ============================================================================
// Dashboard
// ============================================================================

#[test]
fn test_dashboard_full_interaction() {
    let mut store = SessionStore::default().with_frame_size(100, 100);
    let user = SessionId(42);
    let mut request = DashboardRequest::default();

    assert_eq!(store.handle(user, &request), DashboardResponse::Idle);

    request.action = Some(DashboardAction::Start);
    assert!(matches!(store.handle(user, &request), DashboardResponse::Frame(_)));

    request.action = None;
    request.toggles = DisplayToggles {
        newton_curve: false,
        ..DisplayToggles::default()
    };
    let frame = store.handle(user, &request);
    assert_eq!(frame.image().unwrap().dimensions(), (100, 100));
    assert_eq!(store.session(user).sim().state().trail_newton.len(), 2);

    request.action = Some(DashboardAction::Reset);
    let cleared = store.handle(user, &request);
    assert!(matches!(cleared, DashboardResponse::Cleared(_)));
    assert!(store.session(user).sim().state().trail_newton.is_empty());
}

#[test]
fn test_trail_type_directly() {
    let mut trail = Trail::new(3);
    for i in 0..5 {
        trail.push(DVec2::splat(i as f64));
    }
    let kept: Vec<f64> = trail.iter().map(|p| p.x).collect();
    assert_eq!(kept, vec![2.0, 3.0, 4.0]);
}
