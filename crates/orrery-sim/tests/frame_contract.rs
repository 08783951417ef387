//! Drives the orchestrator through scripted input and checks what a
//! renderer would receive.

use glam::{Vec2, Vec3};
use orrery_camera::CameraState;
use orrery_input::{Action, InputSnapshot};
use orrery_mesh::SphereMesh;
use orrery_sim::{
    DrawKind, FrameOutput, FrameSink, LIGHT_MARKER_SCALE, ManualClock, Orchestrator, SimError,
    SimParams,
};
use orrery_space::roster::{EARTH, MOON, SUN};
use orrery_space::{BodyId, compute_position};

const DT: f64 = 1.0 / 60.0;

fn orchestrator() -> Orchestrator<ManualClock> {
    let params = SimParams {
        sphere_sectors: 24,
        sphere_stacks: 16,
        ..SimParams::default()
    };
    Orchestrator::new(params, ManualClock::fixed_step(DT)).unwrap()
}

fn idle() -> InputSnapshot {
    InputSnapshot::default()
}

fn press(action: Action) -> InputSnapshot {
    idle().with(action, true)
}

fn followed(orch: &Orchestrator<ManualClock>) -> Option<BodyId> {
    orch.state().camera.target()
}

#[derive(Default)]
struct Recorder {
    prepared_vertices: usize,
    frames: Vec<FrameOutput>,
}

impl FrameSink for Recorder {
    fn prepare(&mut self, mesh: &SphereMesh) -> Result<(), SimError> {
        self.prepared_vertices = mesh.vertex_count();
        Ok(())
    }

    fn submit(&mut self, frame: &FrameOutput) -> Result<(), SimError> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

#[test]
fn test_starts_following_earth() {
    let mut orch = orchestrator();
    let out = orch.frame(&idle());
    assert_eq!(followed(&orch), Some(EARTH));

    let earth = out.draws[EARTH.index()].center();
    let to_earth = (earth - out.eye).normalize();
    let forward = -out.view.row(2).truncate();
    assert!((to_earth - forward).length() < 1e-4);
}

#[test]
fn test_followed_body_projects_to_screen_center() {
    let mut orch = orchestrator();
    orch.frame(&press(Action::NextBody));
    for _ in 0..5 {
        let out = orch.frame(&idle());
        let moon = out.draws[MOON.index()].center();
        let clip = out.view_projection() * moon.extend(1.0);
        assert!(clip.w > 0.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4, "ndc {ndc}");
        assert!((-1.0..1.0).contains(&ndc.z));
    }
}

#[test]
fn test_stalled_clock_is_clamped() {
    let mut orch = orchestrator();
    orch.frame(&idle());
    orch.clock_mut().advance(10.0);
    orch.frame(&idle());
    let sim_time = orch.state().clock.sim_time();
    assert!((sim_time - (DT + 0.25)).abs() < 1e-9, "sim_time {sim_time}");
}

#[test]
fn test_star_fixed_and_lights_follow_it() {
    let mut orch = orchestrator();
    for _ in 0..30 {
        let out = orch.frame(&idle());
        assert_eq!(out.draws[SUN.index()].center(), Vec3::ZERO);
        assert_eq!(out.lights.primary.position, Vec3::ZERO);
        assert_eq!(out.lights.view_position, out.eye);
        assert_eq!(out.light_marker.center(), Vec3::ZERO);
        let scale = out.light_marker.model.x_axis.truncate().length();
        assert!((scale - LIGHT_MARKER_SCALE).abs() < 1e-6);
    }
}

#[test]
fn test_moon_draw_tracks_earth() {
    let mut orch = orchestrator();
    for _ in 0..10 {
        let out = orch.frame(&idle());
        let earth = out.draws[EARTH.index()].center();
        let moon = out.draws[MOON.index()].center();
        let t = orch.state().kinematics.time();
        let moon_body = orch.state().roster.get(MOON).unwrap();
        assert!((moon - compute_position(moon_body, t, earth)).length() < 1e-5);
    }
}

#[test]
fn test_cycling_is_edge_triggered() {
    let mut orch = orchestrator();
    orch.frame(&press(Action::NextBody));
    assert_eq!(followed(&orch), Some(BodyId(4)));

    // Holding the key does not keep cycling.
    for _ in 0..20 {
        orch.frame(&press(Action::NextBody));
    }
    assert_eq!(followed(&orch), Some(BodyId(4)));

    orch.frame(&idle());
    orch.frame(&press(Action::PreviousBody));
    assert_eq!(followed(&orch), Some(EARTH));
}

#[test]
fn test_full_cycle_returns_to_start() {
    let mut orch = orchestrator();
    for _ in 0..9 {
        orch.frame(&press(Action::NextBody));
        orch.frame(&idle());
    }
    assert_eq!(followed(&orch), Some(EARTH));
}

#[test]
fn test_movement_switches_to_free_and_flies() {
    let mut orch = orchestrator();
    let before = orch.frame(&idle()).eye;

    let out = orch.frame(&press(Action::MoveForward));
    assert!(matches!(orch.state().camera, CameraState::Free(_)));
    let moved = (out.eye - before).length();
    assert!(moved > 0.0 && moved < 0.1, "moved {moved}");

    let mut eye = out.eye;
    for _ in 0..59 {
        eye = orch.frame(&press(Action::MoveForward)).eye;
    }
    // A second of flight at the default speed, give or take the orbit drift
    // of the starting point.
    assert!(((eye - before).length() - 2.5).abs() < 0.1);
    assert!(followed(&orch).is_none());
}

#[test]
fn test_next_body_returns_from_free() {
    let mut orch = orchestrator();
    orch.frame(&press(Action::MoveLeft));
    orch.frame(&idle());
    orch.frame(&press(Action::NextBody));
    assert_eq!(followed(&orch), Some(BodyId(4)));
}

#[test]
fn test_cycle_and_move_in_same_frame_ends_free() {
    let mut orch = orchestrator();
    orch.frame(&idle());
    orch.frame(&press(Action::MoveForward).with(Action::NextBody, true));

    let CameraState::Free(free) = &orch.state().camera else {
        panic!("expected free");
    };
    assert_eq!(free.last_target, BodyId(4));

    // Cycling again resumes after the body picked in that frame.
    orch.frame(&idle());
    orch.frame(&press(Action::NextBody));
    assert_eq!(followed(&orch), Some(BodyId(5)));
}

#[test]
fn test_extreme_mouse_and_scroll_stay_in_range() {
    let mut orch = orchestrator();
    let wild = InputSnapshot {
        mouse_delta: Vec2::new(1e7, -1e7),
        scroll: 1e6,
        ..idle()
    };
    for _ in 0..5 {
        let out = orch.frame(&wild);
        assert!(out.eye.is_finite());
        assert!(out.view.is_finite());
    }
    let CameraState::Follow(follow) = &orch.state().camera else {
        panic!("expected follow");
    };
    assert!(follow.orbit_pitch <= 89.0);
    assert!(follow.orbit_distance >= 0.5);

    orch.frame(&press(Action::MoveForward));
    let wide = InputSnapshot {
        scroll: -1e6,
        mouse_delta: Vec2::new(f32::NAN, 3.0),
        ..idle()
    };
    let out = orch.frame(&wide);
    assert!(out.projection.is_finite());
    let CameraState::Free(free) = &orch.state().camera else {
        panic!("expected free");
    };
    assert_eq!(free.fov, 45.0);
}

#[test]
fn test_sink_receives_every_frame() {
    let mut orch = orchestrator();
    let mut sink = Recorder::default();
    sink.prepare(orch.mesh()).unwrap();

    let script = [idle(), press(Action::NextBody), idle(), press(Action::Exit)];
    for input in &script {
        let out = orch.frame(input);
        sink.submit(&out).unwrap();
        if !out.should_continue {
            break;
        }
    }

    assert_eq!(sink.prepared_vertices, 25 * 17);
    assert_eq!(sink.frames.len(), 4);
    assert!(sink.frames[..3].iter().all(|f| f.should_continue));
    assert!(!sink.frames[3].should_continue);
    for frame in &sink.frames {
        assert_eq!(frame.body_draws().count(), 10);
        assert_eq!(frame.asteroid_draws().count(), 200);
        assert!(matches!(frame.light_marker.kind, DrawKind::LightMarker));
    }
}

#[test]
fn test_same_seed_same_frames() {
    let mut a = orchestrator();
    let mut b = orchestrator();
    let script = [idle(), press(Action::MoveForward), press(Action::NextBody), idle()];
    for input in &script {
        let fa = a.frame(input);
        let fb = b.frame(input);
        assert_eq!(fa.draws, fb.draws);
        assert_eq!(fa.view, fb.view);
    }
}
