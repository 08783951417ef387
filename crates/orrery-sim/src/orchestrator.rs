//! The per-frame pipeline.

use glam::{Mat4, Vec2, Vec3, Vec4};
use orrery_camera::{CameraEvent, CameraSettings, MoveIntent, Projection};
use orrery_config::Config;
use orrery_input::{Action, InputSnapshot};
use orrery_lighting::LightSet;
use orrery_mesh::SphereMesh;
use orrery_space::roster::SUN;
use orrery_space::{AsteroidField, BeltParams, BodyId, BodyRoster, TextureSlot};
use tracing::{debug, info};

use crate::clock::{FrameTime, TimeSource, WallClock};
use crate::error::SimError;
use crate::frame::{DrawCommand, DrawKind, FrameOutput, LIGHT_MARKER_SCALE};
use crate::state::SimulationState;

/// Construction parameters, usually derived from [`Config`].
#[derive(Debug, Clone, PartialEq)]
pub struct SimParams {
    /// Sphere longitude subdivisions.
    pub sphere_sectors: u32,
    /// Sphere latitude subdivisions.
    pub sphere_stacks: u32,
    /// Belt shape.
    pub belt: BeltParams,
    /// Belt RNG seed.
    pub belt_seed: u64,
    /// Body followed at startup.
    pub start_body: BodyId,
    /// Camera tunables.
    pub camera: CameraSettings,
    /// Aspect and clip planes.
    pub projection: Projection,
    /// Background color.
    pub clear_color: Vec4,
    /// Log each frame at debug level.
    pub trace_frames: bool,
}

impl Default for SimParams {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for SimParams {
    fn from(config: &Config) -> Self {
        let belt = &config.belt;
        let camera = &config.camera;
        Self {
            sphere_sectors: config.render.sphere_sectors,
            sphere_stacks: config.render.sphere_stacks,
            belt: BeltParams {
                count: belt.count,
                inner_radius: belt.inner_radius,
                outer_radius: belt.outer_radius,
                vertical_jitter: belt.vertical_jitter,
                scale_base: belt.scale_base,
                scale_spread: belt.scale_spread,
            },
            belt_seed: belt.seed,
            start_body: BodyId(camera.start_body),
            camera: CameraSettings {
                follow_sensitivity: camera.follow_sensitivity_deg,
                free_sensitivity: camera.free_sensitivity_deg,
                zoom_step: camera.zoom_step,
                free_speed: camera.free_speed,
            },
            projection: Projection::for_viewport(
                config.window.width,
                config.window.height,
                config.render.near,
                config.render.far,
            ),
            clear_color: Vec4::from_array(config.render.clear_color),
            trace_frames: config.debug.trace_frames,
        }
    }
}

/// Owns the scene and turns one input snapshot into one [`FrameOutput`].
///
/// The sphere mesh and asteroid belt are built once here and only read
/// afterwards; all mutable state lives in [`SimulationState`].
pub struct Orchestrator<C: TimeSource = WallClock> {
    mesh: SphereMesh,
    asteroids: AsteroidField,
    state: SimulationState,
    clock: C,
    projection: Projection,
    clear_color: Vec4,
    trace_frames: bool,
}

impl<C: TimeSource> Orchestrator<C> {
    /// Build the scene with the built-in solar system.
    ///
    /// # Errors
    ///
    /// Fails when the mesh or belt parameters are invalid.
    pub fn new(params: SimParams, clock: C) -> Result<Self, SimError> {
        Self::with_roster(params, BodyRoster::solar_system(), clock)
    }

    /// Build the scene around a custom roster.
    ///
    /// # Errors
    ///
    /// Fails when the mesh or belt parameters are invalid.
    pub fn with_roster(params: SimParams, roster: BodyRoster, clock: C) -> Result<Self, SimError> {
        let mesh = SphereMesh::generate(1.0, params.sphere_sectors, params.sphere_stacks)?;
        let asteroids = AsteroidField::from_seed(&params.belt, params.belt_seed)?;
        let state = SimulationState::new(roster, params.start_body, params.camera);

        info!(
            bodies = state.roster.len(),
            asteroids = asteroids.len(),
            triangles = mesh.triangle_count(),
            start_body = ?state.camera.target(),
            "orchestrator ready"
        );

        Ok(Self {
            mesh,
            asteroids,
            state,
            clock,
            projection: params.projection,
            clear_color: params.clear_color,
            trace_frames: params.trace_frames,
        })
    }

    /// Advance one frame.
    ///
    /// Order: clock, kinematics, input edges, camera transitions, look and
    /// zoom, flight, then output assembly.
    pub fn frame(&mut self, input: &InputSnapshot) -> FrameOutput {
        let now = self.clock.now();
        let time = self.state.clock.tick(now);
        self.state
            .kinematics
            .update(&self.state.roster, time.sim_time);
        self.state.actions.advance(*input);

        self.drive_camera(input, &time);

        let output = self.assemble(input);
        if self.trace_frames {
            debug!(
                frame = time.frame,
                sim_time = time.sim_time,
                dt = time.dt,
                following = ?self.state.camera.target(),
                eye = ?output.eye,
                "frame"
            );
        }
        output
    }

    fn drive_camera(&mut self, input: &InputSnapshot, time: &FrameTime) {
        let actions = self.state.actions;
        // Cycling first: a movement edge in the same frame then leaves the
        // retargeted follow camera.
        if actions.just_pressed(Action::NextBody) {
            self.state.apply_camera_event(CameraEvent::NextBody);
        }
        if actions.just_pressed(Action::PreviousBody) {
            self.state.apply_camera_event(CameraEvent::PreviousBody);
        }
        if actions.movement_just_started() {
            self.state.apply_camera_event(CameraEvent::MovementStarted);
        }

        if input.mouse_delta != Vec2::ZERO {
            self.state
                .apply_camera_event(CameraEvent::Look(input.mouse_delta));
        }
        if input.scroll != 0.0 {
            self.state.apply_camera_event(CameraEvent::Scroll(input.scroll));
        }

        let intent = MoveIntent {
            forward: input.move_forward,
            back: input.move_back,
            left: input.move_left,
            right: input.move_right,
        };
        if intent != MoveIntent::default() {
            self.state
                .apply_camera_event(CameraEvent::Move(intent, time.dt as f32));
        }
    }

    fn assemble(&self, input: &InputSnapshot) -> FrameOutput {
        let view = self.state.camera.view(&self.state.camera_context());
        let star = self.state.kinematics.position(SUN).unwrap_or(Vec3::ZERO);

        let mut draws = Vec::with_capacity(self.state.roster.len() + self.asteroids.len());
        for (id, body) in self.state.roster.iter() {
            let Some(body_state) = self.state.kinematics.state(id) else {
                continue;
            };
            draws.push(DrawCommand {
                model: body_state.model_matrix(body.size),
                texture: body.texture,
                kind: DrawKind::Body(id),
            });
        }
        for (i, asteroid) in self.asteroids.iter().enumerate() {
            draws.push(DrawCommand {
                model: asteroid.model_matrix(),
                texture: TextureSlot::Asteroid,
                kind: DrawKind::Asteroid(i),
            });
        }

        FrameOutput {
            view: view.view_matrix(),
            projection: self.projection.matrix(view.fov_deg),
            eye: view.eye,
            lights: LightSet::around_star(star, view.eye, view.front),
            draws,
            light_marker: DrawCommand {
                model: Mat4::from_translation(star)
                    * Mat4::from_scale(Vec3::splat(LIGHT_MARKER_SCALE)),
                texture: TextureSlot::Sun,
                kind: DrawKind::LightMarker,
            },
            clear_color: self.clear_color,
            should_continue: !input.exit,
        }
    }

    /// The one sphere every draw command instances.
    pub fn mesh(&self) -> &SphereMesh {
        &self.mesh
    }

    /// The asteroid belt.
    pub fn asteroids(&self) -> &AsteroidField {
        &self.asteroids
    }

    /// Current simulation state.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// The time source, e.g. to step a [`ManualClock`](crate::ManualClock).
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Change the viewport aspect after a resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection =
            Projection::for_viewport(width, height, self.projection.near, self.projection.far);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn orchestrator() -> Orchestrator<ManualClock> {
        let params = SimParams {
            sphere_sectors: 16,
            sphere_stacks: 12,
            ..SimParams::default()
        };
        Orchestrator::new(params, ManualClock::fixed_step(1.0 / 60.0)).unwrap()
    }

    #[test]
    fn test_params_from_config() {
        let mut config = Config::default();
        config.belt.seed = 7;
        config.camera.start_body = 5;
        config.window.width = 1000;
        config.window.height = 500;
        let params = SimParams::from(&config);
        assert_eq!(params.belt_seed, 7);
        assert_eq!(params.start_body, BodyId(5));
        assert!((params.projection.aspect_ratio - 2.0).abs() < 1e-6);
        assert_eq!(params.belt.count, 200);
    }

    #[test]
    fn test_draw_order_bodies_then_asteroids() {
        let mut orch = orchestrator();
        let out = orch.frame(&InputSnapshot::default());
        assert_eq!(out.draws.len(), 10 + 200);
        for (i, d) in out.draws.iter().take(10).enumerate() {
            assert_eq!(d.kind, DrawKind::Body(BodyId(i)));
        }
        assert_eq!(out.draws[10].kind, DrawKind::Asteroid(0));
        assert_eq!(out.draws[10].texture, TextureSlot::Asteroid);
        assert!(!out.light_marker.is_lit());
    }

    #[test]
    fn test_exit_stops_loop() {
        let mut orch = orchestrator();
        assert!(orch.frame(&InputSnapshot::default()).should_continue);
        let exit = InputSnapshot::default().with(Action::Exit, true);
        assert!(!orch.frame(&exit).should_continue);
    }

    #[test]
    fn test_invalid_mesh_rejected() {
        let params = SimParams {
            sphere_sectors: 2,
            ..SimParams::default()
        };
        assert!(matches!(
            Orchestrator::new(params, ManualClock::new()),
            Err(SimError::Mesh(_))
        ));
    }

    #[test]
    fn test_invalid_belt_rejected() {
        let mut params = SimParams::default();
        params.belt.outer_radius = 1.0;
        assert!(matches!(
            Orchestrator::new(params, ManualClock::new()),
            Err(SimError::Space(_))
        ));
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut orch = orchestrator();
        orch.resize(800, 800);
        let out = orch.frame(&InputSnapshot::default());
        let expected = Projection {
            aspect_ratio: 1.0,
            near: 0.1,
            far: 250.0,
        }
        .matrix(45.0);
        assert!(out.projection.abs_diff_eq(expected, 1e-6));
    }
}
