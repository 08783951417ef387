//! Window creation and event handling via winit.
//!
//! [`OrreryApp`] implements winit's [`ApplicationHandler`]: window and device
//! events feed the input trackers, and every redraw samples them, runs one
//! orchestrator frame, and hands the result to the [`FrameSink`].

use std::sync::Arc;

use orrery_config::WindowConfig;
use orrery_input::{InputMap, InputSnapshot, KeyboardState, MouseState};
use orrery_sim::{FrameSink, Orchestrator, TimeSource, WallClock};
use tracing::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::error::AppError;

/// Attributes for the main window.
pub fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(
            f64::from(config.width),
            f64::from(config.height),
        ))
}

/// The windowed application.
pub struct OrreryApp<S: FrameSink, C: TimeSource = WallClock> {
    window_config: WindowConfig,
    input_map: InputMap,
    orchestrator: Orchestrator<C>,
    sink: S,
    window: Option<Arc<Window>>,
    keyboard: KeyboardState,
    mouse: MouseState,
    failure: Option<AppError>,
}

impl<S: FrameSink, C: TimeSource> OrreryApp<S, C> {
    /// Wrap a built orchestrator. The window opens on the first resume.
    pub fn new(
        window_config: WindowConfig,
        input_map: InputMap,
        orchestrator: Orchestrator<C>,
        sink: S,
    ) -> Self {
        Self {
            window_config,
            input_map,
            orchestrator,
            sink,
            window: None,
            keyboard: KeyboardState::new(),
            mouse: MouseState::new(),
            failure: None,
        }
    }

    /// Keyboard tracker, for feeding synthetic events.
    pub fn keyboard_mut(&mut self) -> &mut KeyboardState {
        &mut self.keyboard
    }

    /// Mouse tracker.
    pub fn mouse_mut(&mut self) -> &mut MouseState {
        &mut self.mouse
    }

    /// The frame consumer.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Sample input, run one frame, and submit it.
    ///
    /// Returns `Ok(false)` once exit was requested.
    ///
    /// # Errors
    ///
    /// Propagates sink failures.
    pub fn step(&mut self) -> Result<bool, AppError> {
        let snapshot = InputSnapshot::sample(&self.input_map, &self.keyboard, &self.mouse);
        let output = self.orchestrator.frame(&snapshot);
        self.sink.submit(&output)?;

        self.keyboard.clear_transients();
        self.mouse.clear_transients();
        Ok(output.should_continue)
    }

    fn open_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let window = Arc::new(event_loop.create_window(window_attributes(&self.window_config))?);

        let size = window.inner_size();
        self.orchestrator.resize(size.width, size.height);
        self.mouse.set_grabbed(&window, true);
        self.sink.prepare(self.orchestrator.mesh())?;

        info!(
            width = size.width,
            height = size.height,
            scale = window.scale_factor(),
            "window opened"
        );
        window.request_redraw();
        self.window = Some(window);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AppError) {
        error!(%err, "stopping");
        self.failure = Some(err);
        event_loop.exit();
    }

    fn set_focus(&mut self, focused: bool) {
        if !focused {
            self.keyboard.release_all();
        }
        if let Some(window) = &self.window {
            self.mouse.set_grabbed(window, focused);
        }
        debug!(focused, "focus changed");
    }
}

impl<S: FrameSink, C: TimeSource> ApplicationHandler for OrreryApp<S, C> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none()
            && let Err(err) = self.open_window(event_loop)
        {
            self.fail(event_loop, err);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                self.orchestrator.resize(size.width, size.height);
                debug!(width = size.width, height = size.height, "resized");
            }
            WindowEvent::Focused(focused) => self.set_focus(focused),
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard.process_event(&event);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse.on_cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.mouse.on_scroll(delta);
            }
            WindowEvent::RedrawRequested => match self.step() {
                Ok(true) => {
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
                Ok(false) => {
                    info!("exit requested, shutting down");
                    event_loop.exit();
                }
                Err(err) => self.fail(event_loop, err),
            },
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.mouse.on_raw_motion(delta.0, delta.1);
        }
    }
}

/// Open the window and run until exit. Blocks.
///
/// # Errors
///
/// Returns the first failure that stopped the loop.
pub fn run<S: FrameSink>(
    window_config: WindowConfig,
    input_map: InputMap,
    orchestrator: Orchestrator<WallClock>,
    sink: S,
) -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    let mut app = OrreryApp::new(window_config, input_map, orchestrator, sink);
    event_loop.run_app(&mut app)?;

    match app.failure.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_input::RawKeyEvent;
    use orrery_sim::{FrameOutput, ManualClock, SimError, SimParams};
    use winit::dpi::Size;
    use winit::keyboard::KeyCode;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<FrameOutput>,
    }

    impl FrameSink for Recorder {
        fn submit(&mut self, frame: &FrameOutput) -> Result<(), SimError> {
            self.frames.push(frame.clone());
            Ok(())
        }
    }

    fn app() -> OrreryApp<Recorder, ManualClock> {
        let params = SimParams {
            sphere_sectors: 8,
            sphere_stacks: 6,
            ..SimParams::default()
        };
        let orchestrator = Orchestrator::new(params, ManualClock::fixed_step(1.0 / 60.0)).unwrap();
        OrreryApp::new(
            WindowConfig::default(),
            InputMap::default(),
            orchestrator,
            Recorder::default(),
        )
    }

    #[test]
    fn test_window_attributes_from_config() {
        let attrs = window_attributes(&WindowConfig::default());
        assert_eq!(attrs.title, "Orrery");
        assert_eq!(
            attrs.inner_size,
            Some(Size::Logical(LogicalSize::new(1280.0, 720.0)))
        );
    }

    #[test]
    fn test_escape_stops_loop() {
        let mut app = app();
        assert!(app.step().unwrap());
        app.keyboard_mut()
            .process_raw(RawKeyEvent::press(KeyCode::Escape));
        assert!(!app.step().unwrap());
        assert_eq!(app.sink().frames.len(), 2);
    }

    #[test]
    fn test_tap_between_frames_still_cycles() {
        let mut app = app();
        app.step().unwrap();
        app.keyboard_mut().process_raw(RawKeyEvent::press(KeyCode::KeyE));
        app.keyboard_mut()
            .process_raw(RawKeyEvent::release(KeyCode::KeyE));
        app.step().unwrap();
        let target = app.orchestrator.state().camera.target();
        assert_eq!(target.map(|id| id.index()), Some(4));
    }

    #[test]
    fn test_focus_loss_releases_keys() {
        let mut app = app();
        app.keyboard_mut().process_raw(RawKeyEvent::press(KeyCode::KeyW));
        app.step().unwrap();
        app.set_focus(false);
        app.step().unwrap();
        let last = app.sink().frames.last().unwrap().eye;
        app.step().unwrap();
        let next = app.sink().frames.last().unwrap().eye;
        // Free camera with nothing held stays put.
        assert_eq!(last, next);
    }
}
