//! brew - a scene-graph animation demo.
//!
//! Animates a small beer scene: bottles riding a closed Hermite path, an
//! orbiting and a rotating aircraft, a stream pouring onto the path, all
//! over a terrain plane. The scene updates on a fixed cadence and draw
//! submissions go to a tracing-backed sink (GPU presentation is out of
//! scope here).

mod scene;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use glam::{Mat4, Vec4};
use tracing::{debug, error, info, trace};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::WindowId;

use brew_core::Timer;
use brew_platform::{InputState, KeyCode, Window};
use brew_resources::{Mesh, MeshRegistry, PathConfig};
use brew_scene::{Camera, CameraMode, Node, RenderSink, SpotLight, UpdateContext};

/// Window title
const TITLE: &str = "brew";

/// Initial window width
const WIN_WIDTH: u32 = 800;

/// Initial window height
const WIN_HEIGHT: u32 = 600;

/// Scene update cadence
const TICK_INTERVAL: Duration = Duration::from_millis(33);

/// Camera turn step per tick, radians
const CAMERA_ROTATION_DELTA: f32 = std::f32::consts::PI / 100.0;

/// Camera move step per tick
const MOVE_DELTA: f32 = 0.2;

/// World position of the reflector
const REFLECTOR_POSITION: Vec4 = Vec4::new(1.0, 20.0, 1.0, 1.0);

/// Default path configuration file
const DEFAULT_CONFIG: &str = "assets/config.txt";

/// Render sink that traces submissions instead of driving a GPU.
#[derive(Default)]
struct TraceSink {
    frames: u64,
    draw_calls: usize,
}

impl RenderSink for TraceSink {
    fn begin_frame(&mut self, _view: &Mat4, _projection: &Mat4, reflector: Option<&SpotLight>) {
        self.draw_calls = 0;
        trace!(
            "frame {} begin, reflector {}",
            self.frames,
            if reflector.is_some() { "on" } else { "off" }
        );
    }

    fn submit(&mut self, mesh: &Arc<Mesh>, _global: &Mat4, mvp: &Mat4) {
        trace!(
            "submit: {} triangles, clip origin {:?}",
            mesh.triangle_count(),
            mvp.w_axis
        );
        self.draw_calls += 1;
    }

    fn end_frame(&mut self) {
        self.frames += 1;
        if self.frames % 300 == 0 {
            debug!("frame {}: {} draw calls", self.frames, self.draw_calls);
        }
    }
}

struct App {
    window: Option<Window>,
    root: Node,
    camera: Camera,
    input: InputState,
    timer: Timer,
    last_update: Instant,
    animation: bool,
    reflector_on: bool,
    sink: TraceSink,
}

impl App {
    fn new(root: Node) -> Self {
        Self {
            window: None,
            root,
            camera: Camera::new(),
            input: InputState::new(),
            timer: Timer::new(),
            last_update: Instant::now(),
            animation: true,
            reflector_on: false,
            sink: TraceSink::default(),
        }
    }

    /// One-shot key actions, on fresh presses only.
    fn handle_action(&mut self, key: KeyCode, event_loop: &ActiveEventLoop) {
        match key {
            KeyCode::Escape => {
                info!("Exit requested");
                event_loop.exit();
            }
            KeyCode::KeyA => {
                self.animation = !self.animation;
                info!(
                    "Animation {}",
                    if self.animation { "on" } else { "off" }
                );
            }
            KeyCode::KeyR => {
                self.reflector_on = !self.reflector_on;
                info!(
                    "Reflector {}",
                    if self.reflector_on { "on" } else { "off" }
                );
            }
            KeyCode::KeyB => self.switch_camera(CameraMode::StaticClose),
            KeyCode::KeyN => self.switch_camera(CameraMode::StaticFar),
            KeyCode::KeyF => self.switch_camera(CameraMode::Free),
            KeyCode::KeyD => {
                debug!(
                    "camera at {:?}, yaw {}, pitch {}",
                    self.camera.position, self.camera.yaw, self.camera.pitch
                );
            }
            _ => {}
        }
    }

    fn switch_camera(&mut self, mode: CameraMode) {
        info!("Camera: {:?}", mode);
        self.camera.set_mode(mode);
    }

    /// Held-key free camera movement, applied once per tick.
    fn apply_camera_input(&mut self) {
        if !self.camera.is_free() {
            return;
        }
        if self.input.is_key_pressed(KeyCode::ArrowLeft) {
            self.camera.yaw_by(-CAMERA_ROTATION_DELTA);
        }
        if self.input.is_key_pressed(KeyCode::ArrowRight) {
            self.camera.yaw_by(CAMERA_ROTATION_DELTA);
        }
        if self.input.is_key_pressed(KeyCode::PageUp) {
            self.camera.pitch_by(CAMERA_ROTATION_DELTA);
        }
        if self.input.is_key_pressed(KeyCode::PageDown) {
            self.camera.pitch_by(-CAMERA_ROTATION_DELTA);
        }
        if self.input.is_key_pressed(KeyCode::ArrowUp) {
            self.camera.advance(MOVE_DELTA);
        }
        if self.input.is_key_pressed(KeyCode::ArrowDown) {
            self.camera.advance(-MOVE_DELTA);
        }
    }

    fn draw_frame(&mut self) {
        let view = self.camera.view_matrix();
        let projection = self.camera.projection_matrix();
        let reflector = self
            .reflector_on
            .then(|| SpotLight::reflector(&view, REFLECTOR_POSITION));

        self.sink
            .begin_frame(&view, &projection, reflector.as_ref());
        self.root.draw(&view, &projection, &mut self.sink);
        self.sink.end_frame();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            match Window::new(event_loop, WIN_WIDTH, WIN_HEIGHT, TITLE) {
                Ok(window) => {
                    self.camera.set_aspect(window.aspect_ratio());
                    info!("Initialization complete, entering main loop");
                    self.window = Some(window);
                }
                Err(e) => {
                    error!("Failed to create window: {}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(ref mut window) = self.window {
                    window.resize(size.width, size.height);
                    self.camera.set_aspect(window.aspect_ratio());
                }
            }
            WindowEvent::RedrawRequested => {
                self.draw_frame();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if event.state.is_pressed() {
                        self.input.on_key_pressed(key);
                        // fresh presses only; OS auto-repeat is filtered out
                        if self.input.is_key_just_pressed(key) {
                            self.handle_action(key, event_loop);
                        }
                    } else {
                        self.input.on_key_released(key);
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.last_update.elapsed() >= TICK_INTERVAL {
            self.last_update = Instant::now();
            self.apply_camera_input();

            let ctx = UpdateContext {
                time: self.timer.elapsed_secs(),
                animation: self.animation,
            };
            self.root.update(&ctx);

            self.input.begin_frame();
            if let Some(ref window) = self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.last_update + TICK_INTERVAL));
    }
}

fn main() -> Result<()> {
    brew_core::init_logging();
    info!("Starting {}", TITLE);

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let path = Arc::new(PathConfig::load(&config_path).map_err(brew_core::Error::from)?);

    let mut registry = MeshRegistry::new();
    let mut root = scene::build_scene(&path, &mut registry);
    root.update(&UpdateContext::new(0.0));
    root.dump();
    info!("Scene built: {} meshes registered", registry.len());

    let event_loop = EventLoop::new()?;
    let mut app = App::new(root);
    event_loop.run_app(&mut app)?;

    Ok(())
}
