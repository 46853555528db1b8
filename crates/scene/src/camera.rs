//! Camera with static presets and a free-fly mode.

use glam::{Mat4, Vec3};

/// Pitch is clamped just short of pi/2 so the view direction stays finite.
pub const PITCH_LIMIT: f32 = 1.55;

/// Which viewpoint is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    /// Fixed viewpoint near the bottles.
    StaticClose,
    /// Fixed viewpoint overlooking the whole terrain.
    StaticFar,
    /// Keyboard-driven free flight.
    Free,
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// Vertical field of view in radians
    pub fov_y: f32,
    /// Width / height of the viewport
    pub aspect: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fov_y: 60.0_f32.to_radians(),
            aspect: 4.0 / 3.0,
            near: 1.0,
            far: 10_000.0,
        }
    }
}

/// A yaw/pitch camera.
///
/// Static modes pin the camera to a preset placement; free mode responds
/// to movement input.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Position in world space
    pub position: Vec3,
    /// Heading angle in the XZ plane, radians
    pub yaw: f32,
    /// Elevation angle, radians, clamped to [`PITCH_LIMIT`]
    pub pitch: f32,
    /// Projection settings
    pub projection: Projection,
    mode: CameraMode,
}

impl Default for Camera {
    fn default() -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            projection: Projection::default(),
            mode: CameraMode::StaticClose,
        };
        camera.set_mode(CameraMode::StaticClose);
        camera
    }
}

impl Camera {
    /// Create a camera at the close static preset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch viewpoint. Static modes reset position and angles to their
    /// preset; free mode takes over wherever the camera currently is.
    pub fn set_mode(&mut self, mode: CameraMode) {
        match mode {
            CameraMode::StaticClose => {
                self.position = Vec3::new(-4.0, 12.0, -4.0);
                self.yaw = -6.0;
                self.pitch = -1.0;
            }
            CameraMode::StaticFar => {
                self.position = Vec3::new(83.0, 21.0, 83.0);
                self.yaw = -8.7;
                self.pitch = -0.2;
            }
            CameraMode::Free => {}
        }
        self.mode = mode;
    }

    /// Active viewpoint.
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Whether the camera responds to movement input.
    pub fn is_free(&self) -> bool {
        self.mode == CameraMode::Free
    }

    /// View direction derived from yaw and pitch.
    ///
    /// Pitch enters via tan, so horizontal speed stays constant as the
    /// camera looks up or down; the pitch clamp keeps the value finite.
    pub fn direction(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), self.pitch.tan(), self.yaw.sin())
    }

    /// Turn left/right (free mode only).
    pub fn yaw_by(&mut self, delta: f32) {
        if self.is_free() {
            self.yaw += delta;
        }
    }

    /// Look up/down, clamped (free mode only).
    pub fn pitch_by(&mut self, delta: f32) {
        if self.is_free() {
            self.pitch = (self.pitch + delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    }

    /// Move along the view direction (free mode only).
    pub fn advance(&mut self, distance: f32) {
        if self.is_free() {
            self.position += distance * self.direction();
        }
    }

    /// Update the aspect ratio, e.g. after a window resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.projection.aspect = aspect;
    }

    /// View matrix looking along the current direction.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.direction(), Vec3::Y)
    }

    /// Perspective projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        let p = self.projection;
        Mat4::perspective_rh(p.fov_y, p.aspect, p.near, p.far)
    }
}
