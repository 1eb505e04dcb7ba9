//! Camera state shared by the web and native frontends.

use crate::constants::*;
use crate::morph::damp;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Orbit camera around the trunk.
///
/// While the tree is assembled it drifts around on its own; user orbit input
/// is added on top. Distance is clamped to `[CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE]`.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub distance: f32,
    pub height: f32,
    auto_speed: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            distance: CAMERA_DISTANCE,
            height: CAMERA_HEIGHT,
            auto_speed: 0.0,
        }
    }

    /// Current auto-rotation speed in rad/s.
    pub fn auto_speed(&self) -> f32 {
        self.auto_speed
    }

    pub fn orbit(&mut self, delta_yaw: f32) {
        self.yaw += delta_yaw;
    }

    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance + delta).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    /// Advance auto-rotation. It eases in when assembled and out when scattered.
    pub fn update(&mut self, assembled: bool, dt: f32) {
        let target = if assembled { CAMERA_AUTO_ROTATE } else { 0.0 };
        self.auto_speed = damp(self.auto_speed, target, CAMERA_AUTO_ROTATE_DAMPING, dt);
        if dt.is_finite() && dt > 0.0 {
            self.yaw += self.auto_speed * dt;
        }
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.distance,
            self.height,
            self.yaw.cos() * self.distance,
        )
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: Vec3::new(0.0, CAMERA_TARGET_Y, 0.0),
            up: Vec3::Y,
            aspect: if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 },
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: 0.1,
            zfar: 200.0,
        }
    }
}
