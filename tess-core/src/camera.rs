//! Per-frame camera transforms.
//!
//! The camera never moves. The model spins about the X axis at one radian per
//! second and the matrices handed to the shaders are rebuilt every frame from
//! the elapsed time and the window aspect ratio.

use std::f32::consts::FRAC_PI_3;

use glam::{Mat3, Mat4, Vec3};

/// The matrices uploaded to the pipeline for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransforms {
    pub projection: Mat4,
    pub modelview: Mat4,
    /// Inverse-transpose of the modelview's upper 3x3, which for this rigid
    /// modelview equals its rotation part.
    pub normal_matrix: Mat3,
}

/// A fixed perspective camera looking at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, -8.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: FRAC_PI_3,
            near: 5.0,
            far: 150.0,
        }
    }
}

/// Returns a usable aspect ratio, falling back to square for degenerate
/// windows (e.g. minimised to zero height).
fn sanitize_aspect(aspect: f32) -> f32 {
    if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    }
}

impl Camera {
    /// Perspective projection for the given aspect ratio.
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, sanitize_aspect(aspect), self.near, self.far)
    }

    /// View matrix.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Builds the transforms for a frame `time` seconds after startup.
    pub fn frame(&self, time: f32, aspect: f32) -> FrameTransforms {
        let modelview = self.view() * Mat4::from_rotation_x(time);
        let normal_matrix = Mat3::from_mat4(modelview).inverse().transpose();

        FrameTransforms {
            projection: self.projection(aspect),
            modelview,
            normal_matrix,
        }
    }
}
