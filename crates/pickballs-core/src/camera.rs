//! Camera models the picker can unproject through.
//!
//! The host owns the camera; the picker only needs the world-space eye
//! position and a way to carry an NDC point (plus depth) back into world
//! space. Two implementations are provided: a look-at perspective camera for
//! native use and tests, and a raw matrix camera for hosts (such as a JS
//! scene) that already hold view and projection matrices.

use glam::{Mat4, Vec3};

use crate::constants::{
    DEFAULT_EYE, DEFAULT_FOVY_DEGREES, DEFAULT_LOOK_AT, DEFAULT_ZFAR, DEFAULT_ZNEAR,
};

pub trait Camera {
    /// World-space eye position; the origin of every pick ray.
    fn position(&self) -> Vec3;

    /// Carry an NDC point (x, y in \[-1, 1\], z a clip depth) into world space.
    fn unproject(&self, ndc: Vec3) -> Vec3;
}

/// Forward transforms used only to describe a picked target.
pub trait CameraDiagnostics: Camera {
    /// Carry a world-space point into NDC.
    fn project(&self, world: Vec3) -> Vec3;

    /// Express a world-space point in the camera's local frame.
    fn world_to_camera(&self, world: Vec3) -> Vec3;
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl PerspectiveCamera {
    pub fn looking_at(eye: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect,
            fovy_radians: DEFAULT_FOVY_DEGREES.to_radians(),
            znear: DEFAULT_ZNEAR,
            zfar: DEFAULT_ZFAR,
        }
    }

    /// The demo page camera: 45 degree fov, eye at (8, 18, 8) facing the origin.
    pub fn demo(aspect: f32) -> Self {
        Self::looking_at(DEFAULT_EYE, DEFAULT_LOOK_AT, aspect)
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Camera for PerspectiveCamera {
    fn position(&self) -> Vec3 {
        self.eye
    }

    fn unproject(&self, ndc: Vec3) -> Vec3 {
        self.view_projection().inverse().project_point3(ndc)
    }

}

impl CameraDiagnostics for PerspectiveCamera {
    fn project(&self, world: Vec3) -> Vec3 {
        self.view_projection().project_point3(world)
    }

    fn world_to_camera(&self, world: Vec3) -> Vec3 {
        self.view_matrix().transform_point3(world)
    }
}

/// Camera defined directly by view and projection matrices.
#[derive(Clone, Debug)]
pub struct MatrixCamera {
    view: Mat4,
    projection: Mat4,
}

impl MatrixCamera {
    pub fn new(view: Mat4, projection: Mat4) -> Self {
        Self { view, projection }
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }
}

impl From<&PerspectiveCamera> for MatrixCamera {
    fn from(cam: &PerspectiveCamera) -> Self {
        Self::new(cam.view_matrix(), cam.projection_matrix())
    }
}

impl Camera for MatrixCamera {
    fn position(&self) -> Vec3 {
        self.view.inverse().w_axis.truncate()
    }

    fn unproject(&self, ndc: Vec3) -> Vec3 {
        (self.projection * self.view).inverse().project_point3(ndc)
    }

}

impl CameraDiagnostics for MatrixCamera {
    fn project(&self, world: Vec3) -> Vec3 {
        (self.projection * self.view).project_point3(world)
    }

    fn world_to_camera(&self, world: Vec3) -> Vec3 {
        self.view.transform_point3(world)
    }
}
