use glam::Vec3;

use crate::camera::Camera;
use crate::constants::{DEGENERATE_RAY_EPSILON, UNPROJECT_DEPTH};
use crate::error::{PickError, Result};
use crate::viewport::Viewport;

/// World-space ray with a unit-length direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Closest approach of a ray's supporting line to a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Approach {
    /// Signed distance along the ray to the foot of the perpendicular.
    pub t: f32,
    /// Distance from the foot of the perpendicular to the point.
    pub distance: f32,
}

impl Ray {
    /// Ray from `origin` passing through `through`.
    pub fn through(origin: Vec3, through: Vec3) -> Result<Self> {
        let span = through - origin;
        let len = span.length();
        if !len.is_finite() || len < DEGENERATE_RAY_EPSILON {
            return Err(PickError::DegenerateRay);
        }
        Ok(Self {
            origin,
            direction: span / len,
        })
    }

    /// Compute a world-space ray from pixel coordinates on `viewport`.
    pub fn from_viewport<C: Camera + ?Sized>(
        x: f32,
        y: f32,
        viewport: &Viewport,
        camera: &C,
    ) -> Result<Self> {
        let ndc = viewport.to_ndc(x, y)?;
        let on_ray = camera.unproject(ndc.extend(UNPROJECT_DEPTH));
        let ray = Self::through(camera.position(), on_ray)?;
        log::trace!(
            "[ray] px=({:.1},{:.1}) ndc=({:.3},{:.3}) origin={:?} dir={:?}",
            x,
            y,
            ndc.x,
            ndc.y,
            ray.origin,
            ray.direction
        );
        Ok(ray)
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Project `point` onto the ray's line and measure the gap.
    #[inline]
    pub fn closest_approach(&self, point: Vec3) -> Approach {
        let t = (point - self.origin).dot(self.direction);
        let distance = (self.at(t) - point).length();
        Approach { t, distance }
    }
}
