//! Mouse picking against spheres.
//!
//! A click becomes a ray from the camera eye through the unprojected pixel.
//! Each target is tested by dropping a perpendicular from its center onto
//! the ray's line: the target counts as hit when that perpendicular is no
//! longer than its radius (the boundary counts). The test is a line test, so
//! targets behind the eye can be hit as well; `Hit::along_ray` carries the
//! signed parameter for hosts that care.

use glam::Vec3;
use smallvec::SmallVec;

use crate::camera::{Camera, CameraDiagnostics};
use crate::error::Result;
use crate::ray::Ray;
use crate::target::{Target, TargetId};
use crate::viewport::Viewport;

/// One target the pick ray passed within radius of.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub id: TargetId,
    /// Perpendicular distance from the ray to the target center.
    pub distance: f32,
    /// Signed distance along the ray to the closest approach.
    pub along_ray: f32,
}

/// How many hits a query reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// Only the hit with the smallest perpendicular distance.
    #[default]
    Nearest,
    /// Every hit, in input order.
    All,
}

pub type Hits = SmallVec<[Hit; 8]>;

/// Diagnostics for a picked target, in every space the demo logs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickReport {
    pub id: TargetId,
    pub ndc: Vec3,
    pub camera_space: Vec3,
    pub world: Vec3,
    pub distance: f32,
}

fn validate_all(targets: &[Target]) -> Result<()> {
    targets.iter().try_for_each(Target::validate)
}

fn hits_along<'a>(ray: &'a Ray, targets: &'a [Target]) -> impl Iterator<Item = Hit> + 'a {
    targets.iter().filter_map(move |t| {
        let approach = ray.closest_approach(t.center);
        (approach.distance <= t.radius).then_some(Hit {
            id: t.id,
            distance: approach.distance,
            along_ray: approach.t,
        })
    })
}

/// Pick the target closest to the ray through pixel (`x`, `y`).
///
/// Returns `Ok(None)` when nothing is hit, and always for an empty target
/// set. Among several hits the smallest perpendicular distance wins; exact
/// ties go to the earlier target.
pub fn pick<C: Camera + ?Sized>(
    x: f32,
    y: f32,
    viewport: &Viewport,
    camera: &C,
    targets: &[Target],
) -> Result<Option<Hit>> {
    if targets.is_empty() {
        return Ok(None);
    }
    validate_all(targets)?;
    let ray = Ray::from_viewport(x, y, viewport, camera)?;
    Ok(nearest(hits_along(&ray, targets)))
}

/// Every target the ray through pixel (`x`, `y`) hits, in input order.
pub fn pick_all<C: Camera + ?Sized>(
    x: f32,
    y: f32,
    viewport: &Viewport,
    camera: &C,
    targets: &[Target],
) -> Result<Hits> {
    if targets.is_empty() {
        return Ok(Hits::new());
    }
    validate_all(targets)?;
    let ray = Ray::from_viewport(x, y, viewport, camera)?;
    Ok(hits_along(&ray, targets).collect())
}

/// `pick` or `pick_all` depending on `selection`; at most one hit for `Nearest`.
pub fn pick_with<C: Camera + ?Sized>(
    x: f32,
    y: f32,
    viewport: &Viewport,
    camera: &C,
    targets: &[Target],
    selection: Selection,
) -> Result<Hits> {
    match selection {
        Selection::Nearest => Ok(pick(x, y, viewport, camera, targets)?
            .into_iter()
            .collect()),
        Selection::All => pick_all(x, y, viewport, camera, targets),
    }
}

/// Test a prebuilt ray against `targets`.
pub fn pick_ray(ray: &Ray, targets: &[Target]) -> Result<Option<Hit>> {
    validate_all(targets)?;
    Ok(nearest(hits_along(ray, targets)))
}

fn nearest(hits: impl Iterator<Item = Hit>) -> Option<Hit> {
    hits.fold(None, |best: Option<Hit>, h| match best {
        Some(b) if b.distance <= h.distance => Some(b),
        _ => Some(h),
    })
}

/// Build the diagnostic record for `hit`, if its target is in `targets`.
pub fn report<C: CameraDiagnostics + ?Sized>(
    hit: &Hit,
    targets: &[Target],
    camera: &C,
) -> Option<PickReport> {
    let target = targets.iter().find(|t| t.id == hit.id)?;
    Some(PickReport {
        id: hit.id,
        ndc: camera.project(target.center),
        camera_space: camera.world_to_camera(target.center),
        world: target.center,
        distance: hit.distance,
    })
}
