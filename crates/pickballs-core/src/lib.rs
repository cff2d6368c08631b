//! Screen-space picking of spherical targets.
//!
//! These types avoid referencing platform-specific APIs and are suitable for
//! both native and web targets. The web front-end feeds them the canvas size,
//! the host camera and the scene's balls on every pointer-down.

pub mod camera;
pub mod constants;
pub mod error;
pub mod picker;
pub mod ray;
pub mod target;
pub mod viewport;

pub use camera::{Camera, CameraDiagnostics, MatrixCamera, PerspectiveCamera};
pub use constants::*;
pub use error::PickError;
pub use picker::{pick, pick_all, pick_ray, pick_with, report, Hit, Hits, PickReport, Selection};
pub use ray::{Approach, Ray};
pub use target::{default_targets, targets_from_packed, Target, TargetId, TargetRecord};
pub use viewport::Viewport;
