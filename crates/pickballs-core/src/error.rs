use thiserror::Error;

use crate::target::TargetId;

/// Ways a pick query can be rejected.
///
/// Every variant is a precondition violation on the inputs; the query is
/// stateless, so callers may simply retry with corrected values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PickError {
    #[error("viewport coordinate ({x}, {y}) is outside the {width}x{height} surface")]
    OutOfBoundsCoordinate {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },

    #[error("camera position coincides with the unprojected point; ray direction is undefined")]
    DegenerateRay,

    #[error("target {id} is invalid (radius {radius} must be finite and > 0, center must be finite)")]
    InvalidTarget { id: TargetId, radius: f32 },

    #[error("packed target buffer has {len} floats, expected a multiple of 4")]
    MalformedTargetBuffer { len: usize },
}

pub type Result<T> = std::result::Result<T, PickError>;
