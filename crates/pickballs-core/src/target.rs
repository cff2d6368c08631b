use std::fmt;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::constants::DEFAULT_BALLS;
use crate::error::{PickError, Result};

/// Stable handle a host uses to map pick results back to its drawables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A pickable sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub id: TargetId,
    pub center: Vec3,
    pub radius: f32,
}

impl Target {
    /// Build a target, rejecting non-positive or non-finite radii.
    pub fn new(id: TargetId, center: Vec3, radius: f32) -> Result<Self> {
        let target = Self { id, center, radius };
        target.validate()?;
        Ok(target)
    }

    pub fn validate(&self) -> Result<()> {
        let radius_ok = self.radius.is_finite() && self.radius > 0.0;
        if radius_ok && self.center.is_finite() {
            Ok(())
        } else {
            Err(PickError::InvalidTarget {
                id: self.id,
                radius: self.radius,
            })
        }
    }
}

/// Wire layout of one target in a packed `[x, y, z, r, x, y, z, r, ...]`
/// float buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct TargetRecord {
    pub center: [f32; 3],
    pub radius: f32,
}

/// Decode a packed float buffer into targets whose ids are their indices.
pub fn targets_from_packed(packed: &[f32]) -> Result<Vec<Target>> {
    let records: &[TargetRecord] = bytemuck::try_cast_slice(packed)
        .map_err(|_| PickError::MalformedTargetBuffer { len: packed.len() })?;
    records
        .iter()
        .enumerate()
        .map(|(i, r)| Target::new(TargetId(i as u32), Vec3::from(r.center), r.radius))
        .collect()
}

/// The fixed ten-ball layout used before a host supplies its own scene.
pub fn default_targets() -> Vec<Target> {
    DEFAULT_BALLS
        .iter()
        .enumerate()
        .map(|(i, b)| Target {
            id: TargetId(i as u32),
            center: Vec3::new(b[0], b[1], b[2]),
            radius: b[3],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BALL_MAX_RADIUS, BALL_MIN_RADIUS, OUTER_RADIUS};

    #[test]
    fn rejects_bad_radius() {
        for r in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                Target::new(TargetId(3), Vec3::ZERO, r),
                Err(PickError::InvalidTarget { id: TargetId(3), .. })
            ));
        }
    }

    #[test]
    fn rejects_non_finite_center() {
        let t = Target::new(TargetId(0), Vec3::new(f32::NAN, 0.0, 0.0), 1.0);
        assert!(t.is_err());
    }

    #[test]
    fn packed_buffer_decodes_in_order() {
        let packed = [1.0, 2.0, 3.0, 0.5, -1.0, 0.0, 4.0, 1.5];
        let targets = targets_from_packed(&packed).unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].id, TargetId(0));
        assert_eq!(targets[0].center, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(targets[1].id, TargetId(1));
        assert_eq!(targets[1].radius, 1.5);
    }

    #[test]
    fn packed_buffer_with_ragged_length_fails() {
        let packed = [1.0, 2.0, 3.0, 0.5, 9.0];
        assert_eq!(
            targets_from_packed(&packed),
            Err(PickError::MalformedTargetBuffer { len: 5 })
        );
    }

    #[test]
    fn packed_buffer_propagates_invalid_radius() {
        let packed = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0];
        assert!(matches!(
            targets_from_packed(&packed),
            Err(PickError::InvalidTarget { id: TargetId(1), .. })
        ));
    }

    #[test]
    fn default_layout_respects_bounds() {
        let targets = default_targets();
        assert_eq!(targets.len(), 10);
        for t in &targets {
            assert!(t.validate().is_ok());
            assert!(t.center.length() <= OUTER_RADIUS);
            assert!((BALL_MIN_RADIUS..=BALL_MAX_RADIUS).contains(&t.radius));
        }
    }
}
