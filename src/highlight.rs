use fnv::FnvHashSet;
use pickballs_core::{Hit, TargetId};

/// Targets currently lit by a held pointer.
#[derive(Default, Debug, Clone)]
pub struct HighlightSet {
    lit: FnvHashSet<TargetId>,
}

impl HighlightSet {
    /// Light every target in `hits`. Returns whether anything changed.
    pub fn light(&mut self, hits: &[Hit]) -> bool {
        let mut changed = false;
        for h in hits {
            changed |= self.lit.insert(h.id);
        }
        changed
    }

    /// Drop every highlight. Returns whether anything was lit.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.lit.is_empty();
        self.lit.clear();
        had_any
    }

    pub fn is_lit(&self, id: TargetId) -> bool {
        self.lit.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.lit.is_empty()
    }

    /// Lit ids in ascending order, as handed to the JS renderer.
    pub fn ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.lit.iter().map(|id| id.0).collect();
        ids.sort_unstable();
        ids
    }
}
