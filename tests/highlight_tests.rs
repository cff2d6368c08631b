// Host-side tests for the highlight set.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod highlight {
    include!("../src/highlight.rs");
}

use highlight::HighlightSet;
use pickballs_core::{Hit, TargetId};

fn hit(id: u32) -> Hit {
    Hit {
        id: TargetId(id),
        distance: 0.1,
        along_ray: 5.0,
    }
}

#[test]
fn lighting_reports_changes_only_once() {
    let mut set = HighlightSet::default();
    assert!(set.light(&[hit(3)]));
    assert!(!set.light(&[hit(3)]));
    assert!(set.light(&[hit(3), hit(1)]));
    assert!(set.is_lit(TargetId(1)));
    assert!(!set.is_lit(TargetId(2)));
}

#[test]
fn ids_are_sorted() {
    let mut set = HighlightSet::default();
    set.light(&[hit(7), hit(2), hit(5)]);
    assert_eq!(set.ids(), vec![2, 5, 7]);
}

#[test]
fn clear_reports_whether_anything_was_lit() {
    let mut set = HighlightSet::default();
    assert!(!set.clear());
    set.light(&[hit(0)]);
    assert!(set.clear());
    assert!(set.is_empty());
    assert!(set.ids().is_empty());
}

#[test]
fn empty_hits_change_nothing() {
    let mut set = HighlightSet::default();
    assert!(!set.light(&[]));
    assert!(set.is_empty());
}
