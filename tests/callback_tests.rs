// Host-side tests for the highlight callback slot.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod callback {
    include!("../src/callback.rs");
}

use callback::CallbackSlot;
use std::cell::RefCell;
use std::rc::Rc;

type Handler = Rc<dyn Fn(&[u32])>;

fn fire(slot: &CallbackSlot<Handler>, ids: &[u32]) {
    if let Some(f) = slot.get() {
        f(ids);
    }
}

#[test]
fn empty_slot_yields_nothing() {
    let slot: CallbackSlot<Handler> = CallbackSlot::default();
    assert!(slot.get().is_none());
    fire(&slot, &[1, 2]);
}

#[test]
fn callback_can_replace_itself_while_running() {
    let slot: CallbackSlot<Handler> = CallbackSlot::default();
    let seen = Rc::new(RefCell::new(Vec::<String>::new()));

    let slot_inner = slot.clone();
    let seen_first = seen.clone();
    slot.set(Rc::new(move |ids: &[u32]| {
        seen_first.borrow_mut().push(format!("first {:?}", ids));
        let seen_second = seen_first.clone();
        slot_inner.set(Rc::new(move |ids: &[u32]| {
            seen_second.borrow_mut().push(format!("second {:?}", ids));
        }));
    }));

    fire(&slot, &[3]);
    fire(&slot, &[]);
    assert_eq!(*seen.borrow(), vec!["first [3]", "second []"]);
}

#[test]
fn clones_share_one_slot() {
    let slot: CallbackSlot<Handler> = CallbackSlot::default();
    let other = slot.clone();
    let hits = Rc::new(RefCell::new(0));
    let hits_cb = hits.clone();
    other.set(Rc::new(move |_ids: &[u32]| *hits_cb.borrow_mut() += 1));
    fire(&slot, &[0]);
    assert_eq!(*hits.borrow(), 1);
}
