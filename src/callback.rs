use std::cell::RefCell;
use std::rc::Rc;

/// Shared, replaceable callback.
///
/// `get` hands out a clone, so a callback may swap itself out while running.
pub struct CallbackSlot<F: Clone> {
    inner: Rc<RefCell<Option<F>>>,
}

impl<F: Clone> Clone for CallbackSlot<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<F: Clone> Default for CallbackSlot<F> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(None)),
        }
    }
}

impl<F: Clone> CallbackSlot<F> {
    pub fn set(&self, callback: F) {
        *self.inner.borrow_mut() = Some(callback);
    }

    pub fn get(&self) -> Option<F> {
        self.inner.borrow().clone()
    }
}
