//! In-flight Request Tracking
//!
//! At most one request per control key. A second request for a busy key is
//! dropped; the key frees itself when the guard goes out of scope.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

type Keys = Rc<RefCell<HashSet<String>>>;

/// Single-threaded: lives on the browser main thread with the UI
#[derive(Clone, Default)]
pub struct InFlight {
    keys: Keys,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `key`, or `None` if a request for it is already running
    pub fn try_begin(&self, key: impl Into<String>) -> Option<InFlightGuard> {
        let key = key.into();
        if !self.keys.borrow_mut().insert(key.clone()) {
            return None;
        }
        Some(InFlightGuard { keys: Rc::clone(&self.keys), key })
    }

    pub fn is_busy(&self, key: &str) -> bool {
        self.keys.borrow().contains(key)
    }
}

/// Releases its key on drop
pub struct InFlightGuard {
    keys: Keys,
    key: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.keys.borrow_mut().remove(&self.key);
    }
}
