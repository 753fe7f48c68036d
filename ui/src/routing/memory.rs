use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use super::source::{Listener, NavigationError, NavigationSource, Subscription};

/// In-memory location used off the browser and in tests.
///
/// Clones share the same location and listener table.
#[derive(Clone, Default)]
pub struct MemoryNavigation {
    inner: Rc<RefCell<MemoryLocation>>,
}

#[derive(Default)]
struct MemoryLocation {
    fragment: String,
    listeners: BTreeMap<u64, Listener>,
    next_id: u64,
}

impl MemoryNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fragment(fragment: impl Into<String>) -> Self {
        let nav = Self::new();
        nav.inner.borrow_mut().fragment = fragment.into();
        nav
    }

    /// Changes the fragment and notifies listeners if it differs, like a `hashchange`.
    pub fn set_fragment(&self, fragment: impl Into<String>) {
        let fragment = fragment.into();
        let changed = {
            let mut location = self.inner.borrow_mut();
            if location.fragment == fragment {
                false
            } else {
                location.fragment = fragment;
                true
            }
        };
        if changed {
            self.notify();
        }
    }

    /// Delivers one notification to every listener, whether or not the fragment changed.
    ///
    /// A listener detached by an earlier one during the same dispatch is skipped,
    /// as with `removeEventListener` in a browser.
    pub fn notify(&self) {
        // Snapshot so listeners may read the location or unsubscribe while we iterate.
        let listeners: Vec<(u64, Listener)> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(id, listener)| (*id, listener.clone()))
            .collect();
        for (id, listener) in listeners {
            let registered = self.inner.borrow().listeners.contains_key(&id);
            if registered {
                listener();
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl NavigationSource for MemoryNavigation {
    fn fragment(&self) -> String {
        self.inner.borrow().fragment.clone()
    }

    fn subscribe(&self, listener: Listener) -> Result<Subscription, NavigationError> {
        let id = {
            let mut location = self.inner.borrow_mut();
            let id = location.next_id;
            location.next_id += 1;
            location.listeners.insert(id, listener);
            id
        };

        let location: Weak<RefCell<MemoryLocation>> = Rc::downgrade(&self.inner);
        Ok(Subscription::new(move || {
            if let Some(location) = location.upgrade() {
                location.borrow_mut().listeners.remove(&id);
            }
        }))
    }
}
