use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::page::PageRoute;
use super::source::{NavigationError, NavigationSource, Subscription};
use super::token::RouteToken;

/// Holds the active [`RouteToken`] for a navigation source.
pub struct PageRouter {
    source: Rc<dyn NavigationSource>,
    token: RefCell<RouteToken>,
}

impl PageRouter {
    /// Reads the initial token from `source` without waiting for a notification.
    pub fn new(source: Rc<dyn NavigationSource>) -> Rc<Self> {
        let token = source.current_token();
        Rc::new(Self {
            source,
            token: RefCell::new(token),
        })
    }

    pub fn token(&self) -> RouteToken {
        self.token.borrow().clone()
    }

    pub fn route(&self) -> PageRoute {
        self.token.borrow().resolve()
    }

    /// Re-reads the fragment. Returns `true` when the token changed.
    pub fn refresh(&self) -> bool {
        let next = self.source.current_token();
        let mut token = self.token.borrow_mut();
        if *token == next {
            false
        } else {
            *token = next;
            true
        }
    }

    /// Refreshes on every notification from the source and calls `on_update`
    /// with the new token whenever it changed.
    ///
    /// The listener only holds a weak reference, so the source never keeps the
    /// router alive.
    pub fn watch(
        self: &Rc<Self>,
        on_update: impl Fn(&RouteToken) + 'static,
    ) -> Result<Subscription, NavigationError> {
        let router: Weak<Self> = Rc::downgrade(self);
        self.source.subscribe(Rc::new(move || {
            let Some(router) = router.upgrade() else {
                return;
            };
            if router.refresh() {
                on_update(&router.token());
            }
        }))
    }
}
