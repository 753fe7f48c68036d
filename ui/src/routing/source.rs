use std::fmt;
use std::rc::Rc;

use thiserror::Error;

use super::token::RouteToken;

/// Callback invoked once per navigation-change notification.
pub type Listener = Rc<dyn Fn()>;

/// Failure to attach to a host's navigation channel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("browser window is unavailable")]
    WindowUnavailable,
    #[error("could not register navigation listener: {0}")]
    Listen(String),
}

/// A host that exposes the location fragment and notifies when it changes.
///
/// Everything runs on the UI thread, so listeners are neither `Send` nor `Sync`.
pub trait NavigationSource {
    /// Raw fragment including the leading `#`, or an empty string when absent.
    fn fragment(&self) -> String;

    /// Registers `listener` for navigation-change notifications until the
    /// returned [`Subscription`] is released.
    fn subscribe(&self, listener: Listener) -> Result<Subscription, NavigationError>;

    /// Current fragment as a route token, defaulting when empty.
    fn current_token(&self) -> RouteToken {
        RouteToken::from_fragment(&self.fragment())
    }
}

/// Registration handle returned by [`NavigationSource::subscribe`].
///
/// The listener is detached when the handle is dropped or [`unsubscribe`](Self::unsubscribe)d.
#[must_use = "dropping a Subscription detaches its listener immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Shareable navigation source, handed to the shell through context.
#[derive(Clone)]
pub struct NavigationHandle(Rc<dyn NavigationSource>);

impl NavigationHandle {
    pub fn new(source: impl NavigationSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    pub fn source(&self) -> Rc<dyn NavigationSource> {
        self.0.clone()
    }

    /// The browser location on wasm32, an in-memory location elsewhere.
    pub fn platform_default() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(super::BrowserNavigation::new())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(super::MemoryNavigation::new())
        }
    }
}

impl fmt::Debug for NavigationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NavigationHandle")
            .field(&self.0.fragment())
            .finish()
    }
}
