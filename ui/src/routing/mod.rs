//! Fragment-based routing for the dashboard shell.
//!
//! The active page is derived from the location fragment (`#/overview`,
//! `#/skills`, ...). Hosts provide a [`NavigationSource`]; the
//! [`PageRouter`] re-reads it on every navigation-change notification and
//! resolves the token to a [`PageRoute`].

mod page;
pub use page::{Page, PageRoute};

mod token;
pub use token::{RouteToken, DEFAULT_ROUTE};

mod source;
pub use source::{Listener, NavigationError, NavigationHandle, NavigationSource, Subscription};

mod memory;
pub use memory::MemoryNavigation;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
pub use browser::BrowserNavigation;

mod router;
pub use router::PageRouter;
