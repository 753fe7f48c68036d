use std::fmt;

use super::page::{Page, PageRoute};

/// Token used when the location has no fragment.
pub const DEFAULT_ROUTE: &str = "#/overview";

/// Identifier of the page currently displayed, as read from the location fragment.
///
/// Any string is a valid token; only the four page fragments resolve to a page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteToken(String);

impl RouteToken {
    /// Builds a token from a raw fragment, substituting [`DEFAULT_ROUTE`] when it is empty.
    pub fn from_fragment(fragment: &str) -> Self {
        if fragment.is_empty() {
            Self::default()
        } else {
            Self(fragment.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn resolve(&self) -> PageRoute {
        Page::from_token(&self.0).map_or(PageRoute::Unmatched, PageRoute::Matched)
    }
}

impl Default for RouteToken {
    fn default() -> Self {
        Self(DEFAULT_ROUTE.to_string())
    }
}

impl fmt::Display for RouteToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
