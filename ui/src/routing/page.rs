/// The dashboard pages reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Overview,
    SkillTrends,
    RisingSkills,
    RoleClusters,
}

impl Page {
    /// Every page, in navigation-bar order.
    pub const ALL: [Page; 4] = [
        Page::Overview,
        Page::SkillTrends,
        Page::RisingSkills,
        Page::RoleClusters,
    ];

    /// Location fragment that selects this page.
    pub const fn token(self) -> &'static str {
        match self {
            Page::Overview => "#/overview",
            Page::SkillTrends => "#/skills",
            Page::RisingSkills => "#/rising",
            Page::RoleClusters => "#/clusters",
        }
    }

    /// Exact, case-sensitive lookup of a fragment.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.token() == token)
    }
}

/// Outcome of resolving a route token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRoute {
    Matched(Page),
    /// The fragment names no known page; only the navigation bar renders.
    Unmatched,
}

impl PageRoute {
    #[cfg(test)]
    pub(crate) fn page(self) -> Option<Page> {
        match self {
            PageRoute::Matched(page) => Some(page),
            PageRoute::Unmatched => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique_and_resolve_back() {
        for page in Page::ALL {
            assert_eq!(Page::from_token(page.token()), Some(page));
        }
        let mut tokens: Vec<_> = Page::ALL.iter().map(|p| p.token()).collect();
        tokens.sort();
        tokens.dedup();
        assert_eq!(tokens.len(), Page::ALL.len());
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        assert_eq!(Page::from_token("#/Skills"), None);
        assert_eq!(Page::from_token("#/skills/"), None);
        assert_eq!(Page::from_token("/skills"), None);
        assert_eq!(Page::from_token(" #/skills"), None);
        assert_eq!(Page::from_token(""), None);
    }

    #[test]
    fn unmatched_route_has_no_page() {
        assert_eq!(PageRoute::Unmatched.page(), None);
        assert_eq!(
            PageRoute::Matched(Page::RoleClusters).page(),
            Some(Page::RoleClusters)
        );
    }
}
