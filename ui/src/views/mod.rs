//! Dashboard pages. Each is a self-contained, no-argument view.

mod overview;
pub use overview::Overview;

mod skill_trends;
pub use skill_trends::SkillTrends;

mod rising_skills;
pub use rising_skills::RisingSkills;

mod role_clusters;
pub use role_clusters::RoleClusters;

use dioxus::prelude::*;

use crate::routing::{Page, PageRoute};

impl Page {
    /// Renders this page's view.
    pub fn render(self) -> Element {
        match self {
            Page::Overview => rsx! { Overview {} },
            Page::SkillTrends => rsx! { SkillTrends {} },
            Page::RisingSkills => rsx! { RisingSkills {} },
            Page::RoleClusters => rsx! { RoleClusters {} },
        }
    }
}

impl PageRoute {
    /// Renders the matched page, or nothing for an unmatched route.
    pub fn render(self) -> Element {
        match self {
            PageRoute::Matched(page) => page.render(),
            PageRoute::Unmatched => rsx! {},
        }
    }
}
