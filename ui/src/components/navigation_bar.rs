use dioxus::prelude::*;

use crate::routing::Page;
use crate::t;

const NAV_STYLE: &str = "display: flex; gap: 12px; padding: 12px; border-bottom: 1px solid #eee;";

/// Static links to every dashboard page.
///
/// Links are plain fragment `href`s: the browser updates the location and the
/// shell picks the change up from its navigation source, never from here.
#[component]
pub fn NavigationBar() -> Element {
    rsx! {
        nav { id: "navbar", class: "navbar", style: NAV_STYLE,
            for page in Page::ALL {
                a {
                    key: "{page.token()}",
                    class: "navbar__link",
                    href: "{page.token()}",
                    {nav_label(page)}
                }
            }
        }
    }
}

fn nav_label(page: Page) -> String {
    match page {
        Page::Overview => t!("nav-overview"),
        Page::SkillTrends => t!("nav-skills"),
        Page::RisingSkills => t!("nav-rising"),
        Page::RoleClusters => t!("nav-clusters"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_a_distinct_label() {
        crate::i18n::init();
        let mut labels: Vec<String> = Page::ALL.into_iter().map(nav_label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Page::ALL.len());
    }
}
