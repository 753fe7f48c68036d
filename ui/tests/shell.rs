//! Renders the whole shell against an in-memory location.

use dioxus::prelude::*;
use ui::routing::{MemoryNavigation, NavigationHandle, Page};
use ui::Shell;

fn app() -> Element {
    rsx! { Shell {} }
}

fn mount(nav: &MemoryNavigation) -> VirtualDom {
    let mut dom = VirtualDom::new(app).with_root_context(NavigationHandle::new(nav.clone()));
    dom.rebuild_in_place();
    dom
}

fn navigate(dom: &mut VirtualDom, nav: &MemoryNavigation, fragment: &str) {
    dom.in_runtime(|| nav.set_fragment(fragment));
    dom.process_events();
    let _ = dom.render_immediate_to_vec();
}

fn page_sections(html: &str) -> Vec<&'static str> {
    Page::ALL
        .into_iter()
        .map(page_class)
        .filter(|class| html.contains(class))
        .collect()
}

fn page_class(page: Page) -> &'static str {
    match page {
        Page::Overview => "class=\"page page-overview\"",
        Page::SkillTrends => "class=\"page page-skills\"",
        Page::RisingSkills => "class=\"page page-rising\"",
        Page::RoleClusters => "class=\"page page-clusters\"",
    }
}

#[test]
fn starts_on_overview_without_a_fragment() {
    let nav = MemoryNavigation::new();
    let dom = mount(&nav);
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("id=\"navbar\""));
    assert_eq!(page_sections(&html), vec![page_class(Page::Overview)]);
    assert_eq!(html.matches("class=\"page ").count(), 1);
}

#[test]
fn initial_fragment_renders_its_page() {
    let nav = MemoryNavigation::with_fragment("#/skills");
    let dom = mount(&nav);
    let html = dioxus_ssr::render(&dom);

    assert_eq!(page_sections(&html), vec![page_class(Page::SkillTrends)]);
}

#[test]
fn navigation_renders_exactly_one_page() {
    let nav = MemoryNavigation::new();
    let mut dom = mount(&nav);

    for page in Page::ALL.into_iter().rev() {
        navigate(&mut dom, &nav, page.token());
        let html = dioxus_ssr::render(&dom);
        assert_eq!(page_sections(&html), vec![page_class(page)], "{}", page.token());
        assert_eq!(html.matches("class=\"page ").count(), 1);
    }
}

#[test]
fn unknown_fragment_renders_only_the_navbar() {
    let nav = MemoryNavigation::new();
    let mut dom = mount(&nav);

    navigate(&mut dom, &nav, "#/unknown");
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("id=\"navbar\""));
    assert_eq!(html.matches("class=\"navbar__link\"").count(), Page::ALL.len());
    assert!(page_sections(&html).is_empty());
    assert!(!html.contains("class=\"page "));
}

#[test]
fn dropping_the_shell_releases_its_listener() {
    let nav = MemoryNavigation::new();
    let dom = mount(&nav);
    assert_eq!(nav.listener_count(), 1);

    drop(dom);
    assert_eq!(nav.listener_count(), 0);

    nav.set_fragment("#/clusters");
    assert_eq!(nav.listener_count(), 0);
}
