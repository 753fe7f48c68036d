//! Sanity checks for the stylesheet bundled with the web build.
//!
//! `asset!` only fails when the file is missing, so a truncated or emptied
//! stylesheet would otherwise go unnoticed until the page renders unstyled.

const MAIN_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));

#[test]
fn main_css_is_not_empty() {
    assert!(
        !MAIN_CSS.trim().is_empty(),
        "assets/main.css is empty. If this is intentional, remove the test."
    );
}

#[test]
fn main_css_styles_shell_classes() {
    for token in ["body {", ".navbar__link", ".page {", "--color-link"] {
        assert!(
            MAIN_CSS.contains(token),
            "Expected token `{token}` missing from assets/main.css"
        );
    }
}
