//! Shared UI crate for the Job Skill Trends dashboard: routing, the shell and its pages.

pub mod i18n;
pub mod routing;
pub mod views;

pub mod components {
    mod navigation_bar;
    pub use navigation_bar::NavigationBar;
}

mod shell;
pub use shell::Shell;
