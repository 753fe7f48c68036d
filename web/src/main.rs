use dioxus::prelude::*;

use ui::routing::NavigationHandle;
use ui::Shell;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The browser location drives routing; the shell consumes this through context.
    use_context_provider(NavigationHandle::platform_default);

    rsx! {
        // Global app resources
        document::Title { "Job Skill Trends" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Shell {}
    }
}
