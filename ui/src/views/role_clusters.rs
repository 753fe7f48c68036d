use dioxus::prelude::*;

#[component]
pub fn RoleClusters() -> Element {
    rsx! {
        section { class: "page page-clusters",
            h1 { {crate::t!("page-clusters-title")} }
            p { {crate::t!("page-clusters-intro")} }
        }
    }
}
