use dioxus::prelude::*;

#[component]
pub fn Overview() -> Element {
    rsx! {
        section { class: "page page-overview",
            h1 { {crate::t!("page-overview-title")} }
            p { {crate::t!("page-overview-intro")} }

            ul { class: "page-overview__highlights",
                li { {crate::t!("page-overview-highlight-skills")} }
                li { {crate::t!("page-overview-highlight-rising")} }
                li { {crate::t!("page-overview-highlight-clusters")} }
            }
        }
    }
}
