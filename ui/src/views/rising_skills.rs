use dioxus::prelude::*;

#[component]
pub fn RisingSkills() -> Element {
    rsx! {
        section { class: "page page-rising",
            h1 { {crate::t!("page-rising-title")} }
            p { {crate::t!("page-rising-intro")} }
        }
    }
}
