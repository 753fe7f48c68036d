use dioxus::prelude::*;

#[component]
pub fn SkillTrends() -> Element {
    rsx! {
        section { class: "page page-skills",
            h1 { {crate::t!("page-skills-title")} }
            p { {crate::t!("page-skills-intro")} }
        }
    }
}
