use dioxus::prelude::*;

use crate::configs::content::{ section, SKILLS };

const SKILLS_CSS: Asset = asset!("/assets/styling/skills.css");

#[component]
pub fn Skills() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: SKILLS_CSS }

        section {
            id: section::SKILLS,
            class: "section",
            h2 { class: "section-title", "Skills" }
            div {
                class: "skills-container",
                for skill in SKILLS {
                    div { key: "{skill}", class: "skill-item", "{skill}" }
                }
            }
        }
    }
}
