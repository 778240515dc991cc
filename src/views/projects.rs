use dioxus::prelude::*;

use crate::components::ProjectCard;
use crate::configs::content::{ section, PROJECTS };

const PROJECTS_CSS: Asset = asset!("/assets/styling/projects.css");

#[component]
pub fn Projects() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: PROJECTS_CSS }

        section {
            id: section::PROJECTS,
            class: "section dark-section",
            h2 { class: "section-title", "My Projects" }
            div {
                class: "projects-grid",
                {PROJECTS.iter().map(|project| rsx! {
                    ProjectCard { key: "{project.title}", project: project.clone() }
                })}
            }
        }
    }
}
