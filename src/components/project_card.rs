use dioxus::prelude::*;

use crate::configs::content::Project;

#[component]
pub fn ProjectCard(project: Project) -> Element {
    rsx! {
        div {
            class: "project-card",
            div {
                class: "project-content",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.description}" }
                div {
                    class: "project-tech",
                    for tech in project.tech.iter() {
                        span { key: "{tech}", class: "tech-tag", "{tech}" }
                    }
                }
                div {
                    class: "project-links",
                    a {
                        class: "project-link",
                        href: "{project.live_link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Live Demo"
                    }
                    a {
                        class: "project-link",
                        href: "{project.source_link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "View Code"
                    }
                }
            }
        }
    }
}
