use dioxus::prelude::*;

use crate::configs::content::{ section, SERVICES };

const ABOUT_CSS: Asset = asset!("/assets/styling/about.css");

#[component]
pub fn About() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ABOUT_CSS }

        section {
            id: section::ABOUT,
            class: "section",
            h2 { class: "section-title", "About Me" }
            div {
                class: "services",
                for card in SERVICES {
                    div {
                        key: "{card.title}",
                        class: "service-card",
                        div { class: "service-icon", {card.icon} }
                        h3 { class: "service-title", {card.title} }
                        p { class: "service-description", {card.description} }
                    }
                }
            }
        }
    }
}
