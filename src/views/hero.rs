use dioxus::prelude::*;

use crate::components::SocialLinks;
use crate::configs::content::{ section, PROFILE };
use crate::utils::ViewState;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    let mut view = use_context::<Signal<ViewState>>();

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section {
            id: section::HOME,
            class: "hero",
            div {
                class: "hero-container",
                div {
                    class: "hero-content",
                    h1 {
                        class: "hero-title",
                        "Hi, I'm "
                        span { class: "highlight", {PROFILE.name} }
                    }
                    h2 { class: "hero-subtitle", {PROFILE.role} }
                    p { class: "hero-description", {PROFILE.tagline} }

                    div {
                        class: "hero-buttons",
                        a {
                            class: "btn-primary",
                            href: "#{section::PROJECTS}",
                            onclick: move |evt| {
                                evt.prevent_default();
                                view.write().navigate_to(section::PROJECTS);
                            },
                            "View Projects"
                        }
                        a {
                            class: "btn-secondary",
                            href: "#{section::CONTACT}",
                            onclick: move |evt| {
                                evt.prevent_default();
                                view.write().navigate_to(section::CONTACT);
                            },
                            "Contact Me"
                        }
                    }

                    SocialLinks {}
                }
            }
        }
    }
}
