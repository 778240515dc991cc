use dioxus::prelude::*;

use crate::configs::content::PROFILE;

#[component]
pub fn SocialLinks() -> Element {
    rsx! {
        div {
            class: "social-links",
            a {
                class: "social-link",
                href: PROFILE.github,
                target: "_blank",
                rel: "noopener noreferrer",
                aria_label: "GitHub",
                "GitHub"
            }
            a {
                class: "social-link",
                href: PROFILE.linkedin,
                target: "_blank",
                rel: "noopener noreferrer",
                aria_label: "LinkedIn",
                "LinkedIn"
            }
            a {
                class: "social-link",
                href: "mailto:{PROFILE.email}",
                aria_label: "Email",
                "Email"
            }
        }
    }
}
