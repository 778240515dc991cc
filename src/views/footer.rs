use chrono::Datelike;
use dioxus::prelude::*;

use crate::configs::content::PROFILE;

const FOOTER_CSS: Asset = asset!("/assets/styling/footer.css");

#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        document::Link { rel: "stylesheet", href: FOOTER_CSS }

        footer {
            class: "footer",
            p { "© {year} {PROFILE.name}. All rights reserved." }
            p { class: "footer-sub", "Built with Rust & Dioxus" }
        }
    }
}
