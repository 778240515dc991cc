use std::rc::Rc;

use dioxus::prelude::*;
use portfolio::views::{ About, Contact, Footer, Hero, Navbar, Projects, Skills };
use portfolio::{ browser_view_state, ScrollWatcher, Theme };

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut view = use_signal(browser_view_state);
    use_context_provider(|| view);

    // Lives as long as the root component; dropping it removes the listener.
    let _watcher = use_hook(|| {
        Rc::new(ScrollWatcher::subscribe(move |offset| view.write().on_scroll(offset)))
    });

    rsx! {
        div {
            class: if view().theme() == Theme::Dark { "app dark" } else { "app light" },
            document::Link { rel: "icon", href: FAVICON }
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            Navbar {}
            Hero {}
            About {}
            Projects {}
            Skills {}
            Contact {}
            Footer {}
        }
    }
}
