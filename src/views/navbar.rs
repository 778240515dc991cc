use dioxus::prelude::*;

use crate::configs::content::NAV_ITEMS;
use crate::utils::{ Theme, ViewState };

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let mut view = use_context::<Signal<ViewState>>();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        nav {
            class: if view().scrolled() { "navbar scrolled" } else { "navbar" },
            div {
                class: "nav-container",
                div { class: "logo", "Portfolio" }

                div {
                    class: "nav-desktop",
                    for item in NAV_ITEMS {
                        a {
                            key: "{item.label}",
                            class: "nav-link",
                            href: "#{item.target}",
                            onclick: move |evt| {
                                evt.prevent_default();
                                view.write().navigate_to(item.target);
                            },
                            "{item.label}"
                        }
                    }
                    ThemeButton {}
                }

                div {
                    class: "nav-mobile",
                    ThemeButton {}
                    button {
                        class: "menu-btn",
                        aria_label: if view().menu_open() { "Close menu" } else { "Open menu" },
                        onclick: move |_| view.write().toggle_menu(),
                        if view().menu_open() {
                            "✕"
                        } else {
                            "☰"
                        }
                    }
                }
            }

            if view().menu_open() {
                div {
                    class: "mobile-menu",
                    for item in NAV_ITEMS {
                        a {
                            key: "{item.label}",
                            class: "mobile-nav-link",
                            href: "#{item.target}",
                            onclick: move |evt| {
                                evt.prevent_default();
                                view.write().navigate_to(item.target);
                            },
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ThemeButton() -> Element {
    let mut view = use_context::<Signal<ViewState>>();

    rsx! {
        button {
            class: "theme-btn",
            aria_label: if view().theme() == Theme::Dark {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            },
            onclick: move |_| view.write().toggle_theme(),
            if view().theme() == Theme::Dark {
                "🌞"
            } else {
                "🌙"
            }
        }
    }
}
