//! Capability ports over ambient browser state, plus their browser-backed
//! adapters. The controller only ever sees the traits, so tests substitute
//! in-memory fakes. Adapters are gated on wasm32 and degrade to inert
//! no-ops on the desktop/mobile targets.

use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::utils::theme::Theme;
use crate::utils::view_state::ViewState;

const THEME_KEY: &str = "theme";

pub trait PreferenceStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme);
}

pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> bool;
}

pub trait AnchorScroller {
    fn scroll_to(&self, anchor_id: &str);
}

/// Theme preference persisted under a single localStorage key. A missing
/// or unreadable storage area behaves like an empty one.
pub struct LocalStoragePreferences;

impl PreferenceStore for LocalStoragePreferences {
    fn load(&self) -> Option<Theme> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            let value = storage.get_item(THEME_KEY).ok().flatten()?;
            Theme::from_storage_value(&value)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn save(&self, theme: Theme) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                if storage.set_item(THEME_KEY, theme.storage_value()).is_err() {
                    log::debug!("theme preference not persisted, storage rejected the write");
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = theme;
        }
    }
}

/// One-shot `prefers-color-scheme` media query. Reports light when the
/// query is unavailable.
pub struct MediaQueryProbe;

impl ColorSchemeProbe for MediaQueryProbe {
    fn prefers_dark(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
                .map_or(false, |query| query.matches())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }
}

/// Smooth `scrollIntoView` on the element with the given id. Silently
/// skips ids that resolve to nothing.
pub struct SmoothScroller;

impl AnchorScroller for SmoothScroller {
    fn scroll_to(&self, anchor_id: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            let element = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(anchor_id));

            match element {
                Some(element) => {
                    let options = web_sys::ScrollIntoViewOptions::new();
                    options.set_behavior(web_sys::ScrollBehavior::Smooth);
                    element.scroll_into_view_with_scroll_into_view_options(&options);
                }
                None => log::debug!("no section with id {:?}, scroll skipped", anchor_id),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = anchor_id;
        }
    }
}

/// Window scroll subscription. Registers the listener on construction and
/// removes it again when dropped, so the handler lives exactly as long as
/// the component holding the watcher.
pub struct ScrollWatcher {
    #[cfg(target_arch = "wasm32")]
    handler: Option<Closure<dyn FnMut()>>,
}

impl ScrollWatcher {
    #[cfg(target_arch = "wasm32")]
    pub fn subscribe(mut on_offset: impl FnMut(f64) + 'static) -> Self {
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(window) = web_sys::window() {
                if let Ok(offset) = window.scroll_y() {
                    on_offset(offset);
                }
            }
        });

        let handler = web_sys
            ::window()
            .and_then(|window| {
                window
                    .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
                    .ok()
            })
            .map(|_| closure);

        if handler.is_none() {
            log::warn!("scroll listener not installed, navbar will not react to scrolling");
        }

        Self { handler }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn subscribe(on_offset: impl FnMut(f64) + 'static) -> Self {
        let _ = on_offset;
        Self {}
    }
}

impl Drop for ScrollWatcher {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(closure) = self.handler.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        closure.as_ref().unchecked_ref()
                    );
                }
            }
        }
    }
}

/// View state wired to the real browser adapters.
pub fn browser_view_state() -> ViewState {
    ViewState::restore(Rc::new(LocalStoragePreferences), &MediaQueryProbe, Rc::new(SmoothScroller))
}
