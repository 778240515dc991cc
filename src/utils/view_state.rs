use std::rc::Rc;

use crate::utils::browser::{ AnchorScroller, ColorSchemeProbe, PreferenceStore };
use crate::utils::theme::Theme;

// Navbar swaps to its compact style once the page is scrolled past this offset.
const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// The page's only mutable state: theme, mobile-menu flag and the
/// scrolled-past-threshold flag. Every view reads it through the shared
/// signal; writes all go through the methods below.
#[derive(Clone)]
pub struct ViewState {
    theme: Theme,
    menu_open: bool,
    scrolled: bool,
    store: Rc<dyn PreferenceStore>,
    scroller: Rc<dyn AnchorScroller>,
}

impl ViewState {
    /// A stored preference wins over the ambient color-scheme. The menu
    /// starts closed and the page starts unscrolled.
    pub fn restore(
        store: Rc<dyn PreferenceStore>,
        probe: &dyn ColorSchemeProbe,
        scroller: Rc<dyn AnchorScroller>
    ) -> Self {
        let theme = store
            .load()
            .unwrap_or_else(|| if probe.prefers_dark() { Theme::Dark } else { Theme::Light });

        Self {
            theme,
            menu_open: false,
            scrolled: false,
            store,
            scroller,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Flips the theme and persists the new value immediately.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.flipped();
        self.store.save(self.theme);
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Called per scroll event, no debouncing. Exactly 50px counts as
    /// not scrolled.
    pub fn on_scroll(&mut self, offset: f64) {
        self.scrolled = offset > SCROLL_THRESHOLD_PX;
    }

    /// Closes the menu, then asks the scroller for a smooth scroll to the
    /// section. The menu ends closed even when the id resolves to nothing.
    pub fn navigate_to(&mut self, anchor_id: &str) {
        self.close_menu();
        self.scroller.scroll_to(anchor_id);
    }
}
