use std::cell::RefCell;

use crate::utils::{ AnchorScroller, ColorSchemeProbe, PreferenceStore, Theme };

/// In-memory stand-in for localStorage.
#[allow(dead_code)]
pub struct MemoryStore {
    slot: RefCell<Option<Theme>>,
}

#[allow(dead_code)]
impl MemoryStore {
    pub fn empty() -> Self {
        Self { slot: RefCell::new(None) }
    }

    pub fn with(theme: Theme) -> Self {
        Self { slot: RefCell::new(Some(theme)) }
    }

    pub fn stored(&self) -> Option<Theme> {
        *self.slot.borrow()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<Theme> {
        *self.slot.borrow()
    }

    fn save(&self, theme: Theme) {
        *self.slot.borrow_mut() = Some(theme);
    }
}

/// Ambient color-scheme pinned to one answer.
#[allow(dead_code)]
pub struct FixedProbe(pub bool);

impl ColorSchemeProbe for FixedProbe {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// Records every requested anchor id instead of scrolling.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingScroller {
    requests: RefCell<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingScroller {
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl AnchorScroller for RecordingScroller {
    fn scroll_to(&self, anchor_id: &str) {
        self.requests.borrow_mut().push(anchor_id.to_string());
    }
}
