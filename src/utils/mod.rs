pub mod browser;
mod theme;
mod validate;
mod view_state;

pub use browser::{
    browser_view_state,
    AnchorScroller,
    ColorSchemeProbe,
    PreferenceStore,
    ScrollWatcher,
};
pub use theme::Theme;
pub use validate::{ validate_contact, ContactMessage };
pub use view_state::ViewState;
