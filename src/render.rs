use std::sync::atomic::{AtomicU64, Ordering};

use crate::tea::Notification;

/// View of one content section for rendering.
///
/// `visible` is the projected reveal flag: hidden sections still occupy their
/// rows so offsets stay stable, but their text is not drawn.
#[derive(Debug, Clone)]
pub struct SectionView {
    pub heading: String,
    pub body: String,
    pub visible: bool,
}

/// Glyph on the theme toggle: names the mode the next press switches to
/// (sun while dark is active, moon while light is active).
pub fn theme_glyph(dark: bool) -> &'static str {
    if dark {
        "☀"
    } else {
        "☾"
    }
}

static VERSION_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn next_version() -> u64 {
    VERSION_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Immutable snapshot of the page state, consumed by the render thread.
#[derive(Debug, Clone)]
pub struct PageState {
    pub version: u64,
    /// Loading overlay visibility. True until content load completes.
    pub loading: bool,
    pub title: String,
    pub tagline: Option<String>,
    pub nav: Vec<String>,
    pub sections: Vec<SectionView>,
    pub scroll: usize,
    /// Scroll completion percentage, always within [0, 100].
    pub progress: u16,
    pub dark: bool,
    pub menu_open: bool,
    /// Whether the keymap legend is expanded (toggled by '?')
    pub show_keymap: bool,
    pub notification: Option<Notification>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            version: 0,
            loading: true,
            title: String::new(),
            tagline: None,
            nav: Vec::new(),
            sections: Vec::new(),
            scroll: 0,
            progress: 0,
            dark: false,
            menu_open: false,
            show_keymap: false,
            notification: None,
        }
    }
}
