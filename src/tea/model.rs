//! Model for the TEA (The Elm Architecture) pattern.
//!
//! The Model is pure controller state - no channels, no handles, no runtime
//! infrastructure. The rendered tree is a projection of this state; nothing
//! is ever read back out of the UI.

use crate::config::Config;
use crate::page::{Page, REVEAL_MARGIN};
use crate::render::{next_version, PageState, SectionView};

/// Rows of fixed chrome around the content viewport: header, progress gauge,
/// status bar.
pub const CHROME_ROWS: u16 = 3;

/// Level of a notification message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// Error notification - displayed in red with "Error:" prefix
    Error,
    /// Informational notification - displayed in green
    Info,
}

/// A notification message to display to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The severity level of the notification
    pub level: NotificationLevel,
    /// The notification message text
    pub message: String,
}

/// Scroll completion percentage for a given offset.
///
/// Defined for every input: when the content fits in the viewport there is no
/// scrollable range and the result is 0 rather than a division by zero. The
/// result is clamped to [0, 100] and is monotone in `offset`.
pub fn scroll_progress(offset: usize, content_height: usize, viewport_rows: usize) -> u16 {
    let max_scroll = content_height.saturating_sub(viewport_rows);
    if max_scroll == 0 {
        return 0;
    }
    ((offset.min(max_scroll) * 100) / max_scroll) as u16
}

/// Pure application state - the single source of truth.
pub struct Model {
    /// Loaded page content. `None` while the loading overlay is up.
    pub page: Option<Page>,
    /// Loading overlay visibility. Cleared at most once, on load completion,
    /// and never restored.
    pub loading: bool,

    // Scroll state
    pub scroll: usize,
    /// Terminal size (columns, rows).
    pub viewport: (u16, u16),
    /// Per-section visibility. Monotonic: once true, never cleared.
    pub revealed: Vec<bool>,
    /// Top row offset of each section, recomputed only on page load.
    pub section_tops: Vec<usize>,
    pub content_height: usize,

    // Toggle state (OFF/ON, flipped per activation, session scoped)
    pub dark: bool,
    pub menu_open: bool,

    // UI toggle state
    /// Whether the keymap legend is expanded (toggled by '?')
    pub show_keymap: bool,

    pub notification: Option<Notification>,

    // Dirty flag - set when state changes and render is needed
    pub dirty: bool,

    // Config (immutable after init)
    pub config: Config,
}

impl Model {
    pub fn new(config: Config) -> Self {
        Self {
            page: None,
            loading: true,
            scroll: 0,
            viewport: (80, 24),
            revealed: Vec::new(),
            section_tops: Vec::new(),
            content_height: 0,
            dark: config.dark,
            menu_open: false,
            show_keymap: false,
            notification: None,
            dirty: true,
            config,
        }
    }

    /// Rows available for page content.
    pub fn content_rows(&self) -> usize {
        self.viewport.1.saturating_sub(CHROME_ROWS) as usize
    }

    /// Largest valid scroll offset for the current page and viewport.
    pub fn max_scroll(&self) -> usize {
        self.content_height.saturating_sub(self.content_rows())
    }

    /// Scroll completion percentage for the current offset.
    pub fn progress(&self) -> u16 {
        scroll_progress(self.scroll, self.content_height, self.content_rows())
    }

    /// Install loaded page content and dismiss the loading overlay.
    ///
    /// Sections not marked for reveal are visible from the start; reveal
    /// sections already inside the initial viewport are disclosed immediately.
    pub fn set_page(&mut self, page: Page) {
        self.section_tops = page.section_tops();
        self.content_height = page.content_height();
        self.revealed = page.sections.iter().map(|s| !s.reveal).collect();
        self.page = Some(page);
        self.loading = false;
        self.scroll = 0;
        self.apply_reveal();
        self.dirty = true;
    }

    /// Move the scroll offset by a signed number of rows, clamped to the
    /// scrollable range, and disclose any sections now in view.
    pub fn scroll_by(&mut self, delta: isize) {
        let target = if delta.is_negative() {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            self.scroll.saturating_add(delta as usize)
        };
        self.scroll_to(target);
    }

    pub fn scroll_to(&mut self, offset: usize) {
        self.scroll = offset.min(self.max_scroll());
        self.apply_reveal();
    }

    /// Disclose every section whose top row is sufficiently inside the
    /// viewport. O(sections), flag writes only. Visibility is never revoked.
    pub fn apply_reveal(&mut self) {
        let limit = self.content_rows().saturating_sub(REVEAL_MARGIN);
        for (idx, &top) in self.section_tops.iter().enumerate() {
            if !self.revealed[idx] && top < self.scroll + limit {
                self.revealed[idx] = true;
            }
        }
    }

    /// Flip the theme flag. The header glyph always names the mode the next
    /// activation would switch to.
    pub fn toggle_theme(&mut self) {
        self.dark = !self.dark;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Glyph shown on the theme toggle: sun while dark is active, moon while
    /// light is active.
    pub fn theme_glyph(&self) -> &'static str {
        crate::render::theme_glyph(self.dark)
    }

    /// Create an immutable snapshot for the render thread.
    ///
    /// Called after state updates to send the current view to the render
    /// thread via a lock-free channel. Each snapshot gets a monotonically
    /// increasing version number, enabling the render thread to detect state
    /// changes and skip redundant renders.
    pub fn snapshot(&self) -> PageState {
        let (title, tagline, nav, sections) = match &self.page {
            Some(page) => (
                page.title.clone(),
                page.tagline.clone(),
                page.nav.iter().map(|n| n.label.clone()).collect(),
                page.sections
                    .iter()
                    .enumerate()
                    .map(|(idx, s)| SectionView {
                        heading: s.heading.clone(),
                        body: s.body.clone(),
                        visible: self.revealed.get(idx).copied().unwrap_or(true),
                    })
                    .collect(),
            ),
            None => (String::new(), None, Vec::new(), Vec::new()),
        };

        PageState {
            version: next_version(),
            loading: self.loading,
            title,
            tagline,
            nav,
            sections,
            scroll: self.scroll,
            progress: self.progress(),
            dark: self.dark,
            menu_open: self.menu_open,
            show_keymap: self.show_keymap,
            notification: self.notification.clone(),
        }
    }
}
