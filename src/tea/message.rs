//! Messages for the TEA (The Elm Architecture) pattern.
//!
//! Messages are inputs to the update function - they come from external
//! sources like keyboard events or the background page loader. This enum is
//! the event table: every handler the controller owns is a match arm over it.

use crossterm::event::KeyEvent;

use crate::page::Page;

/// Input messages to the update function.
#[derive(Debug)]
pub enum Message {
    // Keyboard/terminal events
    Key(KeyEvent),
    Resize(u16, u16),

    // Page load completion callbacks
    /// The page content finished loading. Dismisses the loading overlay.
    PageLoaded(Page),
    /// The page failed to load. The overlay is still dismissed and the
    /// built-in sample page is shown instead.
    PageLoadFailed(String),
}
