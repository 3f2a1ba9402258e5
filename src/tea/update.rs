//! Pure update function for the TEA (The Elm Architecture) pattern.
//!
//! The update function takes a model and a message, mutates the model,
//! and returns a list of commands to execute.

use crossterm::event::{KeyCode, KeyEvent};

use crate::page::Page;
use crate::{vlog, vlog_debug, vlog_warn};

use super::command::Command;
use super::message::Message;
use super::model::{Model, Notification, NotificationLevel};

/// Helper to set an error notification and mark model as dirty.
fn set_error(model: &mut Model, message: String) {
    vlog_warn!("UI Error: {}", message);
    model.notification = Some(Notification {
        level: NotificationLevel::Error,
        message,
    });
    model.dirty = true;
}

/// Pure update function: Model + Message → Commands
///
/// This function:
/// 1. Takes the current model and an input message
/// 2. Mutates the model state (and sets dirty flag)
/// 3. Returns a list of commands (side effects) to execute
///
/// The function itself has no side effects - all I/O happens via returned Commands.
pub fn update(model: &mut Model, msg: Message) -> Vec<Command> {
    let mut cmds = Vec::new();

    match msg {
        Message::Key(key) => {
            model.notification = None; // Clear notification on any key press
            model.dirty = true; // Keyboard input always triggers render
            handle_key(model, key, &mut cmds);
        }

        Message::Resize(w, h) => {
            model.viewport = (w, h);
            // The scrollable range may have shrunk, and sections may now sit
            // inside the viewport.
            model.scroll_to(model.scroll);
            model.dirty = true;
        }

        Message::PageLoaded(page) => {
            vlog!(
                "Message::PageLoaded title={:?} sections={}",
                page.title,
                page.sections.len()
            );
            model.set_page(page);
        }

        Message::PageLoadFailed(err) => {
            vlog_warn!("Message::PageLoadFailed err={}", err);
            // Degrade, never fail the page: dismiss the overlay onto the
            // built-in sample and surface the error.
            model.set_page(Page::sample());
            set_error(model, format!("Failed to load page: {}", err));
        }
    }

    cmds
}

fn handle_key(model: &mut Model, key: KeyEvent, cmds: &mut Vec<Command>) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            model.scroll_by(1);
        }

        KeyCode::Char('k') | KeyCode::Up => {
            model.scroll_by(-1);
        }

        KeyCode::Char('f') | KeyCode::PageDown | KeyCode::Char(' ') => {
            model.scroll_by(model.content_rows() as isize);
        }

        KeyCode::Char('b') | KeyCode::PageUp => {
            model.scroll_by(-(model.content_rows() as isize));
        }

        KeyCode::Char('g') | KeyCode::Home => {
            model.scroll_to(0);
        }

        KeyCode::Char('G') | KeyCode::End => {
            model.scroll_to(model.max_scroll());
        }

        KeyCode::Char('t') => {
            model.toggle_theme();
            vlog_debug!(
                "Theme toggled: dark={} glyph={}",
                model.dark,
                model.theme_glyph()
            );
        }

        KeyCode::Char('m') => {
            model.toggle_menu();
            vlog_debug!("Menu toggled: open={}", model.menu_open);
        }

        KeyCode::Char('?') => {
            model.show_keymap = !model.show_keymap;
        }

        KeyCode::Char('q') | KeyCode::Esc => {
            cmds.push(Command::Quit);
        }

        _ => {}
    }
}
