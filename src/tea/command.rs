//! Commands for the TEA (The Elm Architecture) pattern.
//!
//! Commands are outputs from the update function - they represent side effects
//! to be executed by the runtime.

use std::path::PathBuf;

/// Output commands from the update function.
/// These represent side effects that need to be executed.
#[derive(Debug)]
pub enum Command {
    /// Load page content in the background. `None` loads the built-in sample.
    LoadPage { path: Option<PathBuf> },

    // App lifecycle
    Quit,
}
