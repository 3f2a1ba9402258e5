pub mod config;
pub mod error;
pub mod log;
pub mod page;

// Decoupled render loop architecture
pub mod app;
pub mod render;
pub mod tea;
pub mod ui;

pub use error::{Error, Result};
pub use page::{NavLink, Page, Section};
