//! Integration test suite for vista.
//!
//! These tests exercise the page interaction controller end to end: page
//! files on disk through the loader, messages through the update function,
//! and state projection through snapshots.
//!
//! # Test Categories
//!
//! - `loading`: Loading overlay dismissal, including the failure path
//! - `scroll_progress`: Progress gauge arithmetic and clamping
//! - `reveal`: Reveal-on-scroll monotonicity
//! - `toggles`: Theme and nav menu toggle behavior

mod fixtures;

mod loading;
mod scroll_progress;
mod toggles;
