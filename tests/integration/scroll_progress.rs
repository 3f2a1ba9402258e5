//! Scroll progress gauge tests.
//!
//! Progress is offset over scrollable range as a percentage: monotone,
//! clamped to [0, 100], and defined as 0 when there is nothing to scroll.

use vista::tea::scroll_progress;

use crate::fixtures::{loaded_model, tall_page};

#[test]
fn progress_monotone_and_bounded_over_full_range() {
    // 256 sections of height 4 = 1024 content rows, 24 viewport rows:
    // scrollable range of exactly 1000.
    let mut model = loaded_model(tall_page(256, 2), 24);
    assert_eq!(model.max_scroll(), 1000);

    let mut prev = 0;
    for offset in 0..=model.max_scroll() {
        model.scroll_to(offset);
        let p = model.progress();
        assert!(p >= prev, "progress regressed at offset {}", offset);
        assert!(p <= 100, "progress out of range at offset {}", offset);
        prev = p;
    }
    assert_eq!(prev, 100);
}

#[test]
fn progress_is_half_at_midpoint_of_thousand_row_range() {
    let mut model = loaded_model(tall_page(256, 2), 24);
    model.scroll_to(500);
    assert_eq!(model.progress(), 50);
    assert_eq!(model.snapshot().progress, 50);
}

#[test]
fn progress_defined_when_page_fits_viewport() {
    // Content shorter than the viewport: no scrollable range, gauge pinned
    // at a defined 0 rather than a division by zero.
    let mut model = loaded_model(tall_page(2, 1), 50);
    assert_eq!(model.max_scroll(), 0);
    assert_eq!(model.progress(), 0);

    model.scroll_by(100);
    assert_eq!(model.scroll, 0);
    assert_eq!(model.progress(), 0);
}

#[test]
fn progress_function_handles_degenerate_inputs() {
    assert_eq!(scroll_progress(0, 0, 0), 0);
    assert_eq!(scroll_progress(10, 0, 24), 0);
    assert_eq!(scroll_progress(usize::MAX, 1024, 24), 100);
}

#[test]
fn progress_tracks_scroll_keys() {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use vista::tea::{update, Message};

    let mut model = loaded_model(tall_page(256, 2), 24);

    update(
        &mut model,
        Message::Key(KeyEvent::new(KeyCode::End, KeyModifiers::NONE)),
    );
    assert_eq!(model.progress(), 100);

    update(
        &mut model,
        Message::Key(KeyEvent::new(KeyCode::Home, KeyModifiers::NONE)),
    );
    assert_eq!(model.progress(), 0);
}
