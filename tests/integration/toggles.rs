//! Theme and nav menu toggle tests.
//!
//! Both toggles share one state machine: {OFF, ON}, one TOGGLE transition
//! per activation, initial OFF, alive for the page's lifetime.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use vista::render::theme_glyph;
use vista::tea::{update, Message};

use crate::fixtures::{loaded_model, tall_page};

fn press(model: &mut vista::tea::Model, c: char) {
    update(
        model,
        Message::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
    );
}

#[test]
fn theme_toggle_is_involutive() {
    let mut model = loaded_model(tall_page(3, 2), 10);
    assert!(!model.dark, "light by default");

    press(&mut model, 't');
    assert!(model.dark);
    press(&mut model, 't');
    assert!(!model.dark);
}

#[test]
fn theme_glyph_always_names_next_mode() {
    let mut model = loaded_model(tall_page(3, 2), 10);

    // Light active: moon shown, pressing 't' switches to dark.
    assert_eq!(theme_glyph(model.snapshot().dark), "☾");

    press(&mut model, 't');
    // Dark active: sun shown.
    assert_eq!(theme_glyph(model.snapshot().dark), "☀");

    press(&mut model, 't');
    assert_eq!(theme_glyph(model.snapshot().dark), "☾");
}

#[test]
fn menu_toggle_is_involutive() {
    let mut model = loaded_model(tall_page(3, 2), 10);
    assert!(!model.menu_open, "menu closed by default");

    press(&mut model, 'm');
    assert!(model.menu_open);
    assert!(model.snapshot().menu_open);

    press(&mut model, 'm');
    assert!(!model.menu_open);
    assert!(!model.snapshot().menu_open);
}

#[test]
fn toggles_are_independent() {
    let mut model = loaded_model(tall_page(3, 2), 10);

    press(&mut model, 't');
    press(&mut model, 'm');
    assert!(model.dark);
    assert!(model.menu_open);

    // Flipping one leaves the other alone.
    press(&mut model, 't');
    assert!(!model.dark);
    assert!(model.menu_open);

    press(&mut model, 'm');
    assert!(!model.menu_open);
    assert!(!model.dark);
}

#[test]
fn toggles_do_not_disturb_scroll_state() {
    let mut model = loaded_model(tall_page(20, 3), 10);
    model.scroll_to(5);
    let progress = model.progress();
    let revealed = model.revealed.clone();

    press(&mut model, 't');
    press(&mut model, 'm');

    assert_eq!(model.scroll, 5);
    assert_eq!(model.progress(), progress);
    assert_eq!(model.revealed, revealed);
}
