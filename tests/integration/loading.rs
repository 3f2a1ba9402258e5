//! Loading overlay dismissal tests.
//!
//! The overlay is visible from startup, hidden exactly once when the page
//! content finishes loading, and never restored. A failed load still
//! dismisses the overlay and degrades to the built-in sample page.

use vista::config::Config;
use vista::page::Page;
use vista::tea::{update, Message, Model, NotificationLevel};

use crate::fixtures::{page_file, VALID_PAGE_TOML};

#[tokio::test]
async fn overlay_dismissed_after_file_load() {
    let file = page_file(VALID_PAGE_TOML);
    let mut model = Model::new(Config::default());
    assert!(model.loading, "overlay must be up before load completes");
    assert!(model.snapshot().loading);

    let page = Page::load(file.path()).await.expect("page loads");
    update(&mut model, Message::PageLoaded(page));

    assert!(!model.loading);
    let snapshot = model.snapshot();
    assert!(!snapshot.loading);
    assert_eq!(snapshot.title, "Acme");
    assert_eq!(snapshot.nav, vec!["Home".to_string(), "Pricing".to_string()]);
}

#[tokio::test]
async fn overlay_dismissed_when_load_fails() {
    let mut model = Model::new(Config::default());

    let err = Page::load(std::path::Path::new("/nonexistent/page.toml"))
        .await
        .unwrap_err();
    update(&mut model, Message::PageLoadFailed(err.to_string()));

    // Degrade to the sample page rather than hanging on the overlay.
    assert!(!model.loading);
    assert_eq!(model.page.as_ref().unwrap().title, Page::sample().title);

    let notification = model.notification.clone().expect("error surfaced");
    assert_eq!(notification.level, NotificationLevel::Error);
}

#[tokio::test]
async fn malformed_page_file_is_a_load_failure() {
    let file = page_file("title = [broken");
    let err = Page::load(file.path()).await.unwrap_err();

    let mut model = Model::new(Config::default());
    update(&mut model, Message::PageLoadFailed(err.to_string()));
    assert!(!model.loading);
}

#[test]
fn overlay_never_restored_by_later_events() {
    let mut model = Model::new(Config::default());
    update(&mut model, Message::PageLoaded(Page::sample()));
    assert!(!model.loading);

    // Scroll, resize, and toggle traffic must not bring the overlay back.
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    for code in [
        KeyCode::Char('j'),
        KeyCode::Char('t'),
        KeyCode::Char('m'),
        KeyCode::End,
    ] {
        update(
            &mut model,
            Message::Key(KeyEvent::new(code, KeyModifiers::NONE)),
        );
        assert!(!model.loading);
    }
    update(&mut model, Message::Resize(120, 40));
    assert!(!model.loading);
}
