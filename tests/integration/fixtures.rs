//! Test fixtures for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

use vista::config::Config;
use vista::page::{Page, Section};
use vista::tea::model::CHROME_ROWS;
use vista::tea::Model;

/// Write page TOML to a temp file and return its handle.
pub fn page_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp page file");
    file.write_all(contents.as_bytes())
        .expect("write temp page file");
    file.flush().expect("flush temp page file");
    file
}

/// A page of `count` sections, each `body_lines` rows of body, all marked
/// for reveal except the first.
pub fn tall_page(count: usize, body_lines: usize) -> Page {
    Page {
        title: "Fixture".to_string(),
        tagline: Some("integration".to_string()),
        nav: vec![],
        sections: (0..count)
            .map(|i| Section {
                heading: format!("Section {}", i),
                body: vec!["body"; body_lines].join("\n"),
                reveal: i > 0,
            })
            .collect(),
    }
}

/// A model sized to `content_rows` rows of content, with `page` installed
/// (loading already dismissed).
pub fn loaded_model(page: Page, content_rows: u16) -> Model {
    let mut model = Model::new(Config::default());
    model.viewport = (80, content_rows + CHROME_ROWS);
    model.set_page(page);
    model.dirty = false;
    model
}

pub const VALID_PAGE_TOML: &str = r#"
title = "Acme"
tagline = "We make things"

[[nav]]
label = "Home"

[[nav]]
label = "Pricing"

[[section]]
heading = "Hero"
body = "Welcome to Acme."

[[section]]
heading = "Details"
body = "More.\nAnd more."
reveal = true
"#;
