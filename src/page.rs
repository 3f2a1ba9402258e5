//! Landing page content model.
//!
//! A page is title, tagline, nav links, and a list of content sections, read
//! from a TOML file. Sections marked `reveal` start hidden and are disclosed
//! as they scroll into view. Layout is line based: a section occupies one
//! heading row, its body rows, and one separator row. Offsets are computed
//! once per load, never per scroll tick.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{vlog_debug, Error, Result};

/// Rows a section heading must clear above the viewport bottom before the
/// section is revealed.
pub const REVEAL_MARGIN: usize = 4;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    #[serde(default)]
    pub body: String,
    /// Participates in reveal-on-scroll when true; visible immediately otherwise.
    #[serde(default)]
    pub reveal: bool,
}

impl Section {
    /// Rows this section occupies: heading + body lines + separator.
    pub fn height(&self) -> usize {
        let body_lines = if self.body.is_empty() {
            0
        } else {
            self.body.lines().count()
        };
        1 + body_lines + 1
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub tagline: Option<String>,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default, rename = "section")]
    pub sections: Vec<Section>,
}

impl Page {
    /// Load a page from a TOML file.
    pub async fn load(path: &Path) -> Result<Self> {
        vlog_debug!("Page::load path={}", path.display());
        if !path.exists() {
            return Err(Error::PageNotFound(path.display().to_string()));
        }
        let raw = tokio::fs::read_to_string(path).await?;
        let page = Self::parse(&raw)?;
        vlog_debug!(
            "Page loaded: title={:?} sections={} nav={}",
            page.title,
            page.sections.len(),
            page.nav.len()
        );
        Ok(page)
    }

    /// Parse page TOML and validate the result.
    pub fn parse(raw: &str) -> Result<Self> {
        let page: Self = toml::from_str(raw)?;
        if page.title.trim().is_empty() {
            return Err(Error::InvalidPage("title is empty".to_string()));
        }
        if page.sections.is_empty() {
            return Err(Error::InvalidPage("page has no sections".to_string()));
        }
        Ok(page)
    }

    /// Top row offset of every section, in order.
    pub fn section_tops(&self) -> Vec<usize> {
        let mut tops = Vec::with_capacity(self.sections.len());
        let mut offset = 0;
        for section in &self.sections {
            tops.push(offset);
            offset += section.height();
        }
        tops
    }

    /// Total rows of content when every section is laid out.
    pub fn content_height(&self) -> usize {
        self.sections.iter().map(Section::height).sum()
    }

    /// Built-in page shown when no page file is available.
    pub fn sample() -> Self {
        Self {
            title: "Vista".to_string(),
            tagline: Some("A landing page for your terminal".to_string()),
            nav: vec![
                NavLink {
                    label: "Home".to_string(),
                },
                NavLink {
                    label: "Features".to_string(),
                },
                NavLink {
                    label: "Contact".to_string(),
                },
            ],
            sections: vec![
                Section {
                    heading: "Welcome".to_string(),
                    body: "Scroll with j/k or the arrow keys.\n\
                           The gauge at the top tracks how far you are."
                        .to_string(),
                    reveal: false,
                },
                Section {
                    heading: "Reveal on scroll".to_string(),
                    body: "Sections marked for reveal stay hidden until\n\
                           they enter the viewport, then stay visible."
                        .to_string(),
                    reveal: true,
                },
                Section {
                    heading: "Theme".to_string(),
                    body: "Press t to flip between dark and light.\n\
                           The header glyph names the mode you would switch to."
                        .to_string(),
                    reveal: true,
                },
                Section {
                    heading: "Navigation".to_string(),
                    body: "Press m to open and close the nav panel.".to_string(),
                    reveal: true,
                },
            ],
        }
    }
}
