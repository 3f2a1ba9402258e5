//! Terminal UI rendering for the vista TUI.
//!
//! Layout, top to bottom: header (title, nav hint, theme glyph), scroll
//! progress gauge, content viewport, status bar. The nav panel and the
//! loading overlay draw on top of the content area.
//!
//! This module renders from PageState (immutable snapshot) - it never
//! mutates application state. This enables the decoupled game loop.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::render::{theme_glyph, PageState};
use crate::tea::{Notification, NotificationLevel};

// Layout constants (must agree with tea::model::CHROME_ROWS)
const HEADER_HEIGHT: u16 = 1;
const GAUGE_HEIGHT: u16 = 1;
const STATUSBAR_HEIGHT: u16 = 1;

/// Color palette for one theme mode.
///
/// The palette is a pure function of the dark flag; the drawn tree is a
/// projection of that flag, never its storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub base: Style,
    pub heading: Style,
    pub dimmed: Style,
    pub muted: Style,
    pub accent: Color,
}

impl Palette {
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self {
                base: Style::default().fg(Color::White).bg(Color::Black),
                heading: Style::default()
                    .fg(Color::Cyan)
                    .bg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                dimmed: Style::default().fg(Color::Gray).bg(Color::Black),
                muted: Style::default().fg(Color::DarkGray).bg(Color::Black),
                accent: Color::Cyan,
            }
        } else {
            Self {
                base: Style::default().fg(Color::Black).bg(Color::White),
                heading: Style::default()
                    .fg(Color::Blue)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
                dimmed: Style::default().fg(Color::DarkGray).bg(Color::White),
                muted: Style::default().fg(Color::Gray).bg(Color::White),
                accent: Color::Blue,
            }
        }
    }
}

/// Main render function - entry point for all UI drawing.
/// Takes an immutable PageState snapshot.
pub fn draw(frame: &mut Frame, state: &PageState) {
    let palette = Palette::for_mode(state.dark);

    if state.loading {
        render_loading_overlay(frame, &palette);
        return;
    }

    render_main_layout(frame, state, &palette);

    if state.menu_open {
        render_nav_panel(frame, state, &palette);
    }

    if let Some(ref notification) = state.notification {
        render_notification(frame, notification, frame.area());
    }
}

/// Render the full-screen loading overlay. Shown until the page content
/// finishes loading, then never again for this page life.
fn render_loading_overlay(frame: &mut Frame, palette: &Palette) {
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base), area);

    let msg = Line::from(Span::styled("Loading …", palette.dimmed));
    let y = area.y + area.height / 2;
    let row = Rect {
        x: area.x,
        y: y.min(area.y + area.height.saturating_sub(1)),
        width: area.width,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(msg).alignment(ratatui::layout::Alignment::Center),
        row,
    );
}

/// Render the main layout: header + gauge + content + status bar.
fn render_main_layout(frame: &mut Frame, state: &PageState, palette: &Palette) {
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base), area);

    if area.height < HEADER_HEIGHT + GAUGE_HEIGHT + STATUSBAR_HEIGHT {
        render_header(frame, state, palette, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(GAUGE_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(STATUSBAR_HEIGHT),
    ])
    .split(area);

    render_header(frame, state, palette, chunks[0]);
    render_progress_gauge(frame, state, palette, chunks[1]);
    render_content(frame, state, palette, chunks[2]);
    render_statusbar(frame, state, palette, chunks[3]);
}

/// Render the header line: title and tagline on the left, burger indicator
/// and theme toggle glyph on the right.
fn render_header(frame: &mut Frame, state: &PageState, palette: &Palette, area: Rect) {
    let mut spans: Vec<Span> = vec![Span::styled(
        state.title.clone(),
        palette.base.add_modifier(Modifier::BOLD),
    )];
    if let Some(ref tagline) = state.tagline {
        spans.push(Span::styled("  ".to_string(), palette.base));
        spans.push(Span::styled(tagline.clone(), palette.dimmed));
    }

    // Right side: "≡" burger (bright while the menu is open) and the theme
    // glyph showing the mode a press of 't' would switch to.
    let burger = "≡";
    let glyph = theme_glyph(state.dark);
    let right_len = burger.chars().count() + 1 + glyph.chars().count() + 1;
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let spacer = (area.width as usize)
        .saturating_sub(content_width)
        .saturating_sub(right_len);
    if spacer > 0 {
        spans.push(Span::styled(" ".repeat(spacer), palette.base));
    }
    let burger_style = if state.menu_open {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        palette.dimmed
    };
    spans.push(Span::styled(burger, burger_style));
    spans.push(Span::styled(" ", palette.base));
    spans.push(Span::styled(glyph, palette.base));
    spans.push(Span::styled(" ", palette.base));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the scroll progress gauge. The extent encodes scroll completion,
/// 0% on short pages that have no scrollable range.
fn render_progress_gauge(frame: &mut Frame, state: &PageState, palette: &Palette, area: Rect) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(palette.accent).bg(Color::DarkGray))
        .percent(state.progress.min(100))
        .label(format!("{}%", state.progress));
    frame.render_widget(gauge, area);
}

/// Render the content viewport.
///
/// Every section occupies its rows whether revealed or not, so scroll offsets
/// are stable; hidden sections simply draw nothing on their rows.
fn render_content(frame: &mut Frame, state: &PageState, palette: &Palette, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for section in &state.sections {
        if section.visible {
            lines.push(Line::from(Span::styled(
                section.heading.clone(),
                palette.heading,
            )));
            for body_line in section.body.lines() {
                lines.push(Line::from(Span::styled(
                    body_line.to_string(),
                    palette.base,
                )));
            }
        } else {
            let body_rows = if section.body.is_empty() {
                0
            } else {
                section.body.lines().count()
            };
            for _ in 0..1 + body_rows {
                lines.push(Line::default());
            }
        }
        lines.push(Line::default());
    }

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(state.scroll)
        .take(area.height as usize)
        .collect();
    frame.render_widget(Paragraph::new(visible).style(palette.base), area);
}

/// Render the nav-links panel in its active state (menu open).
fn render_nav_panel(frame: &mut Frame, state: &PageState, palette: &Palette) {
    let area = frame.area();
    let height = (state.nav.len() as u16 + 2).min(area.height.saturating_sub(2));
    let width = state
        .nav
        .iter()
        .map(|l| l.chars().count() as u16 + 4)
        .max()
        .unwrap_or(10)
        .clamp(10, area.width);
    let panel = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + HEADER_HEIGHT,
        width,
        height,
    };

    frame.render_widget(Clear, panel);
    let block = Block::default()
        .borders(Borders::ALL)
        .style(palette.base)
        .border_style(Style::default().fg(palette.accent));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let lines: Vec<Line> = state
        .nav
        .iter()
        .map(|label| {
            Line::from(vec![
                Span::styled("▸ ", Style::default().fg(palette.accent)),
                Span::styled(label.clone(), palette.base),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Render the status bar - single bottom line.
/// When show_keymap is false: shows just "?" (grayed out)
/// When show_keymap is true: shows "? │ <full keymap legend>" with bright "?"
fn render_statusbar(frame: &mut Frame, state: &PageState, palette: &Palette, area: Rect) {
    let key_style = palette.dimmed;
    let desc_style = palette.muted;
    let sep_style = palette.muted;

    let mut spans: Vec<Span> = Vec::new();

    let help_style = if state.show_keymap {
        palette.base
    } else {
        palette.muted
    };
    spans.push(Span::styled("?", help_style));

    if state.show_keymap {
        let groups: [&[(&str, &str)]; 3] = [
            &[("j/k", "scroll"), ("f/b", "page"), ("g/G", "ends")],
            &[("t", "theme"), ("m", "menu")],
            &[("q", "quit")],
        ];
        for group in groups {
            spans.push(Span::styled(" │ ", sep_style));
            for (key_idx, (key, desc)) in group.iter().enumerate() {
                if key_idx > 0 {
                    spans.push(Span::styled(" • ", sep_style));
                }
                spans.push(Span::styled(*key, key_style));
                spans.push(Span::styled(format!(" {}", desc), desc_style));
            }
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(palette.base), area);
}

/// Render notification message on the bottom line of the screen.
///
/// - Error: Red text with "Error:" prefix and bold styling
/// - Info: Green text without prefix
fn render_notification(frame: &mut Frame, notification: &Notification, area: Rect) {
    let notification_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    frame.render_widget(Clear, notification_area);

    let line = match notification.level {
        NotificationLevel::Error => Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                notification.message.clone(),
                Style::default().fg(Color::Red),
            ),
        ]),
        NotificationLevel::Info => Line::from(Span::styled(
            notification.message.clone(),
            Style::default().fg(Color::Green),
        )),
    };

    frame.render_widget(Paragraph::new(line), notification_area);
}
