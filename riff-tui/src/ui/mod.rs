//! UI rendering
//!
//! Pure rendering: state in, frame out. Exactly one screen draws per
//! frame, selected by the navigator state; overlays stack on top.

mod categories;
mod detail;
mod home;
mod search;
pub mod widgets;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use libriffwire::{ColorName, IconName};

use crate::app::{AppState, Screen};

/// Render the application UI
///
/// Before boot only the neutral placeholder draws. After boot the active
/// screen draws; the detail screen is additionally guarded on a selected
/// article and renders nothing without one.
pub fn render(frame: &mut Frame, state: &AppState, search_input: &TextArea) {
    let area = frame.area();

    // Base backdrop behind every screen
    frame.render_widget(
        Block::default().style(Style::default().bg(color(state, ColorName::BackgroundDark))),
        area,
    );

    if !state.booted {
        render_boot(frame, area, state);
        return;
    }

    match state.current_screen {
        Screen::Home => home::render(frame, area, state),
        Screen::Categories => categories::render(frame, area, state),
        Screen::Search => search::render(frame, area, state, search_input),
        Screen::Detail => match &state.selected_article {
            Some(article) => detail::render(frame, area, state, article),
            // Guarded no-render; normal intents cannot produce this state
            None => {}
        },
    }

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }
}

/// Neutral placeholder drawn while the asset load is pending
fn render_boot(frame: &mut Frame, area: Rect, state: &AppState) {
    let placeholder = Paragraph::new("")
        .style(Style::default().bg(color(state, ColorName::BackgroundBlack)))
        .alignment(Alignment::Center);

    frame.render_widget(placeholder, area);
}

/// Resolve a semantic color against the theme, honoring NO_COLOR
pub fn color(state: &AppState, name: ColorName) -> Color {
    if !state.config.colors_enabled {
        return Color::Reset;
    }
    let rgb = state.theme.resolve(name);
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Pick the unicode glyph or the ASCII fallback for an icon
pub fn icon(state: &AppState, name: IconName) -> &'static str {
    if state.config.unicode_enabled {
        name.glyph()
    } else {
        name.ascii()
    }
}

fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q        - Quit (outside search)"),
        Line::from("  Ctrl+C   - Quit"),
        Line::from("  F1       - Toggle help"),
        Line::from("  Esc      - Back to home"),
        Line::from(""),
        Line::from("Home:"),
        Line::from("  j/k ↑/↓  - Select article"),
        Line::from("  Enter    - Open article"),
        Line::from("  c        - Categories"),
        Line::from("  s or /   - Search"),
        Line::from(""),
        Line::from("Search:"),
        Line::from("  type     - Update the query"),
        Line::from("  Ctrl+L   - Clear the query"),
        Line::from("  ↑/↓      - Select result or popular term"),
        Line::from("  Enter    - Open selection"),
        Line::from(""),
        Line::from("Detail:"),
        Line::from("  j/k ↑/↓  - Scroll"),
        Line::from("  s        - Share article"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            widgets::bordered_block(state, " Help ")
                .border_style(Style::default().fg(color(state, ColorName::Accent))),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
