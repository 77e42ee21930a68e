//! Search screen
//!
//! Three faces, one per phase: popular/recent suggestions while idle, a
//! loading line while a query is in flight, and results (or the explicit
//! empty state) once settled.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_textarea::TextArea;

use libriffwire::{ColorName, IconName};

use crate::app::{AppState, SearchPhase};

use super::{color, icon, widgets};

pub(super) fn render(frame: &mut Frame, area: Rect, state: &AppState, input: &TextArea) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_header(frame, chunks[0], state, input);

    match state.search.phase {
        SearchPhase::Idle => render_idle(frame, chunks[1], state),
        SearchPhase::Searching => render_searching(frame, chunks[1], state),
        SearchPhase::Settled => render_settled(frame, chunks[1], state),
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, input: &TextArea) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    frame.render_widget(
        Paragraph::new(format!(" {} ", icon(state, IconName::ArrowBack)))
            .style(Style::default().fg(color(state, ColorName::TextWhite))),
        chunks[0],
    );
    frame.render_widget(input, chunks[1]);
}

fn render_idle(frame: &mut Frame, area: Rect, state: &AppState) {
    let catalog = &state.catalog;
    let popular = catalog.popular_searches();
    let recent = catalog.recent_searches();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(popular.len() as u16),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(recent.len() as u16),
            Constraint::Min(0),
        ])
        .split(area);

    widgets::section_title(
        frame,
        chunks[0],
        state,
        &format!("{} POPULAR SEARCHES", icon(state, IconName::Flash)),
    );

    let mut lines = Vec::new();
    for (i, term) in popular.iter().enumerate() {
        let selected = i == state.search.cursor;
        let marker = if selected { "▸ " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(color(state, ColorName::Accent))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color(state, ColorName::Accent))
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(color(state, ColorName::Primary))),
            Span::styled(*term, style),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    widgets::section_title(
        frame,
        chunks[3],
        state,
        &format!("{} RECENT SEARCHES", icon(state, IconName::Time)),
    );

    // Static placeholder history, not derived from real searches
    let recent_lines: Vec<Line> = recent
        .iter()
        .map(|term| {
            Line::from(vec![
                Span::styled(
                    format!("  {} ", icon(state, IconName::Time)),
                    Style::default().fg(color(state, ColorName::TextDark)),
                ),
                Span::styled(*term, Style::default().fg(color(state, ColorName::TextGray))),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(recent_lines), chunks[4]);
}

fn render_searching(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} SEARCHING...", icon(state, IconName::Search)),
            Style::default()
                .fg(color(state, ColorName::TextWhite))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Searching the metal archives...",
            Style::default()
                .fg(color(state, ColorName::TextGray))
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_settled(frame: &mut Frame, area: Rect, state: &AppState) {
    let results = &state.search.results;

    if results.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                icon(state, IconName::Search),
                Style::default().fg(color(state, ColorName::TextGray)),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "No results found",
                Style::default()
                    .fg(color(state, ColorName::TextWhite))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Try searching for bands, albums, or genres",
                Style::default().fg(color(state, ColorName::TextGray)),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
        return;
    }

    let mut constraints = vec![Constraint::Length(1)];
    for _ in results {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    widgets::section_title(
        frame,
        chunks[0],
        state,
        &format!("RESULTS FOR \"{}\"", state.search.query),
    );
    for (i, article) in results.iter().enumerate() {
        widgets::news_card(
            frame,
            chunks[1 + i],
            state,
            article,
            false,
            state.search.cursor == i,
        );
    }
}
