//! Home feed screen

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use libriffwire::{ColorName, IconName};

use crate::app::AppState;

use super::{color, icon, widgets};

pub(super) fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let catalog = &state.catalog;
    let latest = catalog.latest();

    let banner_height = state
        .banner
        .as_ref()
        .map(|b| b.lines().count().min(6) as u16)
        .unwrap_or(0);

    let mut constraints = vec![
        Constraint::Length(banner_height),
        Constraint::Length(3), // header
        Constraint::Length(1),
        Constraint::Length(7), // featured card
        Constraint::Length(1),
        Constraint::Length(3), // quick categories
        Constraint::Length(1),
    ];
    for _ in latest {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0)); // trending tags

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    if let Some(banner) = &state.banner {
        frame.render_widget(
            Paragraph::new(banner.as_str())
                .style(Style::default().fg(color(state, ColorName::Primary)))
                .alignment(Alignment::Center),
            chunks[0],
        );
    }

    widgets::header(frame, chunks[1], state, "METAL NEWS");

    widgets::section_title(
        frame,
        chunks[2],
        state,
        &format!("{} BREAKING NEWS", icon(state, IconName::Flash)),
    );
    widgets::news_card(
        frame,
        chunks[3],
        state,
        catalog.featured(),
        true,
        state.home.cursor == 0,
    );

    widgets::section_title(
        frame,
        chunks[4],
        state,
        &format!("{} CATEGORIES", icon(state, IconName::Grid)),
    );
    render_quick_row(frame, chunks[5], state);

    widgets::section_title(
        frame,
        chunks[6],
        state,
        &format!("{} LATEST NEWS", icon(state, IconName::MusicalNotes)),
    );
    for (i, article) in latest.iter().enumerate() {
        widgets::news_card(
            frame,
            chunks[7 + i],
            state,
            article,
            false,
            state.home.cursor == i + 1,
        );
    }

    widgets::section_title(
        frame,
        chunks[7 + latest.len()],
        state,
        &format!("{} TRENDING", icon(state, IconName::Flash)),
    );
    frame.render_widget(
        Paragraph::new(widgets::tag_chips(
            state,
            catalog.trending_tags().iter().copied(),
        )),
        chunks[8 + latest.len()],
    );
}

fn render_quick_row(frame: &mut Frame, area: Rect, state: &AppState) {
    let quick = state.catalog.quick_categories();
    let constraints: Vec<Constraint> = quick
        .iter()
        .map(|_| Constraint::Ratio(1, quick.len() as u32))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (entry, chunk) in quick.iter().zip(chunks.iter()) {
        widgets::quick_category(frame, *chunk, state, entry);
    }
}
