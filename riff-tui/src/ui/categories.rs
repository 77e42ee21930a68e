//! Category browser screen

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use libriffwire::IconName;

use crate::app::AppState;

use super::{icon, widgets};

pub(super) fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let catalog = &state.catalog;
    let featured = catalog.category_featured();

    // Two-column grid, two categories per row
    let grid_rows = catalog.categories().len().div_ceil(2);

    let mut constraints = vec![Constraint::Length(3)];
    for _ in 0..grid_rows {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Length(1));
    for _ in featured {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    widgets::back_header(frame, chunks[0], state, Some("CATEGORIES"), None);

    for (row, pair) in catalog.categories().chunks(2).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1 + row]);

        for (category, col) in pair.iter().zip(cols.iter()) {
            widgets::category_card(frame, *col, state, category);
        }
    }

    widgets::section_title(
        frame,
        chunks[1 + grid_rows],
        state,
        &format!("{} FEATURED FROM CATEGORIES", icon(state, IconName::Flash)),
    );
    for (i, article) in featured.iter().enumerate() {
        widgets::news_card(
            frame,
            chunks[2 + grid_rows + i],
            state,
            article,
            false,
            state.categories.cursor == i,
        );
    }
}
