//! Article detail screen
//!
//! A scrollable full-article view. Body text is rendered in full, never
//! truncated; overly long content is reached by scrolling.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use libriffwire::{Article, ColorName, IconName};

use crate::app::AppState;

use super::{color, icon, widgets};

pub(super) fn render(frame: &mut Frame, area: Rect, state: &AppState, article: &Article) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    widgets::back_header(frame, chunks[0], state, None, Some(IconName::Share));

    let gray = Style::default().fg(color(state, ColorName::TextGray));
    let dark = Style::default().fg(color(state, ColorName::TextDark));

    let mut lines = vec![
        // Stand-in for the hero image; resolution is not our business
        Line::from(Span::styled(
            "▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓",
            dark,
        )),
        Line::from(Span::styled(format!("▓▓ {}", article.image_url), dark)),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} ", article.category.to_uppercase()),
            Style::default()
                .fg(color(state, ColorName::TextWhite))
                .bg(color(state, ColorName::Primary))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            article.title.clone(),
            Style::default()
                .fg(color(state, ColorName::TextWhite))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} {}", icon(state, IconName::Person), article.author), gray),
            Span::raw("   "),
            Span::styled(
                format!("{} {} min read", icon(state, IconName::Time), article.read_time),
                gray,
            ),
            Span::raw("   "),
            Span::styled(
                format!("{} {}", icon(state, IconName::Calendar), article.published_at),
                gray,
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("▌ ", Style::default().fg(color(state, ColorName::Primary))),
            Span::styled(
                article.summary.clone(),
                Style::default()
                    .fg(color(state, ColorName::TextWhite))
                    .add_modifier(Modifier::ITALIC),
            ),
        ]),
        Line::from(""),
    ];

    for body_line in article.content.split('\n') {
        lines.push(Line::from(Span::styled(body_line.to_string(), gray)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tags:",
        Style::default()
            .fg(color(state, ColorName::TextWhite))
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(widgets::tag_chips(
        state,
        article.tags.iter().map(String::as_str),
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Source: {}", article.source),
        dark.add_modifier(Modifier::ITALIC),
    )));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((state.detail.scroll, 0)),
        chunks[1],
    );
}
