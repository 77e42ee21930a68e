//! Presentational widgets
//!
//! Stateless mappers from records and flags to view fragments: the
//! header bars, the two news-card modes, category cards, tag chips.
//! No data transformation happens here beyond display formatting
//! (uppercasing category labels); text is never truncated.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use libriffwire::catalog::QuickCategory;
use libriffwire::{Article, Category, ColorName, IconName};

use crate::app::AppState;

use super::{color, icon};

/// A bordered block in the house style
pub fn bordered_block<'a>(state: &AppState, title: &'a str) -> Block<'a> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color(state, ColorName::BackgroundGray)))
}

/// The home header: menu glyph, shouting title, search glyph
pub fn header(frame: &mut Frame, area: Rect, state: &AppState, title: &str) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(color(state, ColorName::Primary)))
        .style(Style::default().bg(color(state, ColorName::BackgroundBlack)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(6),
        ])
        .split(inner);

    let dim = Style::default().fg(color(state, ColorName::TextGray));
    frame.render_widget(
        Paragraph::new(format!(" {} ", icon(state, IconName::Grid))).style(dim),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            title.to_string(),
            Style::default()
                .fg(color(state, ColorName::TextWhite))
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(format!(" {} ", icon(state, IconName::Search)))
            .style(dim)
            .alignment(Alignment::Right),
        chunks[2],
    );
}

/// A sub-screen header: back glyph, optional title, optional right icon
pub fn back_header(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    title: Option<&str>,
    right: Option<IconName>,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(color(state, ColorName::BackgroundGray)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(6),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(format!(" {} ", icon(state, IconName::ArrowBack)))
            .style(Style::default().fg(color(state, ColorName::TextWhite))),
        chunks[0],
    );

    if let Some(title) = title {
        frame.render_widget(
            Paragraph::new(Span::styled(
                title.to_string(),
                Style::default()
                    .fg(color(state, ColorName::TextWhite))
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            chunks[1],
        );
    }

    if let Some(right) = right {
        frame.render_widget(
            Paragraph::new(format!(" {} ", icon(state, right)))
                .style(Style::default().fg(color(state, ColorName::TextWhite)))
                .alignment(Alignment::Right),
            chunks[2],
        );
    }
}

/// A shouting section title
pub fn section_title(frame: &mut Frame, area: Rect, state: &AppState, text: &str) {
    frame.render_widget(
        Paragraph::new(Span::styled(
            text.to_string(),
            Style::default()
                .fg(color(state, ColorName::TextWhite))
                .add_modifier(Modifier::BOLD),
        )),
        area,
    );
}

/// A news card, in featured or compact mode
///
/// Both modes render the same article fields; featured adds the summary
/// and the image reference. Selection is shown on the border.
pub fn news_card(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    article: &Article,
    featured: bool,
    selected: bool,
) {
    let border = if selected {
        color(state, ColorName::Primary)
    } else {
        color(state, ColorName::BackgroundGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let badge = Span::styled(
        format!(" {} ", article.category.to_uppercase()),
        Style::default()
            .fg(color(state, ColorName::TextWhite))
            .bg(color(state, ColorName::Primary))
            .add_modifier(Modifier::BOLD),
    );
    let title = Span::styled(
        article.title.clone(),
        Style::default()
            .fg(color(state, ColorName::TextWhite))
            .add_modifier(Modifier::BOLD),
    );
    let meta = Line::from(vec![
        Span::styled(
            format!("{} {}", icon(state, IconName::Person), article.author),
            Style::default().fg(color(state, ColorName::TextGray)),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} {} min read", icon(state, IconName::Time), article.read_time),
            Style::default().fg(color(state, ColorName::TextGray)),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} {}", icon(state, IconName::Calendar), article.published_at),
            Style::default().fg(color(state, ColorName::TextGray)),
        ),
    ]);

    let lines = if featured {
        vec![
            Line::from(Span::styled(
                format!("▓▓ {}", article.image_url),
                Style::default().fg(color(state, ColorName::TextDark)),
            )),
            Line::from(badge),
            Line::from(title),
            Line::from(Span::styled(
                article.summary.clone(),
                Style::default().fg(color(state, ColorName::TextGray)),
            )),
            meta,
        ]
    } else {
        vec![Line::from(vec![badge, Span::raw(" "), title]), meta]
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

/// A category card for the categories grid
pub fn category_card(frame: &mut Frame, area: Rect, state: &AppState, category: &Category) {
    let accent = color(state, category.color);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", icon(state, category.icon)), Style::default().fg(accent)),
            Span::styled(
                category.name.clone(),
                Style::default()
                    .fg(color(state, ColorName::TextWhite))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} articles", category.news_count),
            Style::default().fg(color(state, ColorName::TextGray)),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// A quick-category chip for the home screen's horizontal row
pub fn quick_category(frame: &mut Frame, area: Rect, state: &AppState, entry: &QuickCategory) {
    let accent = color(state, entry.color);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", icon(state, entry.icon)), Style::default().fg(accent)),
            Span::styled(
                entry.name,
                Style::default().fg(color(state, ColorName::TextWhite)),
            ),
        ]))
        .alignment(Alignment::Center),
        inner,
    );
}

/// Hash-prefixed tag chips on one line
pub fn tag_chips<'a>(state: &AppState, tags: impl IntoIterator<Item = &'a str>) -> Line<'a> {
    let style = Style::default().fg(color(state, ColorName::Accent));
    let mut spans = Vec::new();
    for tag in tags {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("#{}", tag), style));
    }
    Line::from(spans)
}
