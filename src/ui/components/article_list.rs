//! Article list component
//!
//! Renders the current page's articles as cards: date and author line,
//! headline, preview, optional image and source-attribution lines, and a
//! "Continue reading" link. Also owns the empty-state and error-state
//! presentations.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::super::app::App;
use crate::article::Article;
use crate::constants::{
    AUTHOR_SEPARATOR, CONTENT_TITLE, DEFAULT_SOURCE_LABEL, EMPTY_STATE_HINT, EMPTY_STATE_TITLE,
    LOADING_MESSAGE, LOAD_ERROR_MESSAGE, READ_MORE_LABEL, SOURCE_PREFIX,
};
use crate::sanitize;
use crate::utils::datetime;

/// Article list component
pub struct ArticleList;

impl ArticleList {
    /// Render the content region for the current application state
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App, date_format: &str) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(CONTENT_TITLE)
            .title_alignment(Alignment::Center);

        // Error state replaces all article content with one fixed message
        if app.load_failed {
            let error = Paragraph::new(LOAD_ERROR_MESSAGE)
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true });
            f.render_widget(error, area);
            return;
        }

        if app.loading {
            let loading = Paragraph::new(LOADING_MESSAGE)
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow));
            f.render_widget(loading, area);
            return;
        }

        // Empty collection: placeholder instead of a card list, regardless
        // of pagination state
        if app.store.is_empty() {
            let placeholder = Paragraph::new(vec![
                Line::from(""),
                Line::from(EMPTY_STATE_TITLE),
                Line::from(Span::styled(
                    EMPTY_STATE_HINT,
                    Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
                )),
            ])
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            f.render_widget(placeholder, area);
            return;
        }

        let width = area.width.saturating_sub(2) as usize;
        let lines = Self::card_lines(app.current_slice(), date_format, width);

        let list = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((app.scroll_offset, 0));
        f.render_widget(list, area);
    }

    /// Build the card lines for one page of articles
    fn card_lines(articles: &[Article], date_format: &str, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for (index, article) in articles.iter().enumerate() {
            if index > 0 {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "─".repeat(width),
                    Style::default().fg(Color::DarkGray),
                )));
                lines.push(Line::from(""));
            }
            lines.extend(Self::card(article, date_format));
        }

        lines
    }

    /// Build the lines of a single article card
    fn card(article: &Article, date_format: &str) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        // Meta line: "March 3, 2024 • By Author"
        let date = datetime::format_display_date(&article.timestamp, date_format);
        lines.push(Line::from(vec![
            Span::styled(sanitize::clean(&date), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{AUTHOR_SEPARATOR}{}", sanitize::clean(article.display_author())),
                Style::default().fg(Color::Gray),
            ),
        ]));

        // Headline, the link target being the detail page
        lines.push(Line::from(Span::styled(
            sanitize::clean(&article.headline),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));

        // Image line, omitted entirely when the image is absent or blank
        if article.has_image() {
            if let Some(image) = article.image.as_deref() {
                lines.push(Line::from(Span::styled(
                    format!("🖼 {}", sanitize::clean(image)),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }

        // Preview text
        lines.push(Line::from(sanitize::clean(&article.preview)));

        // Source attribution, omitted entirely when there is no source URL
        if let Some(source_url) = article.source_url.as_deref() {
            let source = article
                .source
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(DEFAULT_SOURCE_LABEL);
            lines.push(Line::from(Span::styled(
                format!(
                    "{SOURCE_PREFIX}{} ({})",
                    sanitize::clean(source),
                    sanitize::clean(source_url)
                ),
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            )));
        }

        // Read-more link
        lines.push(Line::from(Span::styled(
            format!("{READ_MORE_LABEL} {}", sanitize::clean(&article.detail_page)),
            Style::default().fg(Color::Blue),
        )));

        lines
    }
}
