//! Pagination bar component
//!
//! Previous/next controls with the page indicator between them. The bar is
//! only rendered at all when the collection spans more than one page; the
//! layout gives it zero height otherwise.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::constants::{NEXT_LABEL, PREV_LABEL};

/// Pagination bar component
pub struct PaginationBar;

impl PaginationBar {
    /// Render the pagination controls and page indicator
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let prev_style = if app.paginator.is_first_page() {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::White)
        };
        let next_style = if app.paginator.is_last_page() {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::White)
        };

        let line = Line::from(vec![
            Span::styled(PREV_LABEL, prev_style),
            Span::raw("   "),
            Span::styled(app.page_indicator(), Style::default().fg(Color::Gray)),
            Span::raw("   "),
            Span::styled(NEXT_LABEL, next_style),
        ]);

        let bar = Paragraph::new(line)
            .block(Block::default())
            .alignment(Alignment::Center);
        f.render_widget(bar, area);
    }
}
