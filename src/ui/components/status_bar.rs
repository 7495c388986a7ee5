//! Status bar component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::constants::{LOADING_MESSAGE, STATUS_HINTS};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App) {
        let status_text = if app.loading {
            LOADING_MESSAGE
        } else {
            // Show helpful shortcuts
            STATUS_HINTS
        };

        let status_color = if app.loading {
            Color::Yellow
        } else if app.load_failed {
            Color::Red
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
