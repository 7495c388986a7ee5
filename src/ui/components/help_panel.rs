//! Help panel component

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel
    pub fn render(f: &mut Frame, app: &App) {
        let screen_width = f.area().width;
        let screen_height = f.area().height;

        let (help_width, help_height) = LayoutManager::help_panel_dimensions(screen_width, screen_height);
        let help_area = LayoutManager::centered_rect(help_width, help_height, f.area());
        f.render_widget(Clear, help_area);

        let help_content = r"
ESSAYIST - On Liberty & Power Reader
====================================

PAGE NAVIGATION
---------------
n / → / PgDn   Next page
p / ← / PgUp   Previous page
0              First page
$ / End        Last page

READING
-------
j / ↓          Scroll down within the page
k / ↑          Scroll up within the page
g / Home       Back to the top of the page

GENERAL CONTROLS
----------------
?              Toggle this help panel
q / Esc        Quit
Ctrl+C         Quit

NOTES
-----
Essays are ordered newest first, ten to a page.
The pagination bar is hidden when everything fits on one page.

Press 'Esc' or '?' to close this help panel
";

        // Apply scroll offset to the content
        let lines: Vec<&str> = help_content.lines().collect();
        let total_lines = lines.len();
        let visible_height = help_height.saturating_sub(2) as usize; // Account for borders

        // Clamp scroll offset to valid range
        let max_scroll = total_lines.saturating_sub(visible_height);
        let scroll_offset = app.help_scroll_offset.min(max_scroll);

        let visible_lines: Vec<&str> = lines
            .iter()
            .skip(scroll_offset)
            .take(visible_height)
            .copied()
            .collect();

        let help_paragraph = Paragraph::new(visible_lines.join("\n"))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            )
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        f.render_widget(help_paragraph, help_area);
    }
}
