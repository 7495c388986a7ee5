//! Main UI rendering and coordination
//!
//! Owns the terminal lifecycle and the single event loop: draw, poll input,
//! and resolve the one background feed load of this run.

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::Duration;

use super::app::App;
use super::components::{ArticleList, HelpPanel, PaginationBar, StatusBar};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::config::Config;
use crate::feed::{self, HttpFeed};

/// Run the main TUI application
pub async fn run_app(config: Config) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create application state and kick off the one feed load of this run
    let mut app = App::new();
    let url = config.feed.url.clone();
    log::info!("loading feed from {url}");
    app.load_task = Some(tokio::spawn(async move {
        let provider = HttpFeed::new(url);
        feed::load(&provider).await
    }));

    // Main application loop
    let res = run_ui(&mut terminal, &mut app, &config).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    config: &Config,
) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app, config))?;

        // Poll input with a timeout so the load task gets checked regularly
        if event::poll(Duration::from_millis(100))? {
            let _handled = handle_events(event::read()?, app);
        }

        // If the background load finished, populate the store or switch to
        // the error state; the view only ever sees the fixed message
        if let Some(handle_ref) = app.load_task.as_ref() {
            if handle_ref.is_finished() {
                if let Some(handle) = app.load_task.take() {
                    match handle.await {
                        Ok(Ok(articles)) => {
                            log::info!("feed loaded: {} articles", articles.len());
                            app.feed_loaded(articles);
                        }
                        Ok(Err(e)) => {
                            log::error!("feed load failed: {e}");
                            app.feed_failed();
                        }
                        Err(join_err) => {
                            log::error!("feed load task error: {join_err}");
                            app.feed_failed();
                        }
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
pub fn render_ui(f: &mut ratatui::Frame, app: &App, config: &Config) {
    let chunks = LayoutManager::main_layout(f.area(), app.paginator.controls_visible());

    ArticleList::render(f, chunks[0], app, &config.display.date_format);
    if app.paginator.controls_visible() {
        PaginationBar::render(f, chunks[1], app);
    }
    StatusBar::render(f, chunks[2], app);

    // Render help panel last to ensure it's on top of everything
    if app.show_help {
        HelpPanel::render(f, app);
    }
}
