//! Application state and navigation logic
//!
//! [`App`] owns the loaded collection and the pagination state; every
//! mutation goes through an explicit [`Command`] dispatch so the whole
//! thing is testable without a terminal.

use tokio::task::JoinHandle;

use crate::article::Article;
use crate::constants::ARTICLES_PER_PAGE;
use crate::feed::LoadError;
use crate::paginator::Paginator;
use crate::store::ArticleStore;
use crate::ui::events::Command;

/// Application state
pub struct App {
    pub should_quit: bool,
    pub store: ArticleStore,
    pub paginator: Paginator,
    /// True until the one feed load of this run resolves.
    pub loading: bool,
    /// True when the load surfaced an error; the view shows the fixed
    /// error message instead of any article content.
    pub load_failed: bool,
    /// Vertical scroll offset into the current page's cards.
    pub scroll_offset: u16,
    pub show_help: bool,           // Toggle for help panel
    pub help_scroll_offset: usize, // Scroll position for help panel
    // Background load task handle (exactly one load per run)
    pub load_task: Option<JoinHandle<Result<Vec<Article>, LoadError>>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App instance, at page 1 with nothing loaded yet
    #[must_use]
    pub fn new() -> Self {
        Self {
            should_quit: false,
            store: ArticleStore::new(),
            paginator: Paginator::new(0, ARTICLES_PER_PAGE),
            loading: true,
            load_failed: false,
            scroll_offset: 0,
            show_help: false,
            help_scroll_offset: 0,
            load_task: None,
        }
    }

    /// Apply one navigation command.
    ///
    /// Page transitions that actually change the page reset the content
    /// scroll to the top; boundary no-ops leave everything untouched.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::NextPage => {
                if self.paginator.next() {
                    self.scroll_to_top();
                    log::debug!("page -> {}", self.paginator.current_page());
                }
            }
            Command::PrevPage => {
                if self.paginator.previous() {
                    self.scroll_to_top();
                    log::debug!("page -> {}", self.paginator.current_page());
                }
            }
            Command::FirstPage => {
                if self.paginator.jump(1) {
                    self.scroll_to_top();
                }
            }
            Command::LastPage => {
                if self.paginator.jump(self.paginator.total_pages()) {
                    self.scroll_to_top();
                }
            }
            Command::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            Command::ScrollDown => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
            }
            Command::ScrollTop => self.scroll_to_top(),
            Command::ToggleHelp => {
                self.show_help = !self.show_help;
                self.help_scroll_offset = 0;
            }
            Command::Quit => self.should_quit = true,
        }
    }

    fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// The loaded, sorted collection replaces whatever was there before;
    /// pagination restarts at page 1.
    pub fn feed_loaded(&mut self, articles: Vec<Article>) {
        self.store.replace(articles);
        self.paginator = Paginator::new(self.store.count(), ARTICLES_PER_PAGE);
        self.loading = false;
        self.load_failed = false;
        self.scroll_to_top();
    }

    /// Switch to the error state; the cause is already in the log.
    pub fn feed_failed(&mut self) {
        self.store.replace(Vec::new());
        self.paginator = Paginator::new(0, ARTICLES_PER_PAGE);
        self.loading = false;
        self.load_failed = true;
        self.scroll_to_top();
    }

    /// The articles on the current page.
    #[must_use]
    pub fn current_slice(&self) -> &[Article] {
        self.store.slice(self.paginator.current_page(), ARTICLES_PER_PAGE)
    }

    /// The page-indicator text, e.g. "Page 1 of 3".
    #[must_use]
    pub fn page_indicator(&self) -> String {
        format!(
            "Page {} of {}",
            self.paginator.current_page(),
            self.paginator.total_pages()
        )
    }
}
