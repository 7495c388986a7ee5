//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

/// Number of articles shown on one page
pub const ARTICLES_PER_PAGE: usize = 10;

// Empty-state text
pub const EMPTY_STATE_TITLE: &str = "No essays have yet been published.";
pub const EMPTY_STATE_HINT: &str = "Return anon, for new writings shall appear in due course.";

// Error-state text (the detailed cause goes to the log, never the view)
pub const LOAD_ERROR_MESSAGE: &str = "Unable to retrieve essays. Please restart the reader.";

// Loading text
pub const LOADING_MESSAGE: &str = "Loading essays...";

// Article card text
pub const DEFAULT_AUTHOR: &str = "Anonymous";
pub const DEFAULT_SOURCE_LABEL: &str = "Original Source";
pub const SOURCE_PREFIX: &str = "Occasioned by: ";
pub const READ_MORE_LABEL: &str = "Continue reading ▸";
pub const AUTHOR_SEPARATOR: &str = " • By ";

// Pagination controls
pub const PREV_LABEL: &str = "◂ Prev";
pub const NEXT_LABEL: &str = "Next ▸";

// Status bar hints
pub const STATUS_HINTS: &str = "n/→: next page • p/←: prev page • j/k: scroll • ?: help • q: quit";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// View chrome
pub const CONTENT_TITLE: &str = " On Liberty & Power ";
