//! UI components
//!
//! Each component is a pure render of the current application state into
//! its region; nothing here depends on the history of prior renders.

pub mod article_list;
pub mod help_panel;
pub mod pagination_bar;
pub mod status_bar;

pub use article_list::ArticleList;
pub use help_panel::HelpPanel;
pub use pagination_bar::PaginationBar;
pub use status_bar::StatusBar;
