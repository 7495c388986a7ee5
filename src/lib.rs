//! Essayist - a terminal reader for the On Liberty & Power essay feed
//!
//! This library fetches a JSON feed of published essays, sorts them
//! newest-first, partitions them into fixed-size pages, and renders the
//! current page in a terminal UI with previous/next navigation.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`article`] - The article data model and wire shapes
//! * [`config`] - Application configuration management
//! * [`feed`] - Feed provider client and article loading
//! * [`paginator`] - Page navigation state machine
//! * [`store`] - The immutable sorted article collection
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Article data model and feed wire shapes
pub mod article;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and fixed UI text
pub mod constants;

/// Feed provider abstraction, HTTP client, and article loading
pub mod feed;

/// Operational logging setup
pub mod logger;

/// Page navigation state machine
pub mod paginator;

/// Sanitization of untrusted feed text for terminal display
pub mod sanitize;

/// Sorted article collection and page-slice queries
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;

// Re-export the core model for convenient access
pub use article::Article;
