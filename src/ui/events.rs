//! Event handling and key bindings
//!
//! Raw terminal events are translated into explicit [`Command`]s before
//! they touch application state, so the transition logic is decoupled from
//! the input source.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use super::app::App;

/// Explicit navigation commands dispatched to the application state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // Page navigation
    NextPage,
    PrevPage,
    FirstPage,
    LastPage,

    // Scrolling within the current page
    ScrollUp,
    ScrollDown,
    ScrollTop,

    // UI operations
    ToggleHelp,

    // App control
    Quit,
}

/// Handle all user input events. Returns whether the event was consumed.
pub fn handle_events(event: Event, app: &mut App) -> bool {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            // Help panel blocks everything except closing and scrolling it
            if app.show_help {
                return handle_help_panel(key, app);
            }

            if let Some(command) = map_key(key) {
                app.dispatch(command);
                return true;
            }
        }
    }
    false
}

/// Map a key press to a navigation command in normal mode.
#[must_use]
pub fn map_key(key: crossterm::event::KeyEvent) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('n' | 'l') | KeyCode::Right | KeyCode::PageDown => Some(Command::NextPage),
        KeyCode::Char('p' | 'h') | KeyCode::Left | KeyCode::PageUp => Some(Command::PrevPage),
        KeyCode::Char('j') | KeyCode::Down => Some(Command::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Command::ScrollUp),
        KeyCode::Char('g') | KeyCode::Home => Some(Command::ScrollTop),
        KeyCode::Char('0') => Some(Command::FirstPage),
        KeyCode::Char('$') | KeyCode::End => Some(Command::LastPage),
        KeyCode::Char('?') => Some(Command::ToggleHelp),
        _ => None,
    }
}

/// Handle events while the help panel is open
fn handle_help_panel(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('?' | 'q') | KeyCode::Esc => {
            app.show_help = false;
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
            true
        }
        KeyCode::Home => {
            app.help_scroll_offset = 0;
            true
        }
        KeyCode::End => {
            app.help_scroll_offset = usize::MAX; // Clamped in the UI
            true
        }
        _ => false, // Ignore all other keys when help is open
    }
}
