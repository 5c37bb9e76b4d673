//! Global actions - not tied to any specific panel

use ratatui::crossterm::event::KeyEvent;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Show or hide the help overlay
    ToggleHelp,
    /// Hide the help overlay
    CloseHelp,
    /// Quit the application
    Quit,
}
