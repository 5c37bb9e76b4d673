//! Form Actions
//!
//! Editing of the focused input field and navigation between fields and
//! within the scanned file list.

/// Actions for the input form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Move focus to the next field
    FocusNext,
    /// Move focus to the previous field
    FocusPrevious,
    /// Insert a character into the focused field
    Char(char),
    /// Delete the last character of the focused field
    Backspace,
    /// Clear the focused field
    ClearLine,
    /// Move the file list cursor down
    SelectNext,
    /// Move the file list cursor up
    SelectPrevious,
}
