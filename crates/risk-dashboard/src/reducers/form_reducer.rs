//! Form Reducer
//!
//! Text editing and focus movement. File list cursor moves are handled by
//! the session, which owns the listing.

use crate::actions::FormAction;
use crate::state::FormState;

pub fn reduce_form(mut state: FormState, action: &FormAction) -> FormState {
    match action {
        FormAction::FocusNext => state.focus = state.focus.next(),
        FormAction::FocusPrevious => state.focus = state.focus.previous(),
        FormAction::Char(c) => {
            if let Some(value) = state.focused_value_mut() {
                value.push(*c);
            }
        }
        FormAction::Backspace => {
            if let Some(value) = state.focused_value_mut() {
                value.pop();
            }
        }
        FormAction::ClearLine => {
            if let Some(value) = state.focused_value_mut() {
                value.clear();
            }
        }
        FormAction::SelectNext | FormAction::SelectPrevious => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormField;

    fn type_text(mut state: FormState, text: &str) -> FormState {
        for c in text.chars() {
            state = reduce_form(state, &FormAction::Char(c));
        }
        state
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let state = FormState {
            focus: FormField::Folder,
            ..Default::default()
        };
        let state = type_text(state, "demox");
        let state = reduce_form(state, &FormAction::Backspace);
        assert_eq!(state.folder, "demo");
        assert!(state.repo_url.is_empty());
    }

    #[test]
    fn test_clear_line_and_focus() {
        let state = type_text(FormState::default(), "https://example.com");
        let state = reduce_form(state, &FormAction::ClearLine);
        assert!(state.repo_url.is_empty());

        let state = reduce_form(state, &FormAction::FocusPrevious);
        assert_eq!(state.focus, FormField::FileList);
        let state = type_text(state, "ignored");
        assert!(state.changed_file.is_empty());
    }
}
