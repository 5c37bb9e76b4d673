//! KeyboardMiddleware - translates key presses into dashboard actions
//!
//! ## Layer 1: Priority keys
//! Ctrl+C always quits. Esc closes the help overlay, or quits when it is
//! not shown. While help is shown every other key except F1 is swallowed.
//!
//! ## Layer 2: Commands
//! Function keys trigger operations regardless of focus.
//!
//! ## Layer 3: Focus
//! Tab/Shift+Tab move focus. Text fields take characters and Backspace,
//! the file list takes arrow keys. Enter acts on the focused field.

use crate::actions::{Action, AnalysisAction, FormAction, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, FormField};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Default)]
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Translate one key; returns the action to dispatch, if any
    fn translate(key: KeyEvent, state: &AppState) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Layer 1
        if ctrl && key.code == KeyCode::Char('c') {
            return Some(Action::Global(GlobalAction::Quit));
        }
        if key.code == KeyCode::Esc {
            return Some(if state.show_help {
                Action::Global(GlobalAction::CloseHelp)
            } else {
                Action::Global(GlobalAction::Quit)
            });
        }
        if key.code == KeyCode::F(1) {
            return Some(Action::Global(GlobalAction::ToggleHelp));
        }
        if state.show_help {
            return None;
        }

        // Layer 2
        let command = match key.code {
            KeyCode::F(2) => Some(AnalysisAction::Clone),
            KeyCode::F(3) => Some(AnalysisAction::Scan),
            KeyCode::F(4) => Some(AnalysisAction::Summarize),
            KeyCode::F(5) => Some(AnalysisAction::AnalyzeChange),
            _ => None,
        };
        if let Some(command) = command {
            return Some(Action::Analysis(command));
        }

        // Layer 3
        let focus = state.form.focus;
        match key.code {
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                Some(Action::Form(FormAction::FocusPrevious))
            }
            KeyCode::Tab => Some(Action::Form(FormAction::FocusNext)),
            KeyCode::BackTab => Some(Action::Form(FormAction::FocusPrevious)),
            KeyCode::Enter => Some(Action::Analysis(Self::submit(focus))),
            KeyCode::Down if focus == FormField::FileList => {
                Some(Action::Form(FormAction::SelectNext))
            }
            KeyCode::Up if focus == FormField::FileList => {
                Some(Action::Form(FormAction::SelectPrevious))
            }
            KeyCode::Char('j') if focus == FormField::FileList => {
                Some(Action::Form(FormAction::SelectNext))
            }
            KeyCode::Char('k') if focus == FormField::FileList => {
                Some(Action::Form(FormAction::SelectPrevious))
            }
            KeyCode::Char('u') if ctrl && focus.is_text_input() => {
                Some(Action::Form(FormAction::ClearLine))
            }
            KeyCode::Char(c)
                if focus.is_text_input()
                    && !ctrl
                    && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(Action::Form(FormAction::Char(c)))
            }
            KeyCode::Backspace if focus.is_text_input() => {
                Some(Action::Form(FormAction::Backspace))
            }
            _ => None,
        }
    }

    /// Operation triggered by Enter on a field
    fn submit(focus: FormField) -> AnalysisAction {
        match focus {
            FormField::RepoUrl => AnalysisAction::Clone,
            FormField::Folder => AnalysisAction::ApplyFolder,
            FormField::ChangedFile => AnalysisAction::AnalyzeChange,
            FormField::FileList => AnalysisAction::ExplainSelected,
        }
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            match Self::translate(*key, state) {
                Some(translated) => {
                    log::debug!("KeyboardMiddleware: {:?} -> {:?}", key.code, translated);
                    dispatcher.dispatch(translated);
                }
                None => log::trace!("KeyboardMiddleware: ignoring {:?}", key.code),
            }
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    fn press(code: KeyCode, modifiers: KeyModifiers, state: &AppState) -> Vec<Action> {
        let (tx, rx) = channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = KeyboardMiddleware::new();
        let action = Action::Global(GlobalAction::KeyPressed(KeyEvent::new(code, modifiers)));
        assert!(!middleware.handle(&action, state, &dispatcher));
        rx.try_iter().collect()
    }

    fn focused(field: FormField) -> AppState {
        let mut state = AppState::default();
        state.form.focus = field;
        state
    }

    #[test]
    fn test_ctrl_c_quits() {
        let actions = press(KeyCode::Char('c'), KeyModifiers::CONTROL, &AppState::default());
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::Quit)]
        ));
    }

    #[test]
    fn test_esc_closes_help_first() {
        let mut state = AppState::default();
        state.show_help = true;
        let actions = press(KeyCode::Esc, KeyModifiers::NONE, &state);
        assert!(matches!(
            actions.as_slice(),
            [Action::Global(GlobalAction::CloseHelp)]
        ));

        let actions = press(KeyCode::F(3), KeyModifiers::NONE, &state);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_function_keys_trigger_operations() {
        let state = AppState::default();
        let actions = press(KeyCode::F(5), KeyModifiers::NONE, &state);
        assert!(matches!(
            actions.as_slice(),
            [Action::Analysis(AnalysisAction::AnalyzeChange)]
        ));
    }

    #[test]
    fn test_enter_depends_on_focus() {
        let cases = [
            (FormField::RepoUrl, "Clone"),
            (FormField::Folder, "ApplyFolder"),
            (FormField::ChangedFile, "AnalyzeChange"),
            (FormField::FileList, "ExplainSelected"),
        ];
        for (field, expected) in cases {
            let actions = press(KeyCode::Enter, KeyModifiers::NONE, &focused(field));
            match actions.as_slice() {
                [Action::Analysis(action)] => assert_eq!(format!("{:?}", action), expected),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn test_typing_goes_to_text_fields_only() {
        let actions = press(KeyCode::Char('j'), KeyModifiers::NONE, &focused(FormField::Folder));
        assert!(matches!(
            actions.as_slice(),
            [Action::Form(FormAction::Char('j'))]
        ));

        let actions = press(
            KeyCode::Char('j'),
            KeyModifiers::NONE,
            &focused(FormField::FileList),
        );
        assert!(matches!(
            actions.as_slice(),
            [Action::Form(FormAction::SelectNext)]
        ));
    }

    #[test]
    fn test_other_actions_pass_through() {
        let (tx, _rx) = channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = KeyboardMiddleware::new();
        assert!(middleware.handle(
            &Action::Global(GlobalAction::Quit),
            &AppState::default(),
            &dispatcher
        ));
    }
}
