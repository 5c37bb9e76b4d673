use crate::actions::{Action, FormAction, GlobalAction};
use crate::reducers::form_reducer::reduce_form;
use crate::reducers::session_reducer::{reduce_session, status_notice};
use crate::reducers::status_bar_reducer::reduce_status_bar;
use crate::state::AppState;

/// Root reducer - pure function that produces new state from current state + action
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Global(GlobalAction::ToggleHelp) => {
            state.show_help = !state.show_help;
        }
        Action::Global(GlobalAction::CloseHelp) => {
            state.show_help = false;
        }
        Action::Global(GlobalAction::KeyPressed(_)) => {}
        Action::Form(FormAction::SelectNext) => state.session.select_next(),
        Action::Form(FormAction::SelectPrevious) => state.session.select_previous(),
        Action::Form(form_action) => {
            state.form = reduce_form(state.form, form_action);
        }
        Action::Analysis(analysis) => {
            let notice = status_notice(&state.session, analysis);
            state.session = reduce_session(state.session, analysis);
            if let Some(notice) = notice {
                state.status_bar = reduce_status_bar(state.status_bar, &notice);
            }
        }
        Action::StatusBar(status_action) => {
            state.status_bar = reduce_status_bar(state.status_bar, status_action);
        }
    }

    state
}
