use std::sync::Once;

use askpdf_core::{
    update, AppState, Effect, Msg, RequestId, SelectedFile, SubmitOutcome, BACKEND_ERROR_MESSAGE,
    SUBMIT_LABEL, SUBMIT_LABEL_BUSY,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(askpdf_logging::initialize_for_tests);
}

fn submitted() -> (AppState, RequestId) {
    let files = vec![SelectedFile::from_path("report.pdf")];
    let (state, _) = update(AppState::new(), Msg::FilesSelected(files));
    let (state, _) = update(state, Msg::QueryChanged("summary?".to_string()));
    let (state, effects) = update(state, Msg::SubmitClicked);
    let request_id = effects
        .iter()
        .map(|effect| match effect {
            Effect::SubmitQuery { request_id, .. } => *request_id,
        })
        .next()
        .expect("submit effect");
    (state, request_id)
}

#[test]
fn loading_active_only_while_request_in_flight() {
    init_logging();
    let (state, request_id) = submitted();
    let view = state.view();
    assert!(view.loading);
    assert!(!view.submit_enabled);
    assert_eq!(view.submit_label, SUBMIT_LABEL_BUSY);
    assert_eq!(view.answer, None);

    let (state, effects) = update(
        state,
        Msg::SubmitCompleted {
            request_id,
            outcome: SubmitOutcome::Answered("## Summary\nAll clear.".to_string()),
        },
    );
    assert!(effects.is_empty());
    let view = state.view();
    assert!(!view.loading);
    assert!(view.submit_enabled);
    assert_eq!(view.submit_label, SUBMIT_LABEL);
    assert_eq!(view.answer.as_deref(), Some("## Summary\nAll clear."));
}

#[test]
fn failure_yields_fallback_message() {
    init_logging();
    let (state, request_id) = submitted();
    let (state, _) = update(
        state,
        Msg::SubmitCompleted {
            request_id,
            outcome: SubmitOutcome::Failed,
        },
    );

    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.answer.as_deref(), Some(BACKEND_ERROR_MESSAGE));
    assert_eq!(BACKEND_ERROR_MESSAGE, "Error contacting backend.");
}

#[test]
fn previous_answer_hidden_during_next_request() {
    init_logging();
    let (state, first) = submitted();
    let (state, _) = update(
        state,
        Msg::SubmitCompleted {
            request_id: first,
            outcome: SubmitOutcome::Answered("first".to_string()),
        },
    );
    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(effects.len(), 1);
    assert_eq!(state.view().answer, None);

    let second = state.in_flight().expect("second request in flight");
    assert_ne!(first, second);
    let (state, _) = update(
        state,
        Msg::SubmitCompleted {
            request_id: second,
            outcome: SubmitOutcome::Answered("second".to_string()),
        },
    );
    assert_eq!(state.view().answer.as_deref(), Some("second"));
}

#[test]
fn stale_completion_is_ignored() {
    init_logging();
    let (mut state, request_id) = submitted();
    assert!(state.consume_dirty());
    let (mut state, _) = update(
        state,
        Msg::SubmitCompleted {
            request_id: request_id + 41,
            outcome: SubmitOutcome::Answered("not ours".to_string()),
        },
    );

    assert!(!state.consume_dirty());
    let view = state.view();
    assert!(view.loading);
    assert_eq!(view.answer, None);
}

#[test]
fn empty_answer_is_not_shown() {
    init_logging();
    let (state, request_id) = submitted();
    let (state, _) = update(
        state,
        Msg::SubmitCompleted {
            request_id,
            outcome: SubmitOutcome::Answered(String::new()),
        },
    );
    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.answer, None);
}
