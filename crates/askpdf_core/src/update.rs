use crate::{AppState, Effect, Msg, SubmitOutcome, BACKEND_ERROR_MESSAGE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FilesSelected(files) => {
            state.replace_files(files);
            Vec::new()
        }
        Msg::DragOver => {
            state.set_dragging(true);
            Vec::new()
        }
        Msg::DragLeave => {
            state.set_dragging(false);
            Vec::new()
        }
        Msg::FilesDropped(files) => {
            state.set_dragging(false);
            state.replace_files(files);
            Vec::new()
        }
        Msg::QueryChanged(query) => {
            state.set_query(query);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // The loading flag is the only thing serializing requests.
            if !state.can_submit() {
                return (state, Vec::new());
            }
            let request_id = state.begin_request();
            vec![Effect::SubmitQuery {
                request_id,
                files: state.files().to_vec(),
                query: state.query().to_owned(),
            }]
        }
        Msg::SubmitCompleted {
            request_id,
            outcome,
        } => {
            let result = match outcome {
                SubmitOutcome::Answered(text) => text,
                SubmitOutcome::Failed => BACKEND_ERROR_MESSAGE.to_owned(),
            };
            state.finish_request(request_id, result);
            Vec::new()
        }
    };

    (state, effects)
}
