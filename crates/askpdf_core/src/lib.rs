//! askpdf core: pure form state machine and view-model helpers.
mod effect;
mod msg;
mod selection;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{Msg, SubmitOutcome};
pub use selection::{parse_path_list, SelectedFile};
pub use state::{AppState, RequestId};
pub use update::update;
pub use view_model::{
    AppViewModel, DropZone, FileRow, BACKEND_ERROR_MESSAGE, LOADING_HINT, SUBMIT_LABEL,
    SUBMIT_LABEL_BUSY,
};
