//! askpdf engine: reads the selected files and runs the backend round trip.
mod engine;
mod form;
mod submit;
mod types;

pub use engine::EngineHandle;
pub use form::{build_form, load_parts, FilePart, FILES_FIELD, QUERY_FIELD};
pub use submit::{ReqwestSubmitter, SubmitSettings, Submitter};
pub use types::{
    EngineError, EngineEvent, FailureKind, QueryAnswer, QueryRequest, RequestId, SubmitError,
};
