use crate::{RequestId, SelectedFile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send the selected files and the query to the backend as one request.
    SubmitQuery {
        request_id: RequestId,
        files: Vec<SelectedFile>,
        query: String,
    },
}
