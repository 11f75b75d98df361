#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked files through the file input.
    FilesSelected(Vec<crate::SelectedFile>),
    /// A drag is hovering over the drop zone.
    DragOver,
    /// The drag left the drop zone without dropping.
    DragLeave,
    /// Files were dropped on the drop zone.
    FilesDropped(Vec<crate::SelectedFile>),
    /// User edited the query box.
    QueryChanged(String),
    /// User pressed Ask.
    SubmitClicked,
    /// Engine finished a request.
    SubmitCompleted {
        request_id: crate::RequestId,
        outcome: SubmitOutcome,
    },
}

/// What the user gets to see for a finished request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend's `result` markdown.
    Answered(String),
    /// Anything went wrong between reading the files and decoding the reply.
    Failed,
}
