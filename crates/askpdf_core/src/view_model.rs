/// Shown in place of an answer whenever a request fails for any reason.
pub const BACKEND_ERROR_MESSAGE: &str = "Error contacting backend.";
pub const SUBMIT_LABEL: &str = "Ask";
pub const SUBMIT_LABEL_BUSY: &str = "Processing...";
pub const LOADING_HINT: &str = "This may take a few minutes...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropZone {
    #[default]
    Empty,
    Dragging,
    HasFiles,
}

/// One selected file as the file list shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    pub name: String,
    /// Advisory; non-PDF files are still sent.
    pub is_pdf: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Selection order.
    pub files: Vec<FileRow>,
    pub file_count: usize,
    pub query: String,
    pub drop_zone: DropZone,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub loading: bool,
    /// Markdown to show verbatim; `None` while loading or before any result.
    pub answer: Option<String>,
}
