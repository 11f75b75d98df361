use crate::view_model::{AppViewModel, DropZone, FileRow, SUBMIT_LABEL, SUBMIT_LABEL_BUSY};
use crate::SelectedFile;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    files: Vec<SelectedFile>,
    query: String,
    result: String,
    dragging: bool,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let loading = self.is_loading();
        let drop_zone = if self.dragging {
            DropZone::Dragging
        } else if self.files.is_empty() {
            DropZone::Empty
        } else {
            DropZone::HasFiles
        };
        let answer = (!loading && !self.result.is_empty()).then(|| self.result.clone());

        AppViewModel {
            files: self
                .files
                .iter()
                .map(|file| FileRow {
                    name: file.name.clone(),
                    is_pdf: file.is_pdf(),
                })
                .collect(),
            file_count: self.files.len(),
            query: self.query.clone(),
            drop_zone,
            submit_enabled: self.can_submit(),
            submit_label: if loading { SUBMIT_LABEL_BUSY } else { SUBMIT_LABEL },
            loading,
            answer,
        }
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn can_submit(&self) -> bool {
        !self.files.is_empty() && !self.query.is_empty() && !self.is_loading()
    }

    pub(crate) fn replace_files(&mut self, files: Vec<SelectedFile>) {
        self.files = files;
        self.dirty = true;
    }

    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        if self.dragging != dragging {
            self.dragging = dragging;
            self.dirty = true;
        }
    }

    pub(crate) fn set_query(&mut self, query: String) {
        if self.query != query {
            self.query = query;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.in_flight = Some(request_id);
        self.dirty = true;
        request_id
    }

    /// Returns false when `request_id` is not the request in flight.
    pub(crate) fn finish_request(&mut self, request_id: RequestId, result: String) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        self.result = result;
        self.dirty = true;
        true
    }
}
