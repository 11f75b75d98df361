use std::path::{Path, PathBuf};

use askpdf_logging::askpdf_debug;
use reqwest::multipart::{Form, Part};

use crate::{FailureKind, SubmitError};

/// Multipart field repeated once per selected file.
pub const FILES_FIELD: &str = "files";
/// Multipart field carrying the user's question.
pub const QUERY_FIELD: &str = "query";

/// One file, read into memory and ready to be attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Read every file in order. The first unreadable file fails the whole batch.
pub async fn load_parts(files: &[PathBuf]) -> Result<Vec<FilePart>, SubmitError> {
    let mut parts = Vec::with_capacity(files.len());
    for path in files {
        let bytes = tokio::fs::read(path).await.map_err(|err| {
            SubmitError::new(FailureKind::ReadFile { path: path.clone() }, err.to_string())
        })?;
        let part = FilePart {
            file_name: file_name(path),
            mime: mime_guess::from_path(path)
                .first_or_octet_stream()
                .essence_str()
                .to_string(),
            bytes,
        };
        askpdf_debug!(
            "Loaded part file_name={} mime={} bytes={}",
            part.file_name,
            part.mime,
            part.bytes.len()
        );
        parts.push(part);
    }
    Ok(parts)
}

/// Files first, in selection order, then the query.
pub fn build_form(parts: Vec<FilePart>, query: &str) -> Result<Form, SubmitError> {
    let mut form = Form::new();
    for part in parts {
        let attachment = Part::bytes(part.bytes)
            .file_name(part.file_name)
            .mime_str(&part.mime)
            .map_err(|err| SubmitError::new(FailureKind::Encode, err.to_string()))?;
        form = form.part(FILES_FIELD, attachment);
    }
    Ok(form.text(QUERY_FIELD, query.to_owned()))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
