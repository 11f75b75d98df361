use std::path::{Path, PathBuf};

use url::Url;

/// A file handle as chosen by the user. Contents are read only at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
}

impl SelectedFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    /// Advisory only; selection is never filtered on it.
    pub fn is_pdf(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
    }
}

impl AsRef<Path> for SelectedFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// Parse typed or pasted text into file handles, in order.
///
/// Terminals deliver a drag-and-drop as pasted text, so this accepts what
/// they emit: whitespace or newline separated words, POSIX-style single and
/// double quotes, backslash escapes, and `file://` URLs.
pub fn parse_path_list(raw: &str) -> Vec<SelectedFile> {
    split_words(raw)
        .into_iter()
        .filter(|word| !word.is_empty())
        .map(|word| SelectedFile::from_path(word_to_path(&word)))
        .collect()
}

fn split_words(raw: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some('"') if ch == '\\' => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            Some(_) => current.push(ch),
            None => match ch {
                '\'' | '"' => {
                    quote = Some(ch);
                    in_word = true;
                }
                '\\' => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                    in_word = true;
                }
                c if c.is_whitespace() => {
                    if in_word {
                        words.push(std::mem::take(&mut current));
                        in_word = false;
                    }
                }
                c => {
                    current.push(c);
                    in_word = true;
                }
            },
        }
    }
    if in_word {
        words.push(current);
    }
    words
}

fn word_to_path(word: &str) -> PathBuf {
    if word.starts_with("file://") {
        if let Some(path) = Url::parse(word).ok().and_then(|url| url.to_file_path().ok()) {
            return path;
        }
    }
    PathBuf::from(word)
}
