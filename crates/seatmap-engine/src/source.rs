// Roster sources: where the raw roster text comes from.
//
// Fetching is the only step of a load that can fail for reasons outside the
// roster itself; those failures surface as `TransportError`.

use std::path::{Path, PathBuf};

/// The roster text could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to fetch {origin}: {message}")]
pub struct TransportError {
    /// What was being fetched (a path, a URL, ...).
    pub origin: String,
    pub message: String,
}

impl TransportError {
    pub fn new(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            message: message.into(),
        }
    }
}

/// Something that can produce roster text.
pub trait RosterSource {
    /// Human-readable description for logs and error messages.
    fn describe(&self) -> String;

    fn fetch(&self) -> Result<String, TransportError>;
}

/// Roster text already in memory (e.g. handed over by the page after its
/// own `fetch`).
#[derive(Debug, Clone)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl RosterSource for TextSource {
    fn describe(&self) -> String {
        "in-memory roster".to_string()
    }

    fn fetch(&self) -> Result<String, TransportError> {
        Ok(self.text.clone())
    }
}

/// A roster file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String, TransportError> {
        std::fs::read_to_string(&self.path)
            .map_err(|e| TransportError::new(self.describe(), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_source_returns_its_text() {
        let source = TextSource::new("name,table_id,table_name,side\n");
        assert_eq!(source.fetch().unwrap(), "name,table_id,table_name,side\n");
    }

    #[test]
    fn missing_file_is_a_transport_error() {
        let source = FileSource::new("/nonexistent/seatmap/guests.csv");
        let err = source.fetch().unwrap_err();
        assert_eq!(err.origin, "/nonexistent/seatmap/guests.csv");
        assert!(err.to_string().starts_with("failed to fetch /nonexistent/seatmap/guests.csv: "));
    }
}
