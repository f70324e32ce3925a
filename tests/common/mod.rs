use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use ppgen::error::{Error, Result};
use ppgen::source::SourceProvider;

/// Source files held in memory, keyed by their placeholder path.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    files: HashMap<String, String>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }
}

impl SourceProvider for InMemorySource {
    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    fn read(&self, path: &str) -> Result<String> {
        self.files.get(path).cloned().ok_or_else(|| Error::SourceRead {
            path: PathBuf::from(path),
            source: io::Error::new(io::ErrorKind::NotFound, "not in memory"),
        })
    }
}
