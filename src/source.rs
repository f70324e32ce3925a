//! Access to the source files that placeholders refer to.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Trait for looking up the source files named by placeholders.
pub trait SourceProvider {
    /// Whether the source file at `path` exists.
    ///
    /// # Arguments
    /// * `path` - Path captured from the placeholder, e.g. `src/ppMac.c`
    fn exists(&self, path: &str) -> bool;

    /// Reads the whole source file at `path`.
    ///
    /// # Errors
    /// * `Error::SourceRead` if the file exists but cannot be read
    fn read(&self, path: &str) -> Result<String>;
}

/// Reads source files from disk, resolving placeholder paths against `root`.
#[derive(Debug, Clone)]
pub struct FileSystemSource {
    root: PathBuf,
}

impl FileSystemSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl SourceProvider for FileSystemSource {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn read(&self, path: &str) -> Result<String> {
        let path = self.resolve(path);
        fs::read_to_string(&path).map_err(|source| Error::SourceRead { path, source })
    }
}
