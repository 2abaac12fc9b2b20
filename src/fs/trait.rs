//! FileSystem trait definition with real and mock implementations

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Abstraction over file system operations for testability
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write a string to a file, replacing any existing content
    fn write(&self, path: &Path, contents: &str) -> Result<()>;

    /// Create a directory and any missing parents
    fn create_dir_all(&self, path: &Path) -> Result<()>;
}

/// Production implementation backed by `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {}", path.display()))
    }
}

/// In-memory implementation for unit tests
#[derive(Debug, Default)]
pub struct MockFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a file with the given contents
    pub fn add_file(&self, path: impl Into<PathBuf>, contents: &str) {
        self.files
            .lock()
            .expect("mock fs lock")
            .insert(path.into(), contents.to_string());
    }

    /// Returns the contents previously written to `path`, if any
    pub fn written(&self, path: &Path) -> Option<String> {
        self.files.lock().expect("mock fs lock").get(path).cloned()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().expect("mock fs lock").contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files
            .lock()
            .expect("mock fs lock")
            .get(path)
            .cloned()
            .with_context(|| format!("Failed to read {}", path.display()))
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        self.add_file(path, contents);
        Ok(())
    }

    fn create_dir_all(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}
