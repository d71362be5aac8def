//! Where documents come from.
//!
//! The resolver never touches the file system directly. It goes through
//! [`Storage`] when running in blocking mode and [`AsyncStorage`] when
//! running on an async runtime. Both are read-only.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Blocking access to documents.
pub trait Storage {
    /// Reads the whole document as UTF-8 text.
    fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Returns `true` if a document exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// Non-blocking access to documents.
#[async_trait]
pub trait AsyncStorage: Send + Sync {
    /// Reads the whole document as UTF-8 text.
    async fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Returns `true` if a document exists at `path`.
    async fn exists(&self, path: &Path) -> bool;
}

/// The local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsStorage;

impl Storage for FsStorage {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[async_trait]
impl AsyncStorage for FsStorage {
    async fn read_text(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}

/// Documents held in memory, keyed by path.
///
/// Keys are compared exactly as given, so register documents under the
/// same normalized form the resolver produces (`dir/part.md`, not
/// `dir/./part.md`).
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    documents: HashMap<PathBuf, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a document.
    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> &mut Self {
        self.documents.insert(path.into(), text.into());
        self
    }

    /// Builder-style variant of [`MemoryStorage::insert`].
    #[must_use]
    pub fn with(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.insert(path, text);
        self
    }

    fn get(&self, path: &Path) -> io::Result<String> {
        self.documents.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no document at {}", path.display()),
            )
        })
    }
}

impl Storage for MemoryStorage {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        self.get(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.documents.contains_key(path)
    }
}

#[async_trait]
impl AsyncStorage for MemoryStorage {
    async fn read_text(&self, path: &Path) -> io::Result<String> {
        self.get(path)
    }

    async fn exists(&self, path: &Path) -> bool {
        self.documents.contains_key(path)
    }
}
