use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Key under which the submissions blob is stored.
pub const SUBMISSIONS_KEY: &str = "lms_submissions";

/// A named blob of text, the persistence seam for the submission store.
///
/// Backends decide where the blob lives. `read` returns `Ok(None)` when
/// the blob has never been written.
pub trait BlobStore {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Read the entire blob, or `None` if it does not exist yet.
    fn read(&self) -> Result<Option<String>, Self::Error>;

    /// Replace the entire blob.
    fn write(&self, contents: &str) -> Result<(), Self::Error>;
}

/// Blob backend storing the submissions as one JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileBlob {
    path: PathBuf,
}

impl FileBlob {
    /// Store the blob as `lms_submissions.json` under `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{SUBMISSIONS_KEY}.json")),
        }
    }

    /// The file this backend reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BlobStore for FileBlob {
    type Error = io::Error;

    fn read(&self) -> Result<Option<String>, Self::Error> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn write(&self, contents: &str) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, contents)
    }
}

/// In-process blob backend for tests and demos.
///
/// Clones share the same underlying blob, so a test can keep a handle
/// while the store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlob {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryBlob {
    /// Create an empty in-memory blob.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a blob pre-seeded with the given contents.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Arc::new(Mutex::new(Some(contents.into()))),
        }
    }
}

impl BlobStore for MemoryBlob {
    type Error = std::convert::Infallible;

    fn read(&self) -> Result<Option<String>, Self::Error> {
        Ok(self
            .contents
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone())
    }

    fn write(&self, contents: &str) -> Result<(), Self::Error> {
        *self
            .contents
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(contents.to_string());
        Ok(())
    }
}
