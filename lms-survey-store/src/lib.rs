//! Submission store for the lms-survey crate.
//!
//! Accepted survey records live in a single JSON-encoded blob behind the
//! `BlobStore` trait, so the persistence mechanism (file, database,
//! browser-style key-value storage) is swappable without touching
//! validation or export logic.
//!
//! Reads fail open: an absent or malformed blob is treated as "no
//! submissions" rather than an error, so a damaged backing store never
//! blocks the respondent.

mod blob;
pub use blob::{BlobStore, FileBlob, MemoryBlob, SUBMISSIONS_KEY};

mod store;
pub use store::{StoreError, SubmissionStore};
