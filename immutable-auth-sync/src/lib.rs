//! immutable-auth-sync — write rendered documents to disk and diff them
//! against what is already there.

pub mod diff;
pub mod error;
pub mod writer;

pub use diff::{diff_document, DocumentDiff};
pub use error::SyncError;
pub use writer::{atomic_write, write_document, WriteResult};
