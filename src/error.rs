//! Error types
//!
//! The dump itself is pure and total: missing attributes, children,
//! namespaces or content are empty collections, never errors. The only
//! fallible operation is writing the assembled output to a caller sink.
//! Handing the document accessors an id from a different document is a
//! contract violation and panics rather than being silently swallowed.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write dump output: {0}")]
    Io(#[from] io::Error),
}
