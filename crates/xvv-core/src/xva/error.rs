//! Fatal errors: the archive could not be read, so integrity was never checked.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum XvaError {
    /// The archive file could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The tar stream itself is malformed or could not be read.
    #[error("archive stream: {0}")]
    Stream(#[source] io::Error),

    /// Reading the content of a named entry failed or came up short.
    #[error("read entry {name}: {source}")]
    Entry {
        name: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, XvaError>;
