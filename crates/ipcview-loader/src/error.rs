use ipcview_data_type::SchemaMismatch;
use polars::prelude::PolarsError;
use std::io;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source could not be opened or a read on it failed.
    Io,
    /// The bytes are not a well-formed IPC stream.
    Format,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {origin}")]
    Io {
        origin: String,
        #[source]
        error: io::Error,
    },
    #[error("{origin}: invalid stream header")]
    Header {
        origin: String,
        #[source]
        error: PolarsError,
    },
    #[error("{origin}: cannot decode record batch {batch}")]
    Batch {
        origin: String,
        batch: usize,
        #[source]
        error: PolarsError,
    },
    #[error("{origin}: stream ends inside message {batch} starting at byte {offset}")]
    Truncated {
        origin: String,
        batch: usize,
        offset: u64,
    },
    #[error("{origin}: record batch {batch} does not match the stream schema")]
    SchemaMismatch {
        origin: String,
        batch: usize,
        #[source]
        error: SchemaMismatch,
    },
}

impl LoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::Io { .. } => ErrorKind::Io,
            LoadError::Header { .. }
            | LoadError::Batch { .. }
            | LoadError::Truncated { .. }
            | LoadError::SchemaMismatch { .. } => ErrorKind::Format,
        }
    }

    pub fn is_io(&self) -> bool {
        self.kind() == ErrorKind::Io
    }

    pub fn is_format(&self) -> bool {
        self.kind() == ErrorKind::Format
    }
}
