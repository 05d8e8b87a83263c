// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LineCursorError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<LineCursorError>,
    },

    #[error("Failed to open file '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported text encoding: '{label}'")]
    UnsupportedEncoding { label: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid line number {requested}; out of range (last line reached: {last_line})")]
    OutOfRange { requested: u64, last_line: u64 },

    #[error("Cannot seek back to line {requested}; cursor is already at line {current}")]
    Rewind { requested: u64, current: u64 },

    #[error("No more lines to read (last line read: {last_line_read})")]
    NoMoreElements { last_line_read: u64 },
}

pub type Result<T> = std::result::Result<T, LineCursorError>;

impl LineCursorError {
    /// Strips any `Context` layers and returns the underlying error.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Opening, decoding or reading the stream failed.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(
            self.root(),
            Self::FileOpen { .. } | Self::UnsupportedEncoding { .. } | Self::Io(_)
        )
    }

    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.root(), Self::OutOfRange { .. })
    }

    #[must_use]
    pub fn is_no_more_elements(&self) -> bool {
        matches!(self.root(), Self::NoMoreElements { .. })
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<LineCursorError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LineCursorError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LineCursorError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
