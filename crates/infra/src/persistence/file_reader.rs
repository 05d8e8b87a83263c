use std::{fs::File, path::Path};

use line_cursor_shared_kernel::{LineCursorError, Result};

/// Convenience helpers for opening files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns [`LineCursorError::FileOpen`] carrying `path` when the file
    /// cannot be opened.
    pub fn open(path: &Path) -> Result<File> {
        File::open(path).map_err(|source| LineCursorError::FileOpen {
            path: path.to_path_buf(),
            source,
        })
    }
}
