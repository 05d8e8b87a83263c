//! Resumable, forward-only line reading over any byte stream.
//!
//! ```no_run
//! use line_cursor::LineCursor;
//!
//! # fn main() -> line_cursor::Result<()> {
//! let mut cursor = LineCursor::open("access.log")?;
//! cursor.seek(120)?;
//! while cursor.has_next() {
//!     println!("{}: {}", cursor.last_line_read(), cursor.read_line()?);
//! }
//! cursor.close();
//! # Ok(())
//! # }
//! ```

// 依存関係の推移的依存により複数のバージョンが混在するための抑制
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod cursor;

pub use config::{CursorOptions, CursorOptionsBuilder, CursorOptionsBuilderError};
pub use cursor::LineCursor;
pub use line_cursor_shared_kernel::{ErrorContext, LineCursorError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
