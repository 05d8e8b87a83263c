//! Forward-only line cursor with resumable seek.

use std::{
    fmt,
    fs::File,
    io::{self, Read},
    path::Path,
};

use encoding_rs::Encoding;
use line_cursor_infra::{
    decoding::{DEFAULT_BUFFER_CAPACITY, DecodedReader, decoding_reader, resolve_encoding},
    lines::next_line,
    persistence::FileReader,
};
use line_cursor_shared_kernel::{ErrorContext, LineCursorError, Result};
use log::{debug, trace, warn};

use crate::config::CursorOptions;

/// Reads a text stream line by line and can skip forward to a given line number.
///
/// Line numbers are 1-based. The cursor owns its stream exclusively; it is
/// released by [`close`](Self::close) or when the cursor is dropped.
///
/// `seek` counts from the cursor's current position. The stream has no
/// rewind primitive, so seeking to a line before `last_line_read` fails
/// with [`LineCursorError::Rewind`].
pub struct LineCursor<R: Read> {
    /// `None` once closed.
    lines: Option<DecodedReader<R>>,
    /// 先読み: a line (or read error) taken from the stream but not yet delivered.
    peeked: Option<io::Result<String>>,
    /// End of stream was observed; never cleared.
    exhausted: bool,
    encoding: &'static Encoding,
    last_line_read: u64,
    /// Number of the line the stream delivers next.
    position: u64,
}

impl<R: Read> LineCursor<R> {
    /// Wrap `reader`, decoding it as UTF-8.
    pub fn new(reader: R) -> Self {
        Self::from_parts(reader, encoding_rs::UTF_8, DEFAULT_BUFFER_CAPACITY)
    }

    /// Wrap `reader`, decoding it with the charset named by `label`.
    ///
    /// # Errors
    ///
    /// Fails with [`LineCursorError::UnsupportedEncoding`] for an unknown
    /// label. `reader` is dropped before the error is returned.
    pub fn with_encoding(reader: R, label: &str) -> Result<Self> {
        let encoding = resolve_encoding(label)?;
        Ok(Self::from_parts(reader, encoding, DEFAULT_BUFFER_CAPACITY))
    }

    /// Wrap `reader` using `options`.
    ///
    /// # Errors
    ///
    /// Fails with [`LineCursorError::UnsupportedEncoding`] when
    /// `options.encoding` does not name a known charset.
    pub fn with_options(reader: R, options: &CursorOptions) -> Result<Self> {
        let encoding = resolve_encoding(&options.encoding)?;
        Ok(Self::from_parts(reader, encoding, options.effective_capacity()))
    }

    fn from_parts(reader: R, encoding: &'static Encoding, capacity: usize) -> Self {
        Self {
            lines: Some(decoding_reader(reader, encoding, capacity)),
            peeked: None,
            exhausted: false,
            encoding,
            last_line_read: 1,
            position: 1,
        }
    }

    /// Skip forward so that the next [`read_line`](Self::read_line) returns line `line`.
    ///
    /// Lines between the current position and `line` are read and discarded.
    /// On success `last_line_read` becomes `line` and `line` is returned.
    ///
    /// # Errors
    ///
    /// - [`LineCursorError::OutOfRange`] if `line` is 0, the stream ends
    ///   before line `line`, or `line` was already skipped by an earlier
    ///   failed seek. Skipped lines stay consumed, `last_line_read` is left
    ///   as it was.
    /// - [`LineCursorError::Rewind`] if `line` lies before `last_line_read`.
    /// - [`LineCursorError::Io`], wrapped in context, if reading a skipped
    ///   line fails.
    pub fn seek(&mut self, line: u64) -> Result<u64> {
        if line == 0 {
            return Err(self.out_of_range(line));
        }
        if line < self.last_line_read {
            return Err(LineCursorError::Rewind {
                requested: line,
                current: self.last_line_read,
            });
        }
        // 失敗した seek が読み飛ばした行にはもう戻れない
        if line < self.position {
            return Err(self.out_of_range(line));
        }

        while self.position < line {
            match self.take_next() {
                Some(Ok(_)) => {
                    trace!("seek: skipped line {}", self.position);
                    self.position += 1;
                }
                Some(Err(e)) => {
                    return Err::<u64, _>(e).with_context(|| {
                        format!("skipping line {} while seeking to line {line}", self.position)
                    });
                }
                None => break,
            }
        }

        if self.position < line || !self.has_next() {
            debug!("seek to line {line} failed; stream ended after line {}", self.position - 1);
            return Err(self.out_of_range(line));
        }

        self.last_line_read = line;
        debug!("seek: positioned at line {line}");
        Ok(line)
    }

    /// Re-validate the cursor at `last_line_read`: `seek(last_line_read)`.
    ///
    /// Consumes nothing when the cursor sits where the last successful read
    /// or seek left it.
    ///
    /// # Errors
    ///
    /// Same as [`seek`](Self::seek).
    pub fn seek_last(&mut self) -> Result<u64> {
        self.seek(self.last_line_read)
    }

    /// Whether another line is available. Does not move the cursor.
    ///
    /// A read error hit while looking ahead counts as "available"; the
    /// next [`read_line`](Self::read_line) returns it.
    pub fn has_next(&mut self) -> bool {
        self.fill_peek();
        self.peeked.is_some()
    }

    /// Return the next line without its terminator and advance `last_line_read`.
    ///
    /// # Errors
    ///
    /// - [`LineCursorError::NoMoreElements`] when the stream is exhausted or
    ///   the cursor is closed. Check [`has_next`](Self::has_next) first.
    /// - [`LineCursorError::Io`] when reading fails.
    ///
    /// Neither failure changes `last_line_read`.
    pub fn read_line(&mut self) -> Result<String> {
        match self.take_next() {
            Some(Ok(line)) => {
                self.position += 1;
                self.last_line_read += 1;
                Ok(line)
            }
            Some(Err(e)) => Err(e.into()),
            None => Err(LineCursorError::NoMoreElements {
                last_line_read: self.last_line_read,
            }),
        }
    }

    #[must_use]
    pub fn last_line_read(&self) -> u64 {
        self.last_line_read
    }

    /// Number of the line the stream will deliver next.
    ///
    /// Equal to [`last_line_read`](Self::last_line_read) unless a failed
    /// seek consumed lines.
    #[must_use]
    pub fn next_line_number(&self) -> u64 {
        self.position
    }

    /// Canonical name of the encoding in use, e.g. `"UTF-8"`.
    #[must_use]
    pub fn encoding(&self) -> &'static str {
        self.encoding.name()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.lines.is_none()
    }

    /// Release the stream and any buffered lookahead.
    ///
    /// Idempotent. A closed cursor behaves like an exhausted one.
    pub fn close(&mut self) {
        self.peeked = None;
        self.exhausted = true;
        if self.lines.take().is_some() {
            debug!("closed line cursor at line {}", self.position);
        }
    }

    fn fill_peek(&mut self) {
        if self.peeked.is_some() || self.exhausted {
            return;
        }
        let Some(reader) = self.lines.as_mut() else {
            self.exhausted = true;
            return;
        };
        match next_line(reader) {
            Ok(Some(line)) => self.peeked = Some(Ok(line)),
            Ok(None) => self.exhausted = true,
            Err(e) => {
                warn!("read error after line {}: {e}", self.position - 1);
                self.peeked = Some(Err(e));
            }
        }
    }

    fn take_next(&mut self) -> Option<io::Result<String>> {
        self.fill_peek();
        self.peeked.take()
    }

    fn out_of_range(&self, requested: u64) -> LineCursorError {
        LineCursorError::OutOfRange {
            requested,
            last_line: self.position - 1,
        }
    }
}

impl LineCursor<File> {
    /// Open the file at `path` as UTF-8.
    ///
    /// # Errors
    ///
    /// Fails with [`LineCursorError::FileOpen`] when the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_options(path, &CursorOptions::default())
    }

    /// Open the file at `path`, decoding it with the charset named by `label`.
    ///
    /// # Errors
    ///
    /// Fails with [`LineCursorError::UnsupportedEncoding`] or
    /// [`LineCursorError::FileOpen`].
    pub fn open_with_encoding(path: impl AsRef<Path>, label: &str) -> Result<Self> {
        let options = CursorOptions {
            encoding: label.to_string(),
            ..CursorOptions::default()
        };
        Self::open_with_options(path, &options)
    }

    /// Open the file at `path` using `options`.
    ///
    /// The charset label is resolved before the file is opened, so a bad
    /// label never leaves a handle behind.
    ///
    /// # Errors
    ///
    /// Fails with [`LineCursorError::UnsupportedEncoding`] or
    /// [`LineCursorError::FileOpen`].
    pub fn open_with_options(path: impl AsRef<Path>, options: &CursorOptions) -> Result<Self> {
        let path = path.as_ref();
        let encoding = resolve_encoding(&options.encoding)?;
        let file = FileReader::open(path)?;
        debug!("opened {} as {}", path.display(), encoding.name());
        Ok(Self::from_parts(file, encoding, options.effective_capacity()))
    }
}

impl<R: Read> Iterator for LineCursor<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        Some(self.read_line())
    }
}

impl<R: Read> fmt::Debug for LineCursor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineCursor")
            .field("encoding", &self.encoding.name())
            .field("last_line_read", &self.last_line_read)
            .field("position", &self.position)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}
