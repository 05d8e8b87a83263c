//! 文字コード変換
//!
//! Turns a raw byte stream into a buffered UTF-8 stream using a charset label
//! chosen by the caller. No detection is attempted: the label decides.

use std::io::{BufReader, Read};

use encoding_rs::Encoding;
use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};
use line_cursor_shared_kernel::{LineCursorError, Result};

/// Label used when the caller does not pick an encoding.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Buffer size of the decoded reader unless configured otherwise.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// A byte stream decoded to UTF-8 and buffered for line reads.
pub type DecodedReader<R> = BufReader<DecodeReaderBytes<R, Vec<u8>>>;

/// Resolve a charset label (`"utf-8"`, `"latin1"`, `"Shift_JIS"`, ...) to an encoding.
///
/// Lookup follows the WHATWG label table, so it ignores ASCII case and
/// surrounding whitespace.
///
/// # Errors
///
/// Returns [`LineCursorError::UnsupportedEncoding`] for unknown labels.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.as_bytes()).ok_or_else(|| LineCursorError::UnsupportedEncoding {
        label: label.to_string(),
    })
}

/// Wrap `reader` so that reads yield UTF-8 decoded from `encoding`.
///
/// Malformed sequences are replaced with U+FFFD rather than reported.
pub fn decoding_reader<R: Read>(
    reader: R,
    encoding: &'static Encoding,
    capacity: usize,
) -> DecodedReader<R> {
    log::trace!("decoding stream as {} (buffer {capacity} bytes)", encoding.name());
    let decoder = DecodeReaderBytesBuilder::new().encoding(Some(encoding)).build(reader);
    BufReader::with_capacity(capacity, decoder)
}
