use std::io::{self, BufRead, ErrorKind};

use memchr::memchr2;

/// Read the next record from `reader`, terminator stripped.
///
/// A record ends at `\n`, `\r` or `\r\n`, also when the `\r\n` pair is
/// split across two buffer fills. Returns `Ok(None)` at end of stream. A
/// final record without a terminator is still returned; a trailing
/// terminator does not produce an extra empty record.
///
/// # Errors
///
/// Propagates read errors from the underlying reader. Input that is not
/// UTF-8 fails with [`ErrorKind::InvalidData`].
pub fn next_line<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    let mut read_any = false;
    loop {
        let available = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            break;
        }
        read_any = true;
        match memchr2(b'\n', b'\r', available) {
            Some(i) => {
                let terminator = available[i];
                bytes.extend_from_slice(&available[..i]);
                reader.consume(i + 1);
                if terminator == b'\r' {
                    skip_newline(reader)?;
                }
                return into_line(bytes).map(Some);
            }
            None => {
                let n = available.len();
                bytes.extend_from_slice(available);
                reader.consume(n);
            }
        }
    }
    if read_any { into_line(bytes).map(Some) } else { Ok(None) }
}

/// Consume a `\n` directly following a `\r`, if there is one.
fn skip_newline<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<()> {
    loop {
        match reader.fill_buf() {
            Ok(buf) => {
                if buf.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                return Ok(());
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}

fn into_line(bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes).map_err(|e| io::Error::new(ErrorKind::InvalidData, e))
}
