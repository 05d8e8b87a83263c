use line_cursor::LineCursorError;

use crate::common::{cursor, drain, numbered_lines};

#[test]
fn seek_within_range_returns_line() {
    let input = numbered_lines(5);
    for k in 1..=5u64 {
        let mut c = cursor(&input);
        assert_eq!(c.seek(k).unwrap(), k);
        assert_eq!(c.last_line_read(), k);
    }
}

#[test]
fn seek_past_end_fails_and_keeps_counter() {
    let input = numbered_lines(5);
    for k in [6u64, 7, 100] {
        let mut c = cursor(&input);
        let err = c.seek(k).unwrap_err();
        assert!(err.is_out_of_range(), "seek({k}) gave {err:?}");
        assert_eq!(c.last_line_read(), 1);
    }
}

#[test]
fn next_read_after_seek_is_requested_line() {
    let data = numbered_lines(10);
    let mut c = cursor(&data);
    c.seek(7).unwrap();
    assert_eq!(c.read_line().unwrap(), "line-7");
    assert_eq!(c.last_line_read(), 8);
}

#[test]
fn three_line_walkthrough() {
    let mut c = cursor("a\nb\nc\n");
    assert!(c.has_next());
    assert_eq!(c.read_line().unwrap(), "a");
    assert_eq!(c.last_line_read(), 2);
    assert_eq!(c.seek(3).unwrap(), 3);
    assert_eq!(c.last_line_read(), 3);
    assert_eq!(c.read_line().unwrap(), "c");
    assert!(!c.has_next());
}

#[test]
fn single_line_seek_out_of_range() {
    let mut c = cursor("only\n");
    match c.seek(5) {
        Err(LineCursorError::OutOfRange { requested, last_line }) => {
            assert_eq!(requested, 5);
            assert_eq!(last_line, 1);
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
    assert_eq!(c.last_line_read(), 1);
}

#[test]
fn seeking_forward_twice_resumes() {
    let data = numbered_lines(20);
    let mut c = cursor(&data);
    c.seek(5).unwrap();
    c.seek(12).unwrap();
    assert_eq!(c.read_line().unwrap(), "line-12");
    assert_eq!(drain(&mut c).len(), 8);
}

#[test]
fn seek_last_after_reads_does_not_skip() {
    let mut c = cursor("a\nb\nc\n");
    c.read_line().unwrap();
    c.read_line().unwrap();
    assert_eq!(c.seek_last().unwrap(), 3);
    assert_eq!(c.read_line().unwrap(), "c");
}

#[test]
fn seek_last_at_end_of_stream_is_out_of_range() {
    let mut c = cursor("a\n");
    c.read_line().unwrap();
    assert!(c.seek_last().unwrap_err().is_out_of_range());
    assert_eq!(c.last_line_read(), 2);
}

#[test]
fn seek_backwards_is_rejected() {
    let data = numbered_lines(4);
    let mut c = cursor(&data);
    c.seek(3).unwrap();
    let err = c.seek(1).unwrap_err();
    assert!(matches!(err, LineCursorError::Rewind { requested: 1, current: 3 }));
    assert_eq!(c.last_line_read(), 3);
}

#[test]
fn seek_on_empty_stream_fails() {
    let mut c = cursor("");
    assert!(c.seek(1).unwrap_err().is_out_of_range());
}

#[test]
fn last_line_without_newline_is_reachable() {
    let mut c = cursor("a\nb");
    assert_eq!(c.seek(2).unwrap(), 2);
    assert_eq!(c.read_line().unwrap(), "b");
}
