use line_cursor::{CursorOptions, LineCursor};

#[test]
fn options_deserialize_with_defaults() {
    let opts: CursorOptions = serde_json::from_str(r#"{ "encoding": "latin1" }"#).unwrap();
    assert_eq!(opts.encoding, "latin1");
    assert_eq!(opts.buffer_capacity, CursorOptions::default().buffer_capacity);
}

#[test]
fn options_serialize_field_names() {
    let json = serde_json::to_value(CursorOptions::default()).unwrap();
    assert_eq!(json["encoding"], "UTF-8");
    assert!(json["buffer_capacity"].is_u64());
}

#[test]
fn small_buffer_still_splits_lines() {
    let opts = CursorOptions::builder().buffer_capacity(16usize).build().unwrap();
    let mut c = LineCursor::with_options("first\nsecond\n".as_bytes(), &opts).unwrap();
    c.seek(2).unwrap();
    assert_eq!(c.read_line().unwrap(), "second");
}

#[test]
fn unknown_encoding_fails_construction() {
    let err = LineCursor::with_encoding("x\n".as_bytes(), "not-a-charset").unwrap_err();
    assert!(err.is_io());
}

#[test]
fn encoding_name_is_canonical() {
    let c = LineCursor::with_encoding("".as_bytes(), "latin1").unwrap();
    assert_eq!(c.encoding(), "windows-1252");
}
