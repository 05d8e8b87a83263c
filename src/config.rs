use derive_builder::Builder;
use line_cursor_infra::decoding::{DEFAULT_BUFFER_CAPACITY, DEFAULT_ENCODING, resolve_encoding};
use serde::{Deserialize, Serialize};

/// How a [`LineCursor`](crate::LineCursor) decodes and buffers its stream.
///
/// Deserializes with defaults for missing fields, so an embedding
/// application can keep these settings in its own config file.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[serde(default)]
pub struct CursorOptions {
    /// Charset label, resolved through the WHATWG label table.
    #[builder(default = "DEFAULT_ENCODING.to_string()")]
    pub encoding: String,
    /// Capacity of the decoded read buffer in bytes.
    #[builder(default = "DEFAULT_BUFFER_CAPACITY")]
    pub buffer_capacity: usize,
}

impl Default for CursorOptions {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl CursorOptions {
    #[must_use]
    pub fn builder() -> CursorOptionsBuilder {
        CursorOptionsBuilder::default()
    }

    /// Buffer capacity actually used. Zero (possible through serde) falls back to the default.
    #[must_use]
    pub fn effective_capacity(&self) -> usize {
        if self.buffer_capacity == 0 { DEFAULT_BUFFER_CAPACITY } else { self.buffer_capacity }
    }
}

impl CursorOptionsBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(label) = &self.encoding {
            resolve_encoding(label).map_err(|e| e.to_string())?;
        }
        if self.buffer_capacity == Some(0) {
            return Err("buffer_capacity must be greater than zero".to_string());
        }
        Ok(())
    }
}
