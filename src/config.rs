//! Decoder configuration.
//!
//! [`DecoderConfig`] bounds the work a single request can make the decoders do.
//! It is immutable once built and shared with the boundary through
//! [`RequestDecoder`](crate::RequestDecoder).

use serde::Deserialize;

/// Default nesting depth: one level, which is what the format actually uses
/// (`h-entry` → `h-measure`).
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 1;

/// Default per-field size cap for multipart text fields (1 MiB).
pub const DEFAULT_MAX_MULTIPART_FIELD_BYTES: u64 = 1024 * 1024;

/// Limits applied while decoding a request body.
///
/// # Examples
///
/// ```
/// use micropub_mf::DecoderConfig;
///
/// let config = DecoderConfig::default().with_max_nesting_depth(2);
/// assert_eq!(config.max_nesting_depth, 2);
/// ```
///
/// Hosts that keep their settings in a file can deserialize it directly;
/// missing keys fall back to the defaults:
///
/// ```
/// use micropub_mf::DecoderConfig;
///
/// let config: DecoderConfig = serde_json::from_str(r#"{"max_nesting_depth": 3}"#).unwrap();
/// assert_eq!(config.max_nesting_depth, 3);
/// assert_eq!(config.max_multipart_field_bytes, 1024 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// How many levels of nested objects may be materialized below the
    /// top-level object. `0` disallows nesting entirely.
    pub max_nesting_depth: usize,

    /// Maximum size in bytes of a single multipart field.
    pub max_multipart_field_bytes: u64,
}

impl DecoderConfig {
    /// Set the maximum nesting depth.
    #[must_use]
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// Set the per-field multipart size cap.
    #[must_use]
    pub fn with_max_multipart_field_bytes(mut self, bytes: u64) -> Self {
        self.max_multipart_field_bytes = bytes;
        self
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            max_multipart_field_bytes: DEFAULT_MAX_MULTIPART_FIELD_BYTES,
        }
    }
}
