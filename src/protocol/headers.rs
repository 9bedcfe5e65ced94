//! Content-Type header handling.
//!
//! The dispatcher only cares about the media type itself, not its parameters,
//! so `application/json; charset=utf-8` is JSON and
//! `multipart/form-data; boundary=xyz` is multipart.
//!
//! | Media type | Encoding |
//! |------------|----------|
//! | `application/json` | [`BodyEncoding::Json`] |
//! | `multipart/form-data...` | [`BodyEncoding::Multipart`] |
//! | anything else, or absent | [`BodyEncoding::UrlEncoded`] |
//!
//! # Examples
//!
//! ```
//! use micropub_mf::protocol::{media_type_essence, BodyEncoding};
//!
//! assert_eq!(media_type_essence("Application/JSON; charset=utf-8"), "application/json");
//! assert_eq!(
//!     BodyEncoding::from_content_type(Some("multipart/form-data; boundary=abc")),
//!     BodyEncoding::Multipart,
//! );
//! assert_eq!(BodyEncoding::from_content_type(None), BodyEncoding::UrlEncoded);
//! ```

use crate::protocol::constants::content_types;
use std::fmt;

/// The media type of a Content-Type value, without parameters, lower-cased.
///
/// # Examples
///
/// ```
/// use micropub_mf::protocol::media_type_essence;
///
/// assert_eq!(media_type_essence(" text/plain ;q=1"), "text/plain");
/// assert_eq!(media_type_essence(""), "");
/// ```
pub fn media_type_essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// How a request body is encoded.
///
/// This is an exhaustive three-way branch; there is no registry of further
/// encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEncoding {
    /// `application/json`
    Json,
    /// `multipart/form-data`
    Multipart,
    /// `application/x-www-form-urlencoded`, and the default for anything else
    UrlEncoded,
}

impl BodyEncoding {
    /// Classify a Content-Type header value.
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let Some(content_type) = content_type else {
            return BodyEncoding::UrlEncoded;
        };

        let essence = media_type_essence(content_type);
        if essence == content_types::JSON {
            BodyEncoding::Json
        } else if essence.starts_with(content_types::MULTIPART) {
            BodyEncoding::Multipart
        } else {
            BodyEncoding::UrlEncoded
        }
    }

    /// The media type this encoding corresponds to.
    pub fn media_type(&self) -> &'static str {
        match self {
            BodyEncoding::Json => content_types::JSON,
            BodyEncoding::Multipart => content_types::MULTIPART,
            BodyEncoding::UrlEncoded => content_types::FORM_URLENCODED,
        }
    }
}

impl fmt::Display for BodyEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.media_type())
    }
}
