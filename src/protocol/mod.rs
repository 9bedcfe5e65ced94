//! Micropub wire formats and the decoders that read them.
//!
//! A Micropub create request arrives in one of three encodings. Each is decoded
//! into the same [`MicroformatObject`](crate::MicroformatObject):
//!
//! | Content-Type | Decoder | Shape |
//! |--------------|---------|-------|
//! | `application/json` | [`JsonDecoder`] | `{"type": ["h-entry"], "properties": {name: [value, ...]}}` |
//! | `multipart/form-data` | [`extract_multipart_fields`] then [`FormDecoder`] | flat fields |
//! | anything else | [`FormDecoder`] | `application/x-www-form-urlencoded` |
//!
//! Form submissions select the type with the `h` key (`h=entry`) and may mark
//! repeatable keys with a `[]` suffix (`category[]=a&category[]=b`). The suffix is
//! stripped, so `category[]` and `category` name the same property.
//!
//! # Examples
//!
//! ```
//! use micropub_mf::protocol::{decode_request, constants::content_types};
//! use micropub_mf::EntryType;
//!
//! let post = decode_request(
//!     Some(content_types::JSON),
//!     br#"{"type": ["h-entry"], "properties": {"content": ["hello world"]}}"#,
//! )
//! .unwrap();
//! assert_eq!(post.entry_type(), EntryType::Entry);
//! assert_eq!(post.text("content"), ["hello world"]);
//!
//! let post = decode_request(None, b"h=entry&category[]=recipes").unwrap();
//! assert_eq!(post.text("category"), ["recipes"]);
//! ```
//!
//! # Specification
//!
//! - [Micropub](https://www.w3.org/TR/micropub/) Section 3.3 (Create)
//! - [microformats2 JSON](https://microformats.org/wiki/microformats2-json)

pub mod constants;
mod dispatch;
mod form;
mod headers;
mod json;
mod multipart;
mod registry;

pub use dispatch::{decode_request, RequestDecoder};
pub use form::{normalize_key, FormDecoder, FormFields};
pub use headers::{media_type_essence, BodyEncoding};
pub use json::JsonDecoder;
pub use multipart::{extract_multipart_fields, extract_multipart_fields_blocking};
pub use registry::{title_case, TypeRegistry};
