#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Micropub request decoding
//!
//! This crate turns a Micropub create request into a single microformats2
//! object, whatever encoding the client chose.
//!
//! Based on the [Micropub W3C Recommendation](https://www.w3.org/TR/micropub/)
//! and the [microformats2 JSON](https://microformats.org/wiki/microformats2-json) shape.
//!
//! ## Overview
//!
//! A client may send a post in three encodings:
//!
//! 1. **JSON** - `{"type": ["h-entry"], "properties": {"content": ["hi"]}}`
//! 2. **URL-encoded form** - `h=entry&content=hi&category[]=notes`
//! 3. **Multipart form** - the same flat fields as multipart parts
//!
//! All three decode into a [`MicroformatObject`]: a type tag ([`EntryType`])
//! plus named [`PropertyValue`]s. JSON properties can hold nested objects
//! (`"weight": [{"type": ["h-measure"], ...}]`), which are decoded on access.
//!
//! ## Key Features
//!
//! - **One entry point**: [`RequestDecoder::decode_request`] picks the decoder from the Content-Type
//! - **Total type resolution**: unrecognised types resolve to [`EntryType::Unknown`], never an error
//! - **Lazy nesting**: property lists are classified as text or objects when read
//! - **Bounded recursion**: nested objects beyond [`DecoderConfig::max_nesting_depth`] are an error
//! - **No process aborts**: malformed bodies come back as [`MicropubError`]
//! - **HTTP Status Codes** (via [`server`]):
//!   - `201 Created` - post accepted and stored
//!   - `400 Bad Request` - unknown type, or body failed to decode
//!
//! ## Decoding
//!
//! ```
//! use micropub_mf::{EntryType, RequestDecoder};
//!
//! let decoder = RequestDecoder::new();
//! let post = decoder
//!     .decode_request(
//!         Some("application/json"),
//!         br#"{
//!             "type": ["h-entry"],
//!             "properties": {
//!                 "summary": ["Weighed 70.64 kg"],
//!                 "weight": [{"type": ["h-measure"], "properties": {"num": ["70.64"], "unit": ["kg"]}}]
//!             }
//!         }"#,
//!     )
//!     .unwrap();
//!
//! assert_eq!(post.entry_type(), EntryType::Entry);
//! assert_eq!(post.text("summary"), ["Weighed 70.64 kg"]);
//! let weight = post.get("weight").unwrap().object().unwrap();
//! assert_eq!(weight.text("unit"), ["kg"]);
//! ```
//!
//! ## Server Usage
//!
//! ```ignore
//! use axum::{routing::post, Router};
//! use micropub_mf::server::{create_entry, MemoryStore, MicropubState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = Router::new()
//!         .route("/micropub", post(create_entry::<MemoryStore>))
//!         .with_state(MicropubState::new(MemoryStore::new()));
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```
//!
//! ## Module Structure
//!
//! - **[types]** - The object model (EntryType, PropertyValue, MicroformatObject)
//! - **[error]** - Error types and result handling
//! - **[config]** - Decoder limits
//! - **[protocol]** - Type registry, wire constants, and the form/JSON/multipart decoders
//! - **[server]** - Axum extractor, create handler, entry store

pub mod config;
pub mod error;
pub mod protocol;
pub mod server;
pub mod types;

pub use config::DecoderConfig;
pub use error::{MicropubError, Result};
pub use protocol::{decode_request, RequestDecoder, TypeRegistry};
pub use types::{EntryType, MicroformatObject, PropertyValue};
