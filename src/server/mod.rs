//! Axum integration for Micropub create requests.
//!
//! This is the thin boundary around the decoders: an extractor that runs the
//! [`RequestDecoder`] on the request, a handler that stores accepted posts, and
//! the mapping from [`MicropubError`](crate::MicropubError) to `400` responses.
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`MicropubState`] | Router state: store plus decoder |
//! | [`MicroformatPost`] | Extractor yielding a decoded post |
//! | [`EntryStore`] | Append-only storage for accepted posts |
//! | [`MemoryStore`] | In-memory `EntryStore` |
//!
//! # Examples
//!
//! ```ignore
//! use axum::{routing::post, Router};
//! use micropub_mf::{DecoderConfig, server::{create_entry, MemoryStore, MicropubState}};
//!
//! let state = MicropubState::with_config(MemoryStore::new(), DecoderConfig::default());
//! let app = Router::new()
//!     .route("/micropub", post(create_entry::<MemoryStore>))
//!     .with_state(state);
//! ```

mod extract;
mod handler;
mod store;

pub use extract::MicroformatPost;
pub use handler::create_entry;
pub use store::{EntryStore, MemoryStore};

use crate::config::DecoderConfig;
use crate::protocol::RequestDecoder;
use axum::extract::FromRef;

/// Router state for the Micropub endpoint.
#[derive(Debug, Clone)]
pub struct MicropubState<St> {
    /// Where accepted posts go.
    pub store: St,

    /// Decoder shared by every request.
    pub decoder: RequestDecoder,
}

impl<St> MicropubState<St> {
    /// State with default decoder limits.
    pub fn new(store: St) -> Self {
        Self::with_decoder(store, RequestDecoder::new())
    }

    /// State with custom decoder limits.
    pub fn with_config(store: St, config: DecoderConfig) -> Self {
        Self::with_decoder(store, RequestDecoder::with_config(config))
    }

    /// State with an explicit decoder.
    pub fn with_decoder(store: St, decoder: RequestDecoder) -> Self {
        Self { store, decoder }
    }
}

impl<St> FromRef<MicropubState<St>> for RequestDecoder {
    fn from_ref(state: &MicropubState<St>) -> Self {
        state.decoder.clone()
    }
}
