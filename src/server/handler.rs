//! The create handler and error responses.
//!
//! # Status Codes
//!
//! - `201 Created` - post decoded with a known type and stored
//! - `400 Bad Request` - post type unknown, or the body failed to decode
//!
//! Routing and method dispatch belong to the host router:
//!
//! ```ignore
//! use axum::{routing::post, Router};
//! use micropub_mf::server::{create_entry, MemoryStore, MicropubState};
//!
//! let app = Router::new()
//!     .route("/micropub", post(create_entry::<MemoryStore>))
//!     .with_state(MicropubState::new(MemoryStore::new()));
//! ```

use super::extract::MicroformatPost;
use super::MicropubState;
use super::store::EntryStore;
use crate::error::MicropubError;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

/// Accept a Micropub create request.
///
/// Appends the decoded post to the store and answers `201 Created`. A post
/// whose type resolved to `Unknown` is not stored and answers `400`.
pub async fn create_entry<St>(
    State(state): State<MicropubState<St>>,
    MicroformatPost(entry): MicroformatPost,
) -> Result<StatusCode, MicropubError>
where
    St: EntryStore + Clone + 'static,
{
    if entry.entry_type().is_unknown() {
        return Err(MicropubError::UnknownType);
    }

    tracing::debug!(
        "Storing {} with {} properties",
        entry.entry_type(),
        entry.len()
    );
    state.store.append(entry);
    Ok(StatusCode::CREATED)
}

impl MicropubError {
    /// HTTP status the boundary answers with for this error.
    pub fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for MicropubError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!("Rejecting Micropub request ({}): {}", status, self);
        (status, self.to_string()).into_response()
    }
}
