//! Axum extractor that decodes a Micropub request body.
//!
//! # Usage
//!
//! ```ignore
//! use micropub_mf::server::MicroformatPost;
//!
//! async fn handler(MicroformatPost(post): MicroformatPost) -> String {
//!     format!("{} with {} properties", post.entry_type(), post.len())
//! }
//! ```
//!
//! # How It Works
//!
//! The extractor:
//! 1. Reads the `Content-Type` header and the URL query string
//! 2. Buffers the request body
//! 3. Runs the [`RequestDecoder`] found in the router state
//! 4. Rejects with a [`MicropubError`] (a `400` response) if decoding fails
//!
//! An unrecognised post type is *not* rejected here; the post arrives with
//! [`EntryType::Unknown`](crate::EntryType::Unknown) and the handler decides.

use crate::error::MicropubError;
use crate::protocol::RequestDecoder;
use crate::types::MicroformatObject;
use axum::extract::{FromRef, FromRequest, Request};
use bytes::Bytes;
use http::header::CONTENT_TYPE;

/// A decoded Micropub submission.
///
/// Requires a [`RequestDecoder`] reachable from the router state through
/// [`FromRef`]; [`MicropubState`](super::MicropubState) provides one, and a bare
/// `RequestDecoder` works as state too.
#[derive(Debug, Clone)]
pub struct MicroformatPost(pub MicroformatObject);

impl MicroformatPost {
    /// The decoded object.
    pub fn into_inner(self) -> MicroformatObject {
        self.0
    }
}

impl<S> FromRequest<S> for MicroformatPost
where
    S: Send + Sync,
    RequestDecoder: FromRef<S>,
{
    type Rejection = MicropubError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let decoder = RequestDecoder::from_ref(state);
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let query = req.uri().query().map(str::to_owned);

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| MicropubError::Body(rejection.body_text()))?;

        decoder
            .decode_body(content_type.as_deref(), body, query.as_deref())
            .await
            .map(MicroformatPost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryType;
    use axum::body::Body;

    async fn extract(req: Request) -> Result<MicroformatPost, MicropubError> {
        <MicroformatPost as FromRequest<RequestDecoder>>::from_request(req, &RequestDecoder::new())
            .await
    }

    #[tokio::test]
    async fn test_extract_form_with_query() {
        let req = http::Request::builder()
            .method("POST")
            .uri("/micropub?h=entry&title=Testing")
            .body(Body::empty())
            .unwrap();
        let MicroformatPost(post) = extract(req).await.unwrap();
        assert_eq!(post.entry_type(), EntryType::Entry);
        assert_eq!(post.text("title"), ["Testing"]);
    }

    #[tokio::test]
    async fn test_extract_json() {
        let req = http::Request::builder()
            .method("POST")
            .uri("/micropub")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"type":["h-entry"],"properties":{"content":["hi"]}}"#))
            .unwrap();
        let post = extract(req).await.unwrap().into_inner();
        assert_eq!(post.text("content"), ["hi"]);
    }

    #[tokio::test]
    async fn test_extract_multipart() {
        let body = "--b\r\nContent-Disposition: form-data; name=\"h\"\r\n\r\nentry\r\n\
                    --b\r\nContent-Disposition: form-data; name=\"content\"; filename=\"\"\r\n\r\nHi\r\n\
                    --b--\r\n";
        let req = http::Request::builder()
            .method("POST")
            .uri("/micropub")
            .header(CONTENT_TYPE, "multipart/form-data; boundary=b")
            .body(Body::from(body))
            .unwrap();
        let post = extract(req).await.unwrap().into_inner();
        assert_eq!(post.entry_type(), EntryType::Entry);
        assert_eq!(post.text("content"), ["Hi"]);
    }

    #[tokio::test]
    async fn test_extract_rejects_malformed_json() {
        let req = http::Request::builder()
            .method("POST")
            .uri("/micropub")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{"))
            .unwrap();
        let err = extract(req).await.unwrap_err();
        assert!(matches!(err, MicropubError::Json(_)));
    }
}
