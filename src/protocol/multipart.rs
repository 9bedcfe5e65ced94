//! Multipart field extraction.
//!
//! `multipart/form-data` bodies are reduced to the same flat [`FormFields`] a
//! URL-encoded body produces, then handed to the [`FormDecoder`](super::FormDecoder).
//! File parts are skipped; only text fields describe the post.

use crate::error::Result;
use crate::protocol::FormFields;
use bytes::Bytes;
use futures::executor::block_on;
use futures::stream;
use multer::{Constraints, Multipart, SizeLimit};
use std::convert::Infallible;

/// Extract the text fields of a buffered multipart body.
///
/// A part counts as a file, and is skipped, only when its `filename` is
/// non-empty; `filename=""` is an ordinary value field.
///
/// # Errors
///
/// [`MicropubError::Multipart`](crate::MicropubError::Multipart) if the
/// Content-Type carries no boundary, the body is truncated or malformed, a
/// field exceeds `max_field_bytes`, or a text field is not valid UTF-8.
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use micropub_mf::protocol::extract_multipart_fields;
///
/// # futures::executor::block_on(async {
/// let body = Bytes::from_static(
///     b"--XyZ\r\nContent-Disposition: form-data; name=\"h\"\r\n\r\nentry\r\n--XyZ--\r\n",
/// );
/// let fields = extract_multipart_fields("multipart/form-data; boundary=XyZ", body, 1024)
///     .await
///     .unwrap();
/// assert_eq!(fields.get("h").unwrap(), ["entry"]);
/// # });
/// ```
pub async fn extract_multipart_fields(
    content_type: &str,
    body: Bytes,
    max_field_bytes: u64,
) -> Result<FormFields> {
    let boundary = multer::parse_boundary(content_type)?;
    let body_stream = stream::once(async move { Ok::<Bytes, Infallible>(body) });
    let constraints = Constraints::new().size_limit(SizeLimit::new().per_field(max_field_bytes));
    let mut multipart = Multipart::with_constraints(body_stream, boundary, constraints);

    let mut fields = FormFields::new();
    while let Some(field) = multipart.next_field().await? {
        if let Some(file_name) = field.file_name().filter(|name| !name.is_empty()) {
            tracing::debug!("Skipping multipart file part {:?}", file_name);
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field.text().await?;
        fields.push(name, value);
    }
    Ok(fields)
}

/// [`extract_multipart_fields`] for synchronous callers.
///
/// The body is already in memory, so the parser never waits on I/O and is
/// driven to completion on the calling thread.
pub fn extract_multipart_fields_blocking(
    content_type: &str,
    body: &[u8],
    max_field_bytes: u64,
) -> Result<FormFields> {
    block_on(extract_multipart_fields(
        content_type,
        Bytes::copy_from_slice(body),
        max_field_bytes,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MicropubError;

    const BOUNDARY: &str = "----micropub-test";

    fn content_type() -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    fn text_part(name: &str, value: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
    }

    fn close() -> String {
        format!("--{BOUNDARY}--\r\n")
    }

    #[test]
    fn test_text_fields_in_order() {
        let body = [
            text_part("h", "entry"),
            text_part("content", "Hello Multipart"),
            text_part("category[]", "a"),
            text_part("category[]", "b"),
            close(),
        ]
        .concat();
        let fields = extract_multipart_fields_blocking(&content_type(), body.as_bytes(), 1024).unwrap();
        assert_eq!(fields.get("h").unwrap(), ["entry"]);
        assert_eq!(fields.get("content").unwrap(), ["Hello Multipart"]);
        assert_eq!(fields.get("category[]").unwrap(), ["a", "b"]);
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn test_file_parts_skipped() {
        let file = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"photo\"; filename=\"a.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n\x01\x02\x03\r\n"
        );
        let body = [text_part("h", "entry"), file, close()].concat();
        let fields = extract_multipart_fields_blocking(&content_type(), body.as_bytes(), 1024).unwrap();
        assert!(fields.get("photo").is_none());
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_missing_boundary() {
        let err = extract_multipart_fields_blocking("multipart/form-data", b"", 1024).unwrap_err();
        assert!(matches!(err, MicropubError::Multipart(_)));
    }

    #[test]
    fn test_truncated_body() {
        let body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"h\"\r\n\r\nentry"
        );
        let err = extract_multipart_fields_blocking(&content_type(), body.as_bytes(), 1024).unwrap_err();
        assert!(matches!(err, MicropubError::Multipart(_)));
    }

    #[test]
    fn test_field_size_limit() {
        let body = [text_part("content", &"x".repeat(64)), close()].concat();
        let err = extract_multipart_fields_blocking(&content_type(), body.as_bytes(), 8).unwrap_err();
        assert!(matches!(err, MicropubError::Multipart(_)));
    }

    #[test]
    fn test_empty_filename_is_value_field() {
        let part = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"content\"; filename=\"\"\r\n\r\nHello\r\n"
        );
        let body = [text_part("h", "entry"), part, close()].concat();
        let fields = extract_multipart_fields_blocking(&content_type(), body.as_bytes(), 1024).unwrap();
        assert_eq!(fields.get("content").unwrap(), ["Hello"]);
        assert_eq!(fields.len(), 2);
    }

    #[tokio::test]
    async fn test_extract_awaited() {
        let body = [text_part("h", "entry"), text_part("content", "async"), close()].concat();
        let fields = extract_multipart_fields(&content_type(), Bytes::from(body), 1024)
            .await
            .unwrap();
        assert_eq!(fields.get("h").unwrap(), ["entry"]);
        assert_eq!(fields.get("content").unwrap(), ["async"]);
    }
}
