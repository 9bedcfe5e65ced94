//! Content-Type dispatch: the single entry point for decoding a request body.

use crate::config::DecoderConfig;
use crate::error::Result;
use crate::protocol::{
    extract_multipart_fields, extract_multipart_fields_blocking, BodyEncoding, FormDecoder,
    FormFields, JsonDecoder, TypeRegistry,
};
use crate::types::MicroformatObject;
use bytes::Bytes;
use std::sync::Arc;

/// Selects a decoder from the declared Content-Type and runs it.
///
/// Holds no per-request state; one instance can be cloned into every handler.
///
/// # Examples
///
/// ```
/// use micropub_mf::{EntryType, RequestDecoder};
///
/// let decoder = RequestDecoder::new();
///
/// let post = decoder
///     .decode_request(Some("application/x-www-form-urlencoded"), b"h=entry&content=Hi")
///     .unwrap();
/// assert_eq!(post.entry_type(), EntryType::Entry);
///
/// let err = decoder.decode_request(Some("application/json"), b"{oops").unwrap_err();
/// assert!(err.is_client_error());
/// ```
#[derive(Debug, Clone)]
pub struct RequestDecoder {
    registry: Arc<TypeRegistry>,
    config: DecoderConfig,
}

impl RequestDecoder {
    /// Decoder with the shared registry and default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DecoderConfig::default())
    }

    /// Decoder with the shared registry and custom limits.
    #[must_use]
    pub fn with_config(config: DecoderConfig) -> Self {
        Self::with_registry(TypeRegistry::shared(), config)
    }

    /// Decoder with an explicit registry.
    #[must_use]
    pub fn with_registry(registry: Arc<TypeRegistry>, config: DecoderConfig) -> Self {
        Self { registry, config }
    }

    /// The limits this decoder applies.
    #[inline]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// The registry this decoder resolves types through.
    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    /// Decode a request body according to its Content-Type.
    ///
    /// | Content-Type | Decoding |
    /// |--------------|----------|
    /// | `application/json` | JSON |
    /// | `multipart/form-data...` | multipart fields, then form |
    /// | anything else, or absent | URL-encoded form |
    ///
    /// # Errors
    ///
    /// Malformed JSON or multipart bodies, and JSON documents of the wrong
    /// shape. URL-encoded bodies never fail. An unrecognised type is not an
    /// error; it decodes to [`EntryType::Unknown`](crate::EntryType::Unknown).
    pub fn decode_request(
        &self,
        content_type: Option<&str>,
        body: &[u8],
    ) -> Result<MicroformatObject> {
        self.decode_request_with_query(content_type, body, None)
    }

    /// Like [`decode_request`](Self::decode_request), also reading form fields
    /// from a URL query string.
    ///
    /// The query only contributes to URL-encoded submissions, where its values
    /// follow the body's values for the same key.
    pub fn decode_request_with_query(
        &self,
        content_type: Option<&str>,
        body: &[u8],
        query: Option<&str>,
    ) -> Result<MicroformatObject> {
        let encoding = BodyEncoding::from_content_type(content_type);
        log_start(encoding, content_type, body.len());

        let object = match encoding {
            BodyEncoding::Json => self.decode_json(body)?,
            BodyEncoding::Multipart => {
                self.decode_multipart(content_type.unwrap_or_default(), body)?
            }
            BodyEncoding::UrlEncoded => {
                let mut fields = FormFields::from_urlencoded(body);
                if let Some(query) = query {
                    fields.extend_urlencoded(query.as_bytes());
                }
                self.decode_form(&fields)?
            }
        };

        log_decoded(&object);
        Ok(object)
    }

    /// Decode an owned request body without blocking the calling task.
    ///
    /// Multipart bodies are parsed asynchronously; every other encoding
    /// behaves exactly like
    /// [`decode_request_with_query`](Self::decode_request_with_query).
    ///
    /// # Errors
    ///
    /// As [`decode_request`](Self::decode_request).
    pub async fn decode_body(
        &self,
        content_type: Option<&str>,
        body: Bytes,
        query: Option<&str>,
    ) -> Result<MicroformatObject> {
        let encoding = BodyEncoding::from_content_type(content_type);
        if encoding != BodyEncoding::Multipart {
            return self.decode_request_with_query(content_type, &body, query);
        }

        log_start(encoding, content_type, body.len());
        let fields = extract_multipart_fields(
            content_type.unwrap_or_default(),
            body,
            self.config.max_multipart_field_bytes,
        )
        .await?;
        let object = self.decode_form(&fields)?;
        log_decoded(&object);
        Ok(object)
    }

    /// Decode a JSON body.
    pub fn decode_json(&self, body: &[u8]) -> Result<MicroformatObject> {
        JsonDecoder::new(Arc::clone(&self.registry), self.config).decode_slice(body)
    }

    /// Decode a multipart body; `content_type` must carry the boundary.
    pub fn decode_multipart(&self, content_type: &str, body: &[u8]) -> Result<MicroformatObject> {
        let fields = extract_multipart_fields_blocking(
            content_type,
            body,
            self.config.max_multipart_field_bytes,
        )?;
        self.decode_form(&fields)
    }

    /// Decode already extracted form fields.
    pub fn decode_form(&self, fields: &FormFields) -> Result<MicroformatObject> {
        FormDecoder::new(Arc::clone(&self.registry)).decode(fields)
    }
}

impl Default for RequestDecoder {
    fn default() -> Self {
        Self::new()
    }
}

fn log_start(encoding: BodyEncoding, content_type: Option<&str>, len: usize) {
    tracing::debug!(
        "Decoding {} byte body as {} (content-type {:?})",
        len,
        encoding,
        content_type
    );
}

fn log_decoded(object: &MicroformatObject) {
    tracing::debug!(
        "Decoded {} object with {} properties",
        object.entry_type(),
        object.len()
    );
}

/// Decode a request body with the shared registry and default limits.
///
/// See [`RequestDecoder::decode_request`].
pub fn decode_request(content_type: Option<&str>, body: &[u8]) -> Result<MicroformatObject> {
    RequestDecoder::new().decode_request(content_type, body)
}
