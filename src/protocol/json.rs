//! JSON decoding.
//!
//! A JSON submission is a microformats2 document:
//!
//! ```json
//! {
//!   "type": ["h-entry"],
//!   "properties": {
//!     "summary": ["Weighed 70.64 kg"],
//!     "weight": [{"type": ["h-measure"], "properties": {"unit": ["kg"]}}]
//!   }
//! }
//! ```
//!
//! Property lists are stored unclassified; a property becomes text or a nested
//! object only when it is read (see [`PropertyValue`]). Nested objects are
//! decoded by this same decoder, one level deeper, up to the configured maximum.
//! Unrecognised top-level keys are ignored.

use crate::config::DecoderConfig;
use crate::error::{MicropubError, Result};
use crate::protocol::constants::keys;
use crate::protocol::TypeRegistry;
use crate::types::{EntryType, MicroformatObject, NestingScope, PropertyValue};
use serde_json::Value;
use std::sync::Arc;

/// Populates a [`MicroformatObject`] from a JSON document.
///
/// # Examples
///
/// ```
/// use micropub_mf::{DecoderConfig, EntryType, protocol::{JsonDecoder, TypeRegistry}};
///
/// let decoder = JsonDecoder::new(TypeRegistry::shared(), DecoderConfig::default());
/// let post = decoder
///     .decode_slice(br#"{"type": ["h-entry"], "properties": {"content": ["hi"]}}"#)
///     .unwrap();
/// assert_eq!(post.entry_type(), EntryType::Entry);
/// assert_eq!(post.text("content"), ["hi"]);
///
/// assert!(decoder.decode_slice(b"{not json").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct JsonDecoder {
    registry: Arc<TypeRegistry>,
    max_depth: usize,
}

impl JsonDecoder {
    /// Decoder resolving types through `registry` and limited by `config`.
    pub fn new(registry: Arc<TypeRegistry>, config: DecoderConfig) -> Self {
        Self {
            registry,
            max_depth: config.max_nesting_depth,
        }
    }

    /// Maximum nesting depth below the top-level object.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parse and decode a raw body.
    ///
    /// # Errors
    ///
    /// [`MicropubError::Json`] if the body is not well-formed JSON (an empty
    /// body included), otherwise as
    /// [`decode_into`](Self::decode_into).
    pub fn decode_slice(&self, body: &[u8]) -> Result<MicroformatObject> {
        let mut object = MicroformatObject::default();
        let document: Value = serde_json::from_slice(body)?;
        self.decode_into(document, &mut object)?;
        Ok(object)
    }

    /// Decode a parsed document into `target`.
    ///
    /// # Errors
    ///
    /// [`MicropubError::MalformedShape`] when the document is not an object,
    /// `type` is not a non-empty list whose first element is a string, or
    /// `properties` is not an object of lists.
    pub fn decode_into(&self, document: Value, target: &mut MicroformatObject) -> Result<()> {
        self.decode_nested(document, target, 0)
    }

    pub(crate) fn decode_nested(
        &self,
        document: Value,
        target: &mut MicroformatObject,
        depth: usize,
    ) -> Result<()> {
        let Value::Object(document) = document else {
            return Err(MicropubError::malformed("document", "an object"));
        };

        for (key, value) in document {
            match key.as_str() {
                keys::TYPE => target.set_entry_type(self.resolve_type(&value)?),
                keys::PROPERTIES => {
                    let Value::Object(properties) = value else {
                        return Err(MicropubError::malformed(keys::PROPERTIES, "an object"));
                    };
                    for (name, values) in properties {
                        let Value::Array(elements) = values else {
                            return Err(MicropubError::malformed(
                                format!("{}.{}", keys::PROPERTIES, name),
                                "a list",
                            ));
                        };
                        let scope = NestingScope::new(self.clone(), depth);
                        target.insert(name, PropertyValue::from_json(elements, scope));
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn resolve_type(&self, value: &Value) -> Result<EntryType> {
        value
            .as_array()
            .and_then(|types| types.first())
            .and_then(Value::as_str)
            .map(|wire| self.registry.resolve(wire))
            .ok_or_else(|| MicropubError::malformed(keys::TYPE, "a non-empty list of strings"))
    }
}
