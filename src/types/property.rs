//! Property values.
//!
//! A property holds either a list of text values or a list of nested
//! [`MicroformatObject`]s. Form submissions only ever produce text. JSON
//! submissions keep the raw element list and classify it per accessor call:
//! [`PropertyValue::text`] reads the string elements, [`PropertyValue::object`]
//! decodes the first element as a nested object.
//!
//! Both accessors are total. Asking a text value for an object yields an empty
//! object, and asking an object-shaped value for text yields an empty list.

use crate::error::{MicropubError, Result};
use crate::protocol::JsonDecoder;
use crate::types::MicroformatObject;
use serde_json::Value;
use std::sync::OnceLock;

/// Where a JSON-backed value sits in the document, and how to decode below it.
#[derive(Debug, Clone)]
pub(crate) struct NestingScope {
    decoder: JsonDecoder,
    /// Depth of the object that owns the property (top level is 0).
    depth: usize,
}

impl NestingScope {
    pub(crate) fn new(decoder: JsonDecoder, depth: usize) -> Self {
        Self { decoder, depth }
    }

    fn materialize(&self, element: &Value) -> Result<MicroformatObject> {
        let max = self.decoder.max_depth();
        if self.depth >= max {
            return Err(MicropubError::DepthExceeded { max });
        }
        let mut nested = MicroformatObject::default();
        self.decoder
            .decode_nested(element.clone(), &mut nested, self.depth + 1)?;
        Ok(nested)
    }
}

#[derive(Debug, Clone)]
enum Values {
    Text(Vec<String>),
    Json {
        elements: Vec<Value>,
        scope: NestingScope,
    },
}

/// The values of one property.
#[derive(Debug, Clone)]
pub struct PropertyValue {
    values: Values,
    /// Memoized text view of `Values::Json`. Filled on first [`text`](Self::text)
    /// call; never observable as a state change.
    text: OnceLock<Vec<String>>,
}

impl PropertyValue {
    /// A text-shaped value.
    #[must_use]
    pub fn from_text(values: Vec<String>) -> Self {
        Self {
            values: Values::Text(values),
            text: OnceLock::new(),
        }
    }

    pub(crate) fn from_json(elements: Vec<Value>, scope: NestingScope) -> Self {
        Self {
            values: Values::Json { elements, scope },
            text: OnceLock::new(),
        }
    }

    /// The text values.
    ///
    /// For JSON-backed values this is the string elements in order; object
    /// elements (and any other non-string element) are left out, so a
    /// nested-object property reads as an empty list.
    pub fn text(&self) -> &[String] {
        match &self.values {
            Values::Text(values) => values,
            Values::Json { elements, .. } => self.text.get_or_init(|| {
                elements
                    .iter()
                    .filter_map(|element| element.as_str().map(str::to_owned))
                    .collect()
            }),
        }
    }

    /// The first element decoded as a nested object.
    ///
    /// Returns an empty object when the value is text-shaped, empty, or its
    /// first element is not an object.
    ///
    /// # Errors
    ///
    /// [`MicropubError::MalformedShape`] if the nested document has the wrong
    /// shape, [`MicropubError::DepthExceeded`] if it sits deeper than the
    /// configured nesting limit.
    pub fn object(&self) -> Result<MicroformatObject> {
        match &self.values {
            Values::Text(_) => Ok(MicroformatObject::default()),
            Values::Json { elements, scope } => match elements.first() {
                Some(element @ Value::Object(_)) => scope.materialize(element),
                _ => Ok(MicroformatObject::default()),
            },
        }
    }

    /// Every object element decoded as a nested object, in order.
    ///
    /// # Errors
    ///
    /// Same as [`object`](Self::object).
    pub fn objects(&self) -> Result<Vec<MicroformatObject>> {
        match &self.values {
            Values::Text(_) => Ok(Vec::new()),
            Values::Json { elements, scope } => elements
                .iter()
                .filter(|element| element.is_object())
                .map(|element| scope.materialize(element))
                .collect(),
        }
    }

    /// Whether any element is a nested object.
    pub fn is_nested(&self) -> bool {
        match &self.values {
            Values::Text(_) => false,
            Values::Json { elements, .. } => elements.iter().any(Value::is_object),
        }
    }

    /// Whether the value carries no nested objects.
    pub fn is_text(&self) -> bool {
        !self.is_nested()
    }

    /// Number of raw elements.
    pub fn len(&self) -> usize {
        match &self.values {
            Values::Text(values) => values.len(),
            Values::Json { elements, .. } => elements.len(),
        }
    }

    /// Whether the value has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(values: Vec<String>) -> Self {
        Self::from_text(values)
    }
}

/// Structural equality on the underlying values; the text cache and the
/// decoder context are ignored.
impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        match (&self.values, &other.values) {
            (Values::Text(a), Values::Text(b)) => a == b,
            (Values::Json { elements: a, .. }, Values::Json { elements: b, .. }) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DecoderConfig;
    use crate::protocol::TypeRegistry;
    use crate::types::EntryType;
    use serde_json::json;

    fn scope(depth: usize) -> NestingScope {
        NestingScope::new(
            JsonDecoder::new(TypeRegistry::shared(), DecoderConfig::default()),
            depth,
        )
    }

    fn json_value(elements: Value) -> PropertyValue {
        let Value::Array(elements) = elements else {
            panic!("test fixture must be an array");
        };
        PropertyValue::from_json(elements, scope(0))
    }

    #[test]
    fn test_text_value() {
        let value = PropertyValue::from_text(vec!["a".into(), "b".into()]);
        assert_eq!(value.text(), ["a", "b"]);
        assert!(value.is_text());
        assert_eq!(value.len(), 2);
    }

    #[test]
    fn test_text_value_as_object_is_empty() {
        let value = PropertyValue::from_text(vec!["a".into()]);
        let object = value.object().unwrap();
        assert_eq!(object, MicroformatObject::default());
        assert!(value.objects().unwrap().is_empty());
    }

    #[test]
    fn test_json_text_is_memoized() {
        let value = json_value(json!(["hello", "world"]));
        let first = value.text().as_ptr();
        let second = value.text().as_ptr();
        assert_eq!(value.text(), ["hello", "world"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_nested_value_as_text_is_empty() {
        let value = json_value(json!([{"type": ["h-measure"], "properties": {"unit": ["kg"]}}]));
        assert!(value.text().is_empty());
        assert!(value.is_nested());
    }

    #[test]
    fn test_nested_object() {
        let value = json_value(json!([{"type": ["h-entry"], "properties": {"unit": ["kg"]}}]));
        let object = value.object().unwrap();
        assert_eq!(object.entry_type(), EntryType::Entry);
        assert_eq!(object.text("unit"), ["kg"]);
    }

    #[test]
    fn test_mixed_elements() {
        let value = json_value(json!(["caption", {"properties": {"num": ["1"]}}, 7]));
        assert_eq!(value.text(), ["caption"]);
        // First element is text, so the single-object view is empty.
        assert!(value.object().unwrap().is_empty());
        let objects = value.objects().unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].text("num"), ["1"]);
    }

    #[test]
    fn test_depth_limit() {
        let elements = vec![json!({"properties": {}})];
        let value = PropertyValue::from_json(elements, scope(1));
        assert!(matches!(
            value.object(),
            Err(MicropubError::DepthExceeded { max: 1 })
        ));
    }

    #[test]
    fn test_malformed_nested_document() {
        let value = json_value(json!([{"type": "h-measure"}]));
        assert!(matches!(
            value.object(),
            Err(MicropubError::MalformedShape { .. })
        ));
    }

    #[test]
    fn test_equality_ignores_cache() {
        let a = json_value(json!(["x"]));
        let b = json_value(json!(["x"]));
        let _ = a.text();
        assert_eq!(a, b);
        assert_ne!(a, PropertyValue::from_text(vec!["x".into()]));
    }
}
