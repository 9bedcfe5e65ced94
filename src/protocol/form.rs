//! Form decoding (URL-encoded and multipart fields).
//!
//! Form encoding is flat: every key becomes one text property, except `h`,
//! which selects the type. A `[]` suffix on a key is stripped before use.

use crate::error::Result;
use crate::protocol::constants::keys;
use crate::protocol::TypeRegistry;
use crate::types::{MicroformatObject, PropertyValue};
use indexmap::IndexMap;
use std::sync::Arc;
use url::form_urlencoded;

/// Ordered form fields: each key with all of its values.
///
/// Keys keep their first-appearance order and repeated keys collect their
/// values in submission order, so `a=1&b=2&a=3` holds `a: [1, 3]`, `b: [2]`.
///
/// # Examples
///
/// ```
/// use micropub_mf::protocol::FormFields;
///
/// let fields = FormFields::from_urlencoded(b"category=a&content=Hello+world&category=b");
/// assert_eq!(fields.get("category").unwrap(), ["a", "b"]);
/// assert_eq!(fields.get("content").unwrap(), ["Hello world"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: IndexMap<String, Vec<String>>,
}

impl FormFields {
    /// Empty field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` payload.
    ///
    /// Percent-decoding is lossy, so this never fails.
    pub fn from_urlencoded(input: &[u8]) -> Self {
        let mut fields = Self::new();
        fields.extend_urlencoded(input);
        fields
    }

    /// Append the fields of another URL-encoded payload (e.g. a query string).
    pub fn extend_urlencoded(&mut self, input: &[u8]) {
        for (key, value) in form_urlencoded::parse(input) {
            self.push(key.into_owned(), value.into_owned());
        }
    }

    /// Add one value under `key`.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    /// Values of a key exactly as submitted (no suffix stripping).
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.fields.get(key).map(Vec::as_slice)
    }

    /// Iterate keys with their values in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (key, value) in iter {
            fields.push(key, value);
        }
        fields
    }
}

/// Strip one trailing `[]` from a form key.
///
/// ```
/// use micropub_mf::protocol::normalize_key;
///
/// assert_eq!(normalize_key("category[]"), "category");
/// assert_eq!(normalize_key("category"), "category");
/// ```
pub fn normalize_key(key: &str) -> &str {
    key.strip_suffix(keys::ARRAY_SUFFIX).unwrap_or(key)
}

/// Populates a [`MicroformatObject`] from flat form fields.
#[derive(Debug, Clone)]
pub struct FormDecoder {
    registry: Arc<TypeRegistry>,
}

impl FormDecoder {
    /// Decoder resolving types through `registry`.
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self { registry }
    }

    /// Decode `fields` into `target`.
    ///
    /// The first `h` value (after suffix stripping) sets the type; later `h`
    /// keys are ignored. Every other key becomes a text property holding all of
    /// its values, replacing any earlier property of the same name.
    ///
    /// There is no malformed input at this layer, so this always succeeds.
    pub fn decode_into(&self, fields: &FormFields, target: &mut MicroformatObject) -> Result<()> {
        let mut type_seen = false;

        for (key, values) in fields.iter() {
            let name = normalize_key(key);
            if name == keys::H {
                if !type_seen {
                    if let Some(first) = values.first() {
                        target.set_entry_type(self.registry.resolve(first));
                        type_seen = true;
                    }
                }
                continue;
            }
            target.insert(name, PropertyValue::from_text(values.to_vec()));
        }

        Ok(())
    }

    /// Decode `fields` into a fresh object.
    pub fn decode(&self, fields: &FormFields) -> Result<MicroformatObject> {
        let mut object = MicroformatObject::default();
        self.decode_into(fields, &mut object)?;
        Ok(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryType;

    fn decoder() -> FormDecoder {
        FormDecoder::new(TypeRegistry::shared())
    }

    #[test]
    fn test_fields_group_repeated_keys() {
        let fields = FormFields::from_urlencoded(b"a=1&b=2&a=3");
        let collected: Vec<_> = fields.iter().collect();
        assert_eq!(collected.len(), 2);
        assert_eq!(collected[0].0, "a");
        assert_eq!(collected[0].1, ["1", "3"]);
        assert_eq!(collected[1].1, ["2"]);
    }

    #[test]
    fn test_fields_many_distinct_keys() {
        let body = (0..50_000)
            .map(|i| format!("k{i}=v"))
            .collect::<Vec<_>>()
            .join("&");
        let started = std::time::Instant::now();
        let fields = FormFields::from_urlencoded(body.as_bytes());
        assert!(started.elapsed() < std::time::Duration::from_secs(2));

        assert_eq!(fields.len(), 50_000);
        assert_eq!(fields.iter().next().unwrap().0, "k0");
        assert_eq!(fields.iter().last().unwrap().0, "k49999");
        assert_eq!(fields.get("k25000").unwrap(), ["v"]);
    }

    #[test]
    fn test_fields_percent_decoding() {
        let fields = FormFields::from_urlencoded(b"content=Hello+world%21");
        assert_eq!(fields.get("content").unwrap(), ["Hello world!"]);
    }

    #[test]
    fn test_fields_extend_appends_after_body() {
        let mut fields = FormFields::from_urlencoded(b"category=body");
        fields.extend_urlencoded(b"category=query&h=entry");
        assert_eq!(fields.get("category").unwrap(), ["body", "query"]);
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_decode_basic_entry() {
        let fields = FormFields::from_urlencoded(
            b"h=entry&title=Testing&content=Hello+world&category=recipes",
        );
        let object = decoder().decode(&fields).unwrap();
        assert_eq!(object.entry_type(), EntryType::Entry);
        assert_eq!(object.text("title"), ["Testing"]);
        assert_eq!(object.text("content"), ["Hello world"]);
        assert_eq!(object.text("category"), ["recipes"]);
        assert!(object.get("h").is_none());
    }

    #[test]
    fn test_decode_array_suffix() {
        let fields = FormFields::from_urlencoded(b"h=entry&category[]=recipes&category[]=food");
        let object = decoder().decode(&fields).unwrap();
        assert_eq!(object.text("category"), ["recipes", "food"]);
        assert!(object.get("category[]").is_none());
    }

    #[test]
    fn test_decode_unknown_type() {
        let fields = FormFields::from_urlencoded(b"h=blarf");
        let object = decoder().decode(&fields).unwrap();
        assert_eq!(object.entry_type(), EntryType::Unknown);
        assert!(object.is_empty());
    }

    #[test]
    fn test_only_first_h_is_consulted() {
        let fields: FormFields = [("h", "entry"), ("h", "blarf"), ("h[]", "blarf")]
            .into_iter()
            .collect();
        let object = decoder().decode(&fields).unwrap();
        assert_eq!(object.entry_type(), EntryType::Entry);
    }

    #[test]
    fn test_suffix_and_plain_key_collide_last_wins() {
        let fields: FormFields = [("category", "a"), ("category[]", "b")]
            .into_iter()
            .collect();
        let object = decoder().decode(&fields).unwrap();
        assert_eq!(object.text("category"), ["b"]);
    }

    #[test]
    fn test_decode_into_keeps_existing_properties() {
        let mut object = MicroformatObject::default();
        object.insert("name", PropertyValue::from_text(vec!["kept".into()]));
        let fields = FormFields::from_urlencoded(b"content=x");
        decoder().decode_into(&fields, &mut object).unwrap();
        assert_eq!(object.text("name"), ["kept"]);
        assert_eq!(object.text("content"), ["x"]);
    }
}
