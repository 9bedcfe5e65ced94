//! The microformat object.

use crate::types::{EntryType, PropertyValue};
use std::collections::BTreeMap;

/// One decoded post: a type tag plus named properties.
///
/// Property names are unique; inserting an existing name replaces its value.
/// Decoders build the object in a single call and hand it to the caller, who
/// owns it from then on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MicroformatObject {
    entry_type: EntryType,
    properties: BTreeMap<String, PropertyValue>,
}

impl MicroformatObject {
    /// An object of the given type with no properties.
    #[must_use]
    pub fn new(entry_type: EntryType) -> Self {
        Self {
            entry_type,
            properties: BTreeMap::new(),
        }
    }

    /// The type tag.
    #[inline]
    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    /// Replace the type tag.
    pub fn set_entry_type(&mut self, entry_type: EntryType) {
        self.entry_type = entry_type;
    }

    /// All properties, ordered by name.
    pub fn properties(&self) -> &BTreeMap<String, PropertyValue> {
        &self.properties
    }

    /// A property by name.
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Text values of a property, or an empty slice if it is absent.
    pub fn text(&self, name: &str) -> &[String] {
        self.properties
            .get(name)
            .map(PropertyValue::text)
            .unwrap_or_default()
    }

    /// Insert or replace a property, returning the previous value.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: PropertyValue,
    ) -> Option<PropertyValue> {
        self.properties.insert(name.into(), value)
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the object has no properties.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
