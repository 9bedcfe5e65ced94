//! The type registry: wire strings to [`EntryType`].
//!
//! Resolution is an exact lookup in a fixed table, then a second lookup of the
//! title-cased input, then [`EntryType::Unknown`]. It never fails.
//!
//! | Wire string | Tag |
//! |-------------|-----|
//! | `Unknown` | `Unknown` |
//! | `Entry`, `entry` | `Entry` |
//! | `h-entry`, `H-Entry` | `Entry` |
//! | anything else | `Unknown` |

use crate::types::EntryType;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

const WIRE_NAMES: &[(&str, EntryType)] = &[
    ("Unknown", EntryType::Unknown),
    ("Entry", EntryType::Entry),
    ("H-Entry", EntryType::Entry),
    ("h-entry", EntryType::Entry),
];

/// Immutable mapping between wire strings and [`EntryType`]s.
///
/// Build one at start-up (or use [`TypeRegistry::shared`]) and hand it to the
/// decoders by `Arc`.
///
/// # Examples
///
/// ```
/// use micropub_mf::{EntryType, protocol::TypeRegistry};
///
/// let registry = TypeRegistry::new();
/// assert_eq!(registry.resolve("entry"), EntryType::Entry);
/// assert_eq!(registry.resolve("h-entry"), EntryType::Entry);
/// assert_eq!(registry.resolve("h-card"), EntryType::Unknown);
/// assert_eq!(registry.name(EntryType::Entry), "Entry");
/// ```
#[derive(Debug)]
pub struct TypeRegistry {
    by_name: HashMap<&'static str, EntryType>,
}

impl TypeRegistry {
    /// Build the registry from the fixed wire table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_name: WIRE_NAMES.iter().copied().collect(),
        }
    }

    /// The process-wide registry, built on first use.
    pub fn shared() -> Arc<TypeRegistry> {
        static SHARED: OnceLock<Arc<TypeRegistry>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(TypeRegistry::new())))
    }

    /// Resolve a wire string. Unrecognised input resolves to
    /// [`EntryType::Unknown`]; callers that must reject it check explicitly.
    pub fn resolve(&self, wire: &str) -> EntryType {
        if let Some(tag) = self.by_name.get(wire) {
            return *tag;
        }
        self.by_name
            .get(title_case(wire).as_str())
            .copied()
            .unwrap_or(EntryType::Unknown)
    }

    /// Canonical name of a tag.
    pub fn name(&self, tag: EntryType) -> &'static str {
        tag.as_str()
    }

    /// Every wire string the registry recognises without title-casing.
    pub fn wire_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_name.keys().copied()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Upper-case the first letter of every word.
///
/// A word starts at the beginning of the input or after any character that is
/// neither alphanumeric nor `_`. Other letters are left as they are.
///
/// ```
/// use micropub_mf::protocol::title_case;
///
/// assert_eq!(title_case("h-entry"), "H-Entry");
/// assert_eq!(title_case("entry"), "Entry");
/// assert_eq!(title_case("ENTRY"), "ENTRY");
/// ```
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    out
}
