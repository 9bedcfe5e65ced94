//! The post type tag.

use crate::protocol::TypeRegistry;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The kind of post a submission describes.
///
/// Wire strings map onto this through the [`TypeRegistry`]. Anything the
/// registry does not recognise becomes [`EntryType::Unknown`]; it is never an
/// error at this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EntryType {
    /// Unrecognised or absent type.
    #[default]
    Unknown,
    /// An `h-entry` post.
    Entry,
}

impl EntryType {
    /// Canonical symbolic name (`"Unknown"` or `"Entry"`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Unknown => "Unknown",
            EntryType::Entry => "Entry",
        }
    }

    /// Whether this is [`EntryType::Unknown`].
    #[inline]
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, EntryType::Unknown)
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing never fails; unrecognised strings resolve to `Unknown`.
///
/// ```
/// use micropub_mf::EntryType;
///
/// assert_eq!("h-entry".parse::<EntryType>().unwrap(), EntryType::Entry);
/// assert_eq!("blarf".parse::<EntryType>().unwrap(), EntryType::Unknown);
/// ```
impl FromStr for EntryType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TypeRegistry::shared().resolve(s))
    }
}
