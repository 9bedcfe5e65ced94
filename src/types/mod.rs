//! The microformats2 object model produced by every decoder.
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`EntryType`] | The post kind (`Unknown` or `Entry`) |
//! | [`PropertyValue`] | A property's values: text, or nested objects |
//! | [`MicroformatObject`] | A type tag plus named properties |
//!
//! # Examples
//!
//! ```
//! use micropub_mf::{EntryType, MicroformatObject, PropertyValue};
//!
//! let mut post = MicroformatObject::new(EntryType::Entry);
//! post.insert("content", PropertyValue::from_text(vec!["hello".to_string()]));
//!
//! assert_eq!(post.text("content"), ["hello"]);
//! assert!(post.text("missing").is_empty());
//! ```

mod entry_type;
mod object;
mod property;

pub use entry_type::EntryType;
pub use object::MicroformatObject;
pub use property::PropertyValue;
pub(crate) use property::NestingScope;
