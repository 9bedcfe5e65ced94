//! Wire-level names used by Micropub submissions.

/// Media types recognised by the dispatcher.
pub mod content_types {
    /// JSON submissions.
    pub const JSON: &str = "application/json";
    /// Multipart submissions (matched as a prefix of the media type).
    pub const MULTIPART: &str = "multipart/form-data";
    /// URL-encoded submissions; also the fallback for anything unrecognised.
    pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
}

/// Keys with special meaning in form and JSON bodies.
pub mod keys {
    /// Form key selecting the post type (`h=entry`).
    pub const H: &str = "h";
    /// Suffix marking a repeatable form key (`category[]`).
    pub const ARRAY_SUFFIX: &str = "[]";
    /// JSON key holding the type list.
    pub const TYPE: &str = "type";
    /// JSON key holding the property map.
    pub const PROPERTIES: &str = "properties";
}
