//! Error types for Micropub request decoding.
//!
//! Every failure the decoding layer can report is a [`MicropubError`]. None of
//! them terminate the process: decoders return them to the dispatcher, the
//! dispatcher returns them to the boundary handler, and the boundary turns them
//! into a `400 Bad Request`.
//!
//! An unrecognised type tag is *not* a decode error. The registry resolves it to
//! [`EntryType::Unknown`](crate::EntryType::Unknown) and the boundary rejects it
//! with [`MicropubError::UnknownType`].

use thiserror::Error;

/// Errors produced while decoding or accepting a Micropub submission.
#[derive(Error, Debug)]
pub enum MicropubError {
    /// The body declared as JSON is not well-formed JSON.
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// A well-formed JSON document holds the wrong shape at `field`.
    #[error("malformed document: `{field}` must be {expected}")]
    MalformedShape {
        /// Path of the offending key (e.g. `type`, `properties.content`).
        field: String,
        /// Human readable description of the expected shape.
        expected: &'static str,
    },

    /// Nested object materialization went deeper than the configured limit.
    #[error("nested objects exceed the maximum depth of {max}")]
    DepthExceeded {
        /// The configured maximum nesting depth.
        max: usize,
    },

    /// The multipart body could not be parsed.
    #[error("invalid multipart body: {0}")]
    Multipart(#[from] multer::Error),

    /// The submission decoded cleanly but names no known post type.
    #[error("unknown or missing post type")]
    UnknownType,

    /// The request body could not be read.
    #[error("failed to read request body: {0}")]
    Body(String),
}

impl MicropubError {
    /// Build a [`MicropubError::MalformedShape`] for `field`.
    pub fn malformed(field: impl Into<String>, expected: &'static str) -> Self {
        MicropubError::MalformedShape {
            field: field.into(),
            expected,
        }
    }

    /// Whether the error was caused by the submitted request.
    ///
    /// Every variant currently is; the boundary maps them all to `400`.
    pub fn is_client_error(&self) -> bool {
        match self {
            MicropubError::Json(_)
            | MicropubError::MalformedShape { .. }
            | MicropubError::DepthExceeded { .. }
            | MicropubError::Multipart(_)
            | MicropubError::UnknownType
            | MicropubError::Body(_) => true,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MicropubError>;
