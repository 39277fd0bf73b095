//! Error types for menu loading.
//!
//! Internally the parser distinguishes every way a document can be rejected
//! ([`MenuParseError`]). At the public boundary all of them collapse into the
//! opaque [`ParseFailure`]: callers only learn that no menu is available.

use std::path::PathBuf;

use crate::resources::ResourceId;

/// Result type alias for the tag stream.
pub type StreamResult<T> = std::result::Result<T, StreamError>;

/// Errors raised while reading the underlying tag stream.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// The document is not well-formed XML.
    #[error("XML syntax error at byte {position}: {message}")]
    Syntax { message: String, position: u64 },

    /// An attribute could not be decoded.
    #[error("Malformed attribute at byte {position}: {message}")]
    Attribute { message: String, position: u64 },

    /// The document is not valid UTF-8.
    #[error("Invalid text encoding: {0}")]
    Encoding(String),
}

/// Errors raised while looking up a styled attribute.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttributeError {
    /// The raw value could not be converted to the requested type.
    #[error("Invalid {expected} value '{value}': {message}")]
    InvalidValue {
        expected: &'static str,
        value: String,
        message: String,
    },

    /// A `@type/name` reference does not exist in the resource table.
    #[error("Unresolved resource reference '{0}'")]
    UnresolvedReference(String),

    /// `?attr` theme references cannot be resolved outside a host theme.
    #[error("Theme attribute reference '{0}' is not supported")]
    ThemeReference(String),
}

impl AttributeError {
    /// Create a conversion error.
    pub fn invalid(expected: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            expected,
            value: value.into(),
            message: message.into(),
        }
    }
}

/// Errors raised by a [`ResourceProvider`](crate::ResourceProvider).
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// No menu document is registered under the handle.
    #[error("No menu resource registered for {0}")]
    NotFound(ResourceId),

    /// Reading a resource file failed.
    #[error("Failed to read resource '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A resource table or theme file could not be decoded.
    #[error("Invalid resource definition: {0}")]
    Definition(#[from] toml::de::Error),
}

impl ResourceError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Every reason a menu document can be rejected.
///
/// Only visible to the parser and its tests; [`MenuParser::parse`]
/// reports [`ParseFailure`] instead.
///
/// [`MenuParser::parse`]: crate::MenuParser::parse
#[derive(Debug, thiserror::Error)]
pub(crate) enum MenuParseError {
    /// The first start tag is not `menu`.
    #[error("Expecting <menu> root tag, got <{0}>")]
    UnexpectedRootTag(String),

    /// The stream ended before any start tag.
    #[error("Document contains no tags")]
    EmptyDocument,

    /// Structurally invalid body.
    #[error("Malformed menu document: {0}")]
    MalformedDocument(String),

    /// The stream ended before the root end tag.
    #[error("Unexpected end of document")]
    TruncatedDocument,

    /// The menu declared no items.
    #[error("Menu declares no items")]
    EmptyMenu,

    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error(transparent)]
    Attribute(#[from] AttributeError),

    #[error(transparent)]
    Resource(#[from] ResourceError),
}

/// The menu document could not be turned into a [`MenuModel`](crate::MenuModel).
///
/// Deliberately carries no diagnosis; the reason is logged under the
/// [`PARSER`](crate::logging::targets::PARSER) target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Menu parsing did not succeed")]
pub struct ParseFailure;
