//! Error types for layout controllers and configuration.

use std::path::PathBuf;

use bottom_nav_core::ParseFailure;

/// Errors raised by a [`LayoutController`](crate::LayoutController).
///
/// These indicate the controller was driven incorrectly and are always
/// returned to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The index is outside `[0, count)`.
    #[error("Item index {index} out of range (item count {count})")]
    IndexOutOfRange { index: i32, count: usize },
}

/// Errors raised while loading a [`NavigationConfig`](crate::NavigationConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has invalid values.
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors raised by [`BottomNavigation`](crate::BottomNavigation).
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// The menu resource could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseFailure),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
