//! Logging facilities for Bottom Nav.
//!
//! Bottom Nav uses the `tracing` crate for instrumentation. Nothing is printed
//! unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("bottom_nav_core::parser=debug")
//!         .init();
//! }
//! ```
//!
//! Parse failures are reported to callers as an opaque
//! [`ParseFailure`](crate::ParseFailure); the actual reason is only available
//! in the log, at `warn` level on the [`targets::PARSER`] target.

/// Span names used for tracing.
pub mod span_names {
    /// A single `MenuParser::parse` call.
    pub const PARSE_MENU: &str = "bottom_nav::parse_menu";
    /// A layout controller being populated from a menu.
    pub const POPULATE: &str = "bottom_nav::populate";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Menu document parser.
    pub const PARSER: &str = "bottom_nav_core::parser";
    /// Resource lookup and attribute resolution.
    pub const RESOURCES: &str = "bottom_nav_core::resources";
    /// XML tag stream.
    pub const STREAM: &str = "bottom_nav_core::stream";
    /// Layout controllers and selection state.
    pub const LAYOUT: &str = "bottom_nav::layout";
    /// Configuration loading.
    pub const CONFIG: &str = "bottom_nav::config";
}
