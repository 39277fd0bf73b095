//! Core of Bottom Nav: menu documents and the resources behind them.
//!
//! This crate turns a declarative menu document into a validated, immutable
//! [`MenuModel`]:
//!
//! - **Tag streams**: [`TagStream`] with an XML reader ([`XmlTagStream`]) and
//!   an in-memory [`EventList`]
//! - **Attributes**: typed, reference-resolving lookup through [`AttributeSource`]
//! - **Resources**: [`ResourceProvider`], [`ResourceTable`] and [`ThemeDefaults`]
//! - **Parsing**: [`MenuParser`], a state machine over the tag stream that
//!   derives default colors and rejects malformed documents
//!
//! # Example
//!
//! ```
//! use bottom_nav_core::{Color, MenuParser, ResourceBundle, ResourceId};
//!
//! let mut resources = ResourceBundle::new();
//! resources.insert_menu(
//!     ResourceId(1),
//!     r##"<menu bbn_itemColorActive="#FF0000">
//!          <item android:id="1" android:title="Home"/>
//!          <item android:id="2" android:title="Search"/>
//!        </menu>"##,
//! );
//!
//! let menu = MenuParser::new(&resources).parse(ResourceId(1)).expect("valid menu");
//! assert_eq!(menu.len(), 2);
//! assert_eq!(menu.style().color_inactive, Color(0x7FFF0000));
//! ```

mod attributes;
mod color;
mod error;
pub mod logging;
pub mod menu;
mod resources;
mod stream;
mod xml;

pub use attributes::{AttributeSource, Attributes, StyledAttributes, local_name};
pub use color::Color;
pub use error::{AttributeError, ParseFailure, ResourceError, StreamError, StreamResult};
pub use menu::{MenuEntry, MenuModel, MenuParser, MenuStyle};
pub use resources::{ResourceBundle, ResourceId, ResourceProvider, ResourceTable, ThemeDefaults};
pub use stream::{EventList, TagEvent, TagStream};
pub use xml::XmlTagStream;
