//! Resource handles, resource tables and theme defaults.
//!
//! The parser does not know where menu documents live. It asks a
//! [`ResourceProvider`] to open a [`TagStream`] for a [`ResourceId`], and to
//! hand out the [`ResourceTable`] used to resolve references and the
//! [`ThemeDefaults`] used for colors the document leaves unspecified.
//!
//! [`ResourceBundle`] is the in-memory provider. Its table and theme can be
//! described in TOML:
//!
//! ```toml
//! [theme]
//! window_background = "#FFFAFAFA"
//! control_highlight = "#1F000000"
//! foreground = "#DE000000"
//! item_animation_duration = 200
//!
//! [table.ids]
//! home = 1
//!
//! [table.colors]
//! accent = "#FF3366CC"
//!
//! [table.strings]
//! home_title = "Home"
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ResourceError;
use crate::logging::targets;
use crate::stream::TagStream;
use crate::xml::XmlTagStream;

/// Opaque handle identifying a menu document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub i32);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resource #0x{:08x}", self.0)
    }
}

/// Named values that attribute references resolve against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceTable {
    /// `@id/..`, `@drawable/..` and any other key-like reference.
    pub ids: HashMap<String, i32>,
    /// `@color/..`
    pub colors: HashMap<String, Color>,
    /// `@string/..`
    pub strings: HashMap<String, String>,
    /// `@integer/..`
    pub integers: HashMap<String, i32>,
    /// `@bool/..`
    pub booleans: HashMap<String, bool>,
}

impl ResourceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named id.
    pub fn insert_id(&mut self, name: impl Into<String>, id: i32) {
        self.ids.insert(name.into(), id);
    }

    /// Register a named color.
    pub fn insert_color(&mut self, name: impl Into<String>, color: Color) {
        self.colors.insert(name.into(), color);
    }

    /// Register a named string.
    pub fn insert_string(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(name.into(), value.into());
    }

    /// Register a named integer.
    pub fn insert_integer(&mut self, name: impl Into<String>, value: i32) {
        self.integers.insert(name.into(), value);
    }

    /// Register a named boolean.
    pub fn insert_bool(&mut self, name: impl Into<String>, value: bool) {
        self.booleans.insert(name.into(), value);
    }

    /// Look up a named id.
    pub fn id(&self, name: &str) -> Option<i32> {
        self.ids.get(name).copied()
    }

    /// Look up a named color.
    pub fn color(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }

    /// Look up a named string.
    pub fn string(&self, name: &str) -> Option<&str> {
        self.strings.get(name).map(String::as_str)
    }

    /// Look up a named integer.
    pub fn integer(&self, name: &str) -> Option<i32> {
        self.integers.get(name).copied()
    }

    /// Look up a named boolean.
    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.booleans.get(name).copied()
    }
}

/// Host theme values used when a menu document leaves a color unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeDefaults {
    /// Fallback for the menu background.
    pub window_background: Color,
    /// Fallback for the ripple color.
    pub control_highlight: Color,
    /// Fallback for the active item color.
    pub foreground: Color,
    /// Fallback item animation duration, in milliseconds.
    pub item_animation_duration: i32,
}

impl Default for ThemeDefaults {
    fn default() -> Self {
        Self {
            window_background: Color(0xFFFA_FAFA),
            control_highlight: Color(0x1F00_0000),
            foreground: Color::BLACK,
            item_animation_duration: 200,
        }
    }
}

/// Source of menu documents and of the values needed to interpret them.
pub trait ResourceProvider {
    /// Opens the tag stream of the menu document registered under `id`.
    fn open_menu(&self, id: ResourceId) -> Result<Box<dyn TagStream + '_>, ResourceError>;

    /// The table `@type/name` references resolve against.
    fn table(&self) -> &ResourceTable;

    /// Theme values for unspecified colors.
    fn theme(&self) -> &ThemeDefaults;
}

#[derive(Debug, Deserialize)]
struct BundleDefinition {
    #[serde(default)]
    table: ResourceTable,
    #[serde(default)]
    theme: ThemeDefaults,
}

/// In-memory [`ResourceProvider`] holding XML menu sources.
#[derive(Debug, Clone, Default)]
pub struct ResourceBundle {
    menus: HashMap<ResourceId, String>,
    table: ResourceTable,
    theme: ThemeDefaults,
}

impl ResourceBundle {
    /// Creates an empty bundle with the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bundle whose table and theme are read from a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ResourceError> {
        let definition: BundleDefinition = toml::from_str(source)?;
        Ok(Self {
            menus: HashMap::new(),
            table: definition.table,
            theme: definition.theme,
        })
    }

    /// Replace the theme defaults.
    pub fn with_theme(mut self, theme: ThemeDefaults) -> Self {
        self.theme = theme;
        self
    }

    /// Replace the reference table.
    pub fn with_table(mut self, table: ResourceTable) -> Self {
        self.table = table;
        self
    }

    /// Registers a menu document, replacing any previous one with the same id.
    pub fn insert_menu(&mut self, id: ResourceId, xml: impl Into<String>) {
        self.menus.insert(id, xml.into());
    }

    /// Reads a menu document from disk and registers it under `id`.
    pub fn load_menu_file(&mut self, id: ResourceId, path: impl AsRef<Path>) -> Result<(), ResourceError> {
        let path = path.as_ref();
        let xml = std::fs::read_to_string(path).map_err(|e| ResourceError::io(path, e))?;
        tracing::debug!(target: targets::RESOURCES, %id, path = %path.display(), "loaded menu document");
        self.insert_menu(id, xml);
        Ok(())
    }

    /// Returns true if a menu document is registered under `id`.
    pub fn contains_menu(&self, id: ResourceId) -> bool {
        self.menus.contains_key(&id)
    }

    /// Mutable access to the reference table.
    pub fn table_mut(&mut self) -> &mut ResourceTable {
        &mut self.table
    }

    /// Mutable access to the theme defaults.
    pub fn theme_mut(&mut self) -> &mut ThemeDefaults {
        &mut self.theme
    }
}

impl ResourceProvider for ResourceBundle {
    fn open_menu(&self, id: ResourceId) -> Result<Box<dyn TagStream + '_>, ResourceError> {
        let xml = self.menus.get(&id).ok_or(ResourceError::NotFound(id))?;
        Ok(Box::new(XmlTagStream::from_str(xml)))
    }

    fn table(&self) -> &ResourceTable {
        &self.table
    }

    fn theme(&self) -> &ThemeDefaults {
        &self.theme
    }
}
