//! Menu document parser.
//!
//! Converts a tag stream into a [`MenuModel`]. The expected document shape:
//!
//! ```xml
//! <menu bbn_itemColorActive="#FF0000" bbn_badgeColor="#FFFF9800">
//!     <item android:id="@+id/home" android:title="Home" android:icon="@drawable/ic_home"/>
//!     <item android:id="@+id/search" android:title="Search" android:enabled="false"/>
//! </menu>
//! ```
//!
//! Unknown elements inside the root are skipped together with their content,
//! which lets documents carry extension tags this parser does not understand.

use crate::attributes::{AttributeSource, StyledAttributes};
use crate::color::Color;
use crate::error::{MenuParseError, ParseFailure};
use crate::logging::{span_names, targets};
use crate::menu::model::{MenuEntry, MenuModel, MenuStyle};
use crate::resources::{ResourceId, ResourceProvider, ResourceTable, ThemeDefaults};
use crate::stream::{TagEvent, TagStream};

/// Tag name of the document root.
pub const MENU_TAG: &str = "menu";
/// Tag name of a menu entry.
pub const ITEM_TAG: &str = "item";

/// Attribute names read from the root element.
pub mod menu_attrs {
    pub const ITEM_ANIMATION_DURATION: &str = "bbn_itemAnimationDuration";
    pub const BACKGROUND: &str = "android:background";
    pub const RIPPLE_COLOR: &str = "bbn_rippleColor";
    pub const ITEM_COLOR_ACTIVE: &str = "bbn_itemColorActive";
    pub const ITEM_COLOR_INACTIVE: &str = "bbn_itemColorInactive";
    pub const ITEM_COLOR_DISABLED: &str = "bbn_itemColorDisabled";
    pub const BADGE_COLOR: &str = "bbn_badgeColor";
}

/// Attribute names read from `item` elements.
pub mod item_attrs {
    pub const ID: &str = "android:id";
    pub const TITLE: &str = "android:title";
    pub const ICON: &str = "android:icon";
    pub const ENABLED: &str = "android:enabled";
    pub const COLOR: &str = "android:color";
}

/// Where the scanner is in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ScanState {
    /// Before the root start tag.
    SeekingRoot,
    /// Inside the root, looking at items and unknown tags.
    Scanning,
    /// Inside an unknown element; everything is ignored until its end tag.
    SkippingUnknown(String),
    /// The root end tag has been seen.
    Done,
}

/// An entry between its start and end tag.
#[derive(Debug)]
struct RawItem {
    id: i32,
    title: Option<String>,
    icon: i32,
    enabled: bool,
    color: Color,
}

impl RawItem {
    fn read(attrs: &impl AttributeSource) -> Result<Self, MenuParseError> {
        Ok(Self {
            id: attrs.get_resource_id(item_attrs::ID, 0)?,
            title: attrs.get_text(item_attrs::TITLE)?,
            icon: attrs.get_resource_id(item_attrs::ICON, 0)?,
            enabled: attrs.get_bool(item_attrs::ENABLED, true)?,
            color: attrs.get_color(item_attrs::COLOR, Color::TRANSPARENT)?,
        })
    }

    fn finish(self) -> MenuEntry {
        MenuEntry::new(self.id, self.title.unwrap_or_default(), self.icon)
            .with_enabled(self.enabled)
            .with_color(self.color)
    }
}

/// Reads the root element's attributes, deriving every unspecified color.
fn read_style(attrs: &impl AttributeSource, theme: &ThemeDefaults) -> Result<MenuStyle, MenuParseError> {
    use menu_attrs::*;

    let explicit = |key: &str, fallback: Color| -> Result<Color, MenuParseError> {
        if attrs.has_value(key) {
            Ok(attrs.get_color(key, Color::TRANSPARENT)?)
        } else {
            Ok(fallback)
        }
    };

    let item_animation_duration = attrs.get_int(ITEM_ANIMATION_DURATION, theme.item_animation_duration)?;
    let background = explicit(BACKGROUND, theme.window_background)?;
    let ripple_color = explicit(RIPPLE_COLOR, theme.control_highlight)?;
    let color_active = explicit(ITEM_COLOR_ACTIVE, theme.foreground)?;
    let color_inactive = explicit(ITEM_COLOR_INACTIVE, color_active.half_alpha())?;
    let color_disabled = explicit(ITEM_COLOR_DISABLED, color_inactive.half_alpha())?;
    let badge_color = attrs.get_color(BADGE_COLOR, Color::RED)?;

    Ok(MenuStyle {
        color_active,
        color_inactive,
        color_disabled,
        ripple_color,
        background,
        badge_color,
        item_animation_duration,
    })
}

/// One pass over a tag stream.
struct MenuScan<'a> {
    table: &'a ResourceTable,
    theme: &'a ThemeDefaults,
    state: ScanState,
    style: Option<MenuStyle>,
    item: Option<RawItem>,
    entries: Vec<MenuEntry>,
}

impl<'a> MenuScan<'a> {
    fn new(table: &'a ResourceTable, theme: &'a ThemeDefaults) -> Self {
        Self {
            table,
            theme,
            state: ScanState::SeekingRoot,
            style: None,
            item: None,
            entries: Vec::new(),
        }
    }

    fn transition(&mut self, next: ScanState) {
        tracing::trace!(target: targets::PARSER, from = ?self.state, to = ?next, "parser state change");
        self.state = next;
    }

    fn run<S: TagStream + ?Sized>(mut self, stream: &mut S) -> Result<MenuModel, MenuParseError> {
        while self.state != ScanState::Done {
            let event = stream.next_event()?;
            self.feed(event)?;
        }

        let style = self
            .style
            .ok_or_else(|| MenuParseError::MalformedDocument("root attributes were never read".into()))?;
        MenuModel::new(style, self.entries).ok_or(MenuParseError::EmptyMenu)
    }

    fn feed(&mut self, event: TagEvent) -> Result<(), MenuParseError> {
        match (&self.state, event) {
            (ScanState::SeekingRoot, TagEvent::StartTag { name, attributes }) => {
                if name != MENU_TAG {
                    return Err(MenuParseError::UnexpectedRootTag(name));
                }
                let styled = StyledAttributes::new(&attributes, self.table);
                self.style = Some(read_style(&styled, self.theme)?);
                self.transition(ScanState::Scanning);
            }
            (ScanState::SeekingRoot, TagEvent::EndDocument) => {
                return Err(MenuParseError::EmptyDocument);
            }
            (ScanState::SeekingRoot, _) => {}

            (_, TagEvent::EndDocument) => return Err(MenuParseError::TruncatedDocument),

            (ScanState::Scanning, TagEvent::StartTag { name, attributes }) => {
                if name == ITEM_TAG {
                    if self.item.is_some() {
                        return Err(MenuParseError::MalformedDocument(
                            "item element nested inside another item".into(),
                        ));
                    }
                    let styled = StyledAttributes::new(&attributes, self.table);
                    self.item = Some(RawItem::read(&styled)?);
                } else {
                    tracing::debug!(target: targets::PARSER, tag = %name, "skipping unknown element");
                    self.transition(ScanState::SkippingUnknown(name));
                }
            }
            (ScanState::Scanning, TagEvent::EndTag { name }) => {
                if name == ITEM_TAG {
                    if let Some(item) = self.item.take() {
                        self.entries.push(item.finish());
                    }
                } else if name == MENU_TAG {
                    // an item still open at the root end tag is dropped
                    if let Some(item) = self.item.take() {
                        tracing::debug!(target: targets::PARSER, id = item.id, "dropping unterminated item");
                    }
                    self.transition(ScanState::Done);
                }
            }

            (ScanState::SkippingUnknown(skipped), TagEvent::StartTag { name, .. }) => {
                // same-name nesting is not tracked: the first matching end tag closes the skip
                // `item` is a distinct tag here too
                if name != *skipped {
                    return Err(MenuParseError::MalformedDocument(format!(
                        "<{name}> opened while skipping unknown element <{skipped}>"
                    )));
                }
            }
            (ScanState::SkippingUnknown(skipped), TagEvent::EndTag { name }) => {
                if name == *skipped {
                    self.transition(ScanState::Scanning);
                }
            }

            (_, TagEvent::Text(_)) => {}
            (ScanState::Done, _) => {}
        }
        Ok(())
    }
}

/// Builds [`MenuModel`]s from menu documents.
///
/// ```
/// use bottom_nav_core::{MenuParser, ResourceBundle, ResourceId};
///
/// let mut resources = ResourceBundle::new();
/// resources.insert_menu(
///     ResourceId(1),
///     r##"<menu bbn_itemColorActive="#FF0000">
///          <item android:id="1" android:title="A"/>
///          <item android:id="2" android:title="B" android:enabled="false"/>
///        </menu>"##,
/// );
///
/// let menu = MenuParser::new(&resources).parse(ResourceId(1)).unwrap();
/// assert_eq!(menu.len(), 2);
/// assert!(!menu.entries()[1].is_enabled());
/// ```
#[derive(Clone, Copy)]
pub struct MenuParser<'a> {
    resources: &'a dyn ResourceProvider,
}

impl std::fmt::Debug for MenuParser<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuParser").finish_non_exhaustive()
    }
}

impl<'a> MenuParser<'a> {
    /// Create a parser reading documents, references and theme values from `resources`.
    pub fn new(resources: &'a dyn ResourceProvider) -> Self {
        Self { resources }
    }

    /// Parses the menu document registered under `id`.
    ///
    /// On failure no partial menu is returned; the reason is logged.
    pub fn parse(&self, id: ResourceId) -> Result<MenuModel, ParseFailure> {
        let _span = tracing::debug_span!(target: targets::PARSER, span_names::PARSE_MENU, %id).entered();
        let result = self
            .resources
            .open_menu(id)
            .map_err(MenuParseError::from)
            .and_then(|mut stream| self.read(&mut stream));
        Self::report(result)
    }

    /// Parses a menu from a tag stream the caller already holds.
    pub fn parse_stream<S: TagStream + ?Sized>(&self, stream: &mut S) -> Result<MenuModel, ParseFailure> {
        let _span = tracing::debug_span!(target: targets::PARSER, span_names::PARSE_MENU).entered();
        Self::report(self.read(stream))
    }

    pub(crate) fn read<S: TagStream + ?Sized>(&self, stream: &mut S) -> Result<MenuModel, MenuParseError> {
        MenuScan::new(self.resources.table(), self.resources.theme()).run(stream)
    }

    fn report(result: Result<MenuModel, MenuParseError>) -> Result<MenuModel, ParseFailure> {
        match result {
            Ok(menu) => {
                tracing::debug!(target: targets::PARSER, items = menu.len(), "parsed {menu}");
                Ok(menu)
            }
            Err(error) => {
                tracing::warn!(target: targets::PARSER, %error, "failed to parse menu document");
                Err(ParseFailure)
            }
        }
    }
}
