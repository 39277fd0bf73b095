//! Parsed menu representation.

use std::fmt;

use crate::color::Color;

/// Global styling of a menu, after default derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuStyle {
    /// Color of the selected item.
    pub color_active: Color,
    /// Color of unselected items.
    pub color_inactive: Color,
    /// Color of disabled items.
    pub color_disabled: Color,
    /// Touch feedback color.
    pub ripple_color: Color,
    /// Bar background.
    pub background: Color,
    /// Background of item badges.
    pub badge_color: Color,
    /// Item transition duration, in milliseconds.
    pub item_animation_duration: i32,
}

/// One navigable item of a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    id: i32,
    title: String,
    icon: i32,
    enabled: bool,
    color: Color,
}

impl MenuEntry {
    /// Creates an enabled entry without a color override.
    pub fn new(id: i32, title: impl Into<String>, icon: i32) -> Self {
        Self {
            id,
            title: title.into(),
            icon,
            enabled: true,
            color: Color::TRANSPARENT,
        }
    }

    /// Set whether the entry can be clicked.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the per-entry color override.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Opaque identifier of the entry.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Display label, empty when the document gives none.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Opaque icon resource key, `0` when the item has none.
    pub fn icon(&self) -> i32 {
        self.icon
    }

    /// Returns true if the entry can be clicked.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The per-item color override, [`Color::TRANSPARENT`] when unset.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns true if the entry overrides the menu's active color.
    pub fn has_color(&self) -> bool {
        !self.color.is_unset()
    }
}

/// A parsed navigation menu: global styling plus at least one entry.
///
/// Menus returned by [`MenuParser`](crate::MenuParser) are never empty and
/// never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuModel {
    style: MenuStyle,
    entries: Vec<MenuEntry>,
}

impl MenuModel {
    /// Assembles a menu. Returns `None` if `entries` is empty.
    pub fn new(style: MenuStyle, entries: Vec<MenuEntry>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self { style, entries })
    }

    /// Global styling of the bar.
    pub fn style(&self) -> &MenuStyle {
        &self.style
    }

    /// Entries in document order.
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Number of entries, always at least one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a parsed menu.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at `index`.
    pub fn entry(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get(index)
    }

    /// Returns true if the first entry carries its own color, in which case
    /// the bar tints items per entry instead of with the global active color.
    pub fn has_changing_color(&self) -> bool {
        self.entries.first().is_some_and(MenuEntry::has_color)
    }
}

impl fmt::Display for MenuModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Menu{{background: {}, colorActive: {}, colorInactive: {}, colorDisabled: {}, items: {}}}",
            self.style.background,
            self.style.color_active,
            self.style.color_inactive,
            self.style.color_disabled,
            self.entries.len()
        )
    }
}
