//! Per-item presentation state.

use bottom_nav_core::{Color, MenuEntry, MenuStyle};

/// The presentation state of one navigation item.
///
/// Layouts keep one `ItemView` per menu entry and update them whenever the
/// selection, enablement or layout-specific arrangement changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    id: i32,
    title: String,
    icon: i32,
    enabled: bool,
    selected: bool,
    /// Tint used when this item is selected.
    active_color: Color,
    /// Current tint.
    tint: Color,
    pub(crate) label_visible: bool,
    /// Relative share of the bar's main axis.
    pub(crate) weight: f32,
}

impl ItemView {
    pub(crate) fn new(entry: &MenuEntry, style: &MenuStyle, changing_color: bool) -> Self {
        let active_color = if changing_color && entry.has_color() {
            entry.color()
        } else {
            style.color_active
        };

        Self {
            id: entry.id(),
            title: entry.title().to_string(),
            icon: entry.icon(),
            enabled: entry.is_enabled(),
            selected: false,
            active_color,
            tint: style.color_inactive,
            label_visible: true,
            weight: 1.0,
        }
    }

    /// Recomputes the tint from the selection and enabled flags.
    pub(crate) fn update_state(&mut self, selected: bool, enabled: bool, style: &MenuStyle) {
        self.selected = selected;
        self.enabled = enabled;
        self.tint = if !enabled {
            style.color_disabled
        } else if selected {
            self.active_color
        } else {
            style.color_inactive
        };
    }

    /// Identifier of the underlying menu entry.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Label text.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Opaque icon resource key.
    pub fn icon(&self) -> i32 {
        self.icon
    }

    /// Returns true if the item can be clicked.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns true if this is the selected item.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Current tint color.
    pub fn tint(&self) -> Color {
        self.tint
    }

    /// Returns true if the label is shown.
    pub fn is_label_visible(&self) -> bool {
        self.label_visible
    }

    /// Relative share of the bar.
    pub fn weight(&self) -> f32 {
        self.weight
    }
}
