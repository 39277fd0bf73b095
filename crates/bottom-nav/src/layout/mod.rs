//! Layout controllers.
//!
//! A [`LayoutController`] owns the selection and enablement state of a
//! populated menu and mediates between the [`MenuModel`] and a concrete
//! presentation. Callers only depend on the trait; the concrete layouts are
//! [`NavigationLayout`]s parameterised by an [`Arrangement`]:
//!
//! | layout | arrangement |
//! |---|---|
//! | [`FixedLayout`] | every label visible |
//! | [`ShiftingLayout`] | only the selected label visible, selected item grows |
//! | [`TabletLayout`] | vertical rail, icons only |
//!
//! # Example
//!
//! ```ignore
//! use bottom_nav::{FixedLayout, LayoutController, NavigationConfig};
//!
//! let mut layout = FixedLayout::new(&NavigationConfig::default());
//! layout.populate(&menu);
//! layout.set_item_click_listener(Some(Box::new(|index, _animate| {
//!     println!("selected {index}");
//! })));
//! layout.set_selected_index(1, true)?;
//! ```

mod fixed;
mod item;
mod selection;
mod shifting;
mod tablet;

use std::fmt;

use bottom_nav_core::logging::{span_names, targets};
use bottom_nav_core::{MenuModel, MenuStyle};

use crate::config::NavigationConfig;
use crate::error::LayoutResult;

pub use fixed::Fixed;
pub use item::ItemView;
pub use selection::{NO_SELECTION, SelectionState};
pub use shifting::Shifting;
pub use tablet::Tablet;

/// Receives selection changes from a layout controller.
pub trait ItemClickListener {
    /// Called once each time the selected index changes.
    fn on_item_click(&mut self, index: i32, animate: bool);
}

impl<F: FnMut(i32, bool)> ItemClickListener for F {
    fn on_item_click(&mut self, index: i32, animate: bool) {
        self(index, animate)
    }
}

/// The selection/lifecycle contract every layout satisfies.
///
/// Controllers are single-owner objects: all calls must come from the same
/// context.
pub trait LayoutController {
    /// Which family of layout this is.
    fn kind(&self) -> LayoutKind;

    /// Whether items share the bar equally. Read once at construction.
    fn distribute_equally(&self) -> bool;

    /// Replaces all items with the entries of `menu` and selects the first.
    ///
    /// Does not notify the listener. Populating twice with the same menu
    /// leaves the same observable state.
    fn populate(&mut self, menu: &MenuModel);

    /// The selected index, or [`NO_SELECTION`] when there are no items.
    fn selected_index(&self) -> i32;

    /// Selects `index`, notifying the listener once if the selection changed.
    ///
    /// `animate` only affects presentation. Disabled items may be selected.
    fn set_selected_index(&mut self, index: i32, animate: bool) -> LayoutResult<()>;

    /// Enables or disables `index`. Never changes the selection.
    fn set_item_enabled(&mut self, index: i32, enabled: bool) -> LayoutResult<()>;

    /// Removes every item, returning to the state before the first `populate`.
    ///
    /// The listener stays registered.
    fn remove_all(&mut self);

    /// Registers the single item-click listener, replacing any previous one.
    fn set_item_click_listener(&mut self, listener: Option<Box<dyn ItemClickListener>>);

    /// Removes and returns the registered listener.
    fn take_item_click_listener(&mut self) -> Option<Box<dyn ItemClickListener>>;

    fn item_count(&self) -> usize;

    fn item(&self, index: usize) -> Option<&ItemView>;

    fn is_item_enabled(&self, index: usize) -> Option<bool> {
        self.item(index).map(ItemView::is_enabled)
    }
}

/// The presentation rules of a layout family.
///
/// An arrangement decides label visibility and item weights; everything else
/// is handled by [`NavigationLayout`].
pub trait Arrangement: Default {
    const KIND: LayoutKind;

    /// Updates `items` after population or a selection change.
    fn arrange(&self, items: &mut [ItemView], selected: i32, distribute_equally: bool);
}

/// Layout families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    /// All labels visible.
    Fixed,
    /// Only the selected label visible.
    Shifting,
    /// Vertical rail for large screens.
    Tablet,
}

impl LayoutKind {
    /// Chooses the layout family for `menu`.
    ///
    /// Tablet mode always wins; otherwise menus with more than
    /// `shifting_threshold` items shift.
    pub fn for_menu(menu: &MenuModel, config: &NavigationConfig) -> Self {
        if config.tablet_mode {
            LayoutKind::Tablet
        } else if menu.len() > config.shifting_threshold {
            LayoutKind::Shifting
        } else {
            LayoutKind::Fixed
        }
    }

    /// Creates an empty controller of this family.
    pub fn create(self, config: &NavigationConfig) -> Box<dyn LayoutController> {
        match self {
            LayoutKind::Fixed => Box::new(FixedLayout::new(config)),
            LayoutKind::Shifting => Box::new(ShiftingLayout::new(config)),
            LayoutKind::Tablet => Box::new(TabletLayout::new(config)),
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutKind::Fixed => write!(f, "fixed"),
            LayoutKind::Shifting => write!(f, "shifting"),
            LayoutKind::Tablet => write!(f, "tablet"),
        }
    }
}

/// A layout controller whose presentation is decided by `A`.
pub struct NavigationLayout<A: Arrangement> {
    arrangement: A,
    distribute_equally: bool,
    selection: SelectionState,
    items: Vec<ItemView>,
    style: Option<MenuStyle>,
    listener: Option<Box<dyn ItemClickListener>>,
}

/// Bottom bar with every label visible.
pub type FixedLayout = NavigationLayout<Fixed>;
/// Bottom bar where only the selected item shows its label.
pub type ShiftingLayout = NavigationLayout<Shifting>;
/// Vertical navigation rail.
pub type TabletLayout = NavigationLayout<Tablet>;

impl<A: Arrangement> NavigationLayout<A> {
    /// Creates an empty layout. `distribute_equally` is taken from `config` now
    /// and never re-read.
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            arrangement: A::default(),
            distribute_equally: config.distribute_equally,
            selection: SelectionState::new(),
            items: Vec::new(),
            style: None,
            listener: None,
        }
    }

    /// The selection bookkeeping.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// All item views, in menu order.
    pub fn items(&self) -> &[ItemView] {
        &self.items
    }

    fn refresh(&mut self) {
        let Some(style) = self.style.as_ref() else {
            return;
        };
        for (index, item) in self.items.iter_mut().enumerate() {
            let enabled = self.selection.is_enabled(index).unwrap_or(true);
            item.update_state(self.selection.is_selected(index), enabled, style);
        }
        self.arrangement
            .arrange(&mut self.items, self.selection.selected(), self.distribute_equally);
    }
}

impl<A: Arrangement> fmt::Debug for NavigationLayout<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationLayout")
            .field("kind", &A::KIND)
            .field("distribute_equally", &self.distribute_equally)
            .field("selection", &self.selection)
            .field("items", &self.items.len())
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl<A: Arrangement> LayoutController for NavigationLayout<A> {
    fn kind(&self) -> LayoutKind {
        A::KIND
    }

    fn distribute_equally(&self) -> bool {
        self.distribute_equally
    }

    fn populate(&mut self, menu: &MenuModel) {
        let _span = tracing::debug_span!(target: targets::LAYOUT, span_names::POPULATE, kind = %A::KIND).entered();

        let style = *menu.style();
        let changing_color = menu.has_changing_color();
        self.items = menu
            .entries()
            .iter()
            .map(|entry| ItemView::new(entry, &style, changing_color))
            .collect();
        self.selection.reset(menu.entries().iter().map(|e| e.is_enabled()));
        self.style = Some(style);
        self.refresh();

        tracing::debug!(target: targets::LAYOUT, items = self.items.len(), "populated layout");
    }

    fn selected_index(&self) -> i32 {
        self.selection.selected()
    }

    fn set_selected_index(&mut self, index: i32, animate: bool) -> LayoutResult<()> {
        let changed = self.selection.select(index).inspect_err(|error| {
            tracing::warn!(target: targets::LAYOUT, %error, "rejected selection");
        })?;
        if !changed {
            return Ok(());
        }

        tracing::debug!(target: targets::LAYOUT, index, animate, "selection changed");
        self.refresh();
        if let Some(listener) = self.listener.as_mut() {
            listener.on_item_click(index, animate);
        }
        Ok(())
    }

    fn set_item_enabled(&mut self, index: i32, enabled: bool) -> LayoutResult<()> {
        if self.selection.set_enabled(index, enabled)? {
            tracing::debug!(target: targets::LAYOUT, index, enabled, "item enablement changed");
            self.refresh();
        }
        Ok(())
    }

    fn remove_all(&mut self) {
        self.items.clear();
        self.selection.clear();
        self.style = None;
    }

    fn set_item_click_listener(&mut self, listener: Option<Box<dyn ItemClickListener>>) {
        self.listener = listener;
    }

    fn take_item_click_listener(&mut self) -> Option<Box<dyn ItemClickListener>> {
        self.listener.take()
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item(&self, index: usize) -> Option<&ItemView> {
        self.items.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bottom_nav_core::{Color, MenuEntry};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn style() -> MenuStyle {
        MenuStyle {
            color_active: Color::RED,
            color_inactive: Color::RED.half_alpha(),
            color_disabled: Color::RED.half_alpha().half_alpha(),
            ripple_color: Color::TRANSPARENT,
            background: Color::WHITE,
            badge_color: Color::RED,
            item_animation_duration: 200,
        }
    }

    fn menu(count: i32) -> MenuModel {
        let entries = (1..=count)
            .map(|i| MenuEntry::new(i, format!("Tab {i}"), 0))
            .collect();
        MenuModel::new(style(), entries).unwrap()
    }

    fn recorder() -> (Rc<RefCell<Vec<(i32, bool)>>>, Box<dyn ItemClickListener>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        (calls, Box::new(move |index: i32, animate: bool| sink.borrow_mut().push((index, animate))))
    }

    #[test]
    fn test_new_layout_is_empty() {
        let layout = FixedLayout::new(&NavigationConfig::default());
        assert_eq!(layout.selected_index(), NO_SELECTION);
        assert_eq!(layout.item_count(), 0);
        assert_eq!(layout.kind(), LayoutKind::Fixed);
    }

    #[test]
    fn test_populate_selects_first_without_notifying() {
        let (calls, listener) = recorder();
        let mut layout = FixedLayout::new(&NavigationConfig::default());
        layout.set_item_click_listener(Some(listener));
        layout.populate(&menu(3));

        assert_eq!(layout.selected_index(), 0);
        assert_eq!(layout.item_count(), 3);
        assert!(layout.item(0).unwrap().is_selected());
        assert_eq!(layout.item(0).unwrap().tint(), Color::RED);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_listener_notified_once_per_change() {
        let (calls, listener) = recorder();
        let mut layout = ShiftingLayout::new(&NavigationConfig::default());
        layout.set_item_click_listener(Some(listener));
        layout.populate(&menu(4));

        layout.set_selected_index(2, true).unwrap();
        layout.set_selected_index(2, false).unwrap();
        layout.set_selected_index(0, false).unwrap();

        assert_eq!(*calls.borrow(), vec![(2, true), (0, false)]);
    }

    #[test]
    fn test_out_of_range_selection() {
        let (calls, listener) = recorder();
        let mut layout = FixedLayout::new(&NavigationConfig::default());
        layout.set_item_click_listener(Some(listener));
        layout.populate(&menu(2));
        layout.set_selected_index(1, false).unwrap();
        let before: Vec<ItemView> = layout.items().to_vec();

        assert!(layout.set_selected_index(2, false).is_err());
        assert!(layout.set_selected_index(-1, false).is_err());
        assert_eq!(layout.selected_index(), 1);
        assert_eq!(layout.items(), before.as_slice());
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_enablement() {
        let mut layout = FixedLayout::new(&NavigationConfig::default());
        layout.populate(&menu(3));

        layout.set_item_enabled(1, false).unwrap();
        assert_eq!(layout.is_item_enabled(1), Some(false));
        assert_eq!(layout.item(1).unwrap().tint(), style().color_disabled);

        layout.set_item_enabled(1, true).unwrap();
        assert_eq!(layout.selected_index(), 0);
        assert!(layout.set_item_enabled(3, true).is_err());
    }

    #[test]
    fn test_remove_all_keeps_listener() {
        let (calls, listener) = recorder();
        let mut layout = TabletLayout::new(&NavigationConfig::default());
        layout.set_item_click_listener(Some(listener));
        layout.populate(&menu(2));
        layout.remove_all();

        assert_eq!(layout.selected_index(), NO_SELECTION);
        assert_eq!(layout.item_count(), 0);
        assert_eq!(*layout.selection(), SelectionState::new());

        layout.populate(&menu(2));
        layout.set_selected_index(1, false).unwrap();
        assert_eq!(*calls.borrow(), vec![(1, false)]);
    }

    #[test]
    fn test_kind_for_menu() {
        let config = NavigationConfig::default();
        assert_eq!(LayoutKind::for_menu(&menu(3), &config), LayoutKind::Fixed);
        assert_eq!(LayoutKind::for_menu(&menu(4), &config), LayoutKind::Shifting);

        let tablet = config.clone().with_tablet_mode(true);
        assert_eq!(LayoutKind::for_menu(&menu(5), &tablet), LayoutKind::Tablet);

        let wide = config.with_shifting_threshold(5);
        assert_eq!(LayoutKind::for_menu(&menu(5), &wide), LayoutKind::Fixed);
    }

    #[test]
    fn test_create_honors_kind_and_config() {
        let config = NavigationConfig::default().with_distribute_equally(false);
        for kind in [LayoutKind::Fixed, LayoutKind::Shifting, LayoutKind::Tablet] {
            let layout = kind.create(&config);
            assert_eq!(layout.kind(), kind);
            assert!(!layout.distribute_equally());
        }
    }
}
