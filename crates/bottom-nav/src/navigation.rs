//! The navigation bar facade.

use bottom_nav_core::logging::targets;
use bottom_nav_core::{
    MenuModel, MenuParser, ResourceError, ResourceId, ResourceProvider, ResourceTable, TagStream, ThemeDefaults,
};

use crate::config::NavigationConfig;
use crate::error::{LayoutError, LayoutResult, NavigationError};
use crate::layout::{ItemClickListener, LayoutController, LayoutKind, NO_SELECTION};

/// Serves documents and references from a provider with the host's theme.
struct HostThemed<'a> {
    inner: &'a dyn ResourceProvider,
    theme: &'a ThemeDefaults,
}

impl ResourceProvider for HostThemed<'_> {
    fn open_menu(&self, id: ResourceId) -> Result<Box<dyn TagStream + '_>, ResourceError> {
        self.inner.open_menu(id)
    }

    fn table(&self) -> &ResourceTable {
        self.inner.table()
    }

    fn theme(&self) -> &ThemeDefaults {
        self.theme
    }
}

/// A bottom navigation bar: a parsed menu plus the layout presenting it.
///
/// Inflating a menu picks the layout family from the configuration and the
/// number of entries. The click listener belongs to the bar and moves to the
/// new controller whenever the layout family changes.
pub struct BottomNavigation {
    config: NavigationConfig,
    menu: Option<MenuModel>,
    layout: Option<Box<dyn LayoutController>>,
    /// Listener registered before any layout exists.
    listener: Option<Box<dyn ItemClickListener>>,
}

impl BottomNavigation {
    /// Create an empty bar. Nothing is shown until a menu is inflated.
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            config,
            menu: None,
            layout: None,
            listener: None,
        }
    }

    /// The configuration the bar was created with.
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Parses the menu `id` from `resources` and shows it.
    ///
    /// Unspecified colors come from the configured theme. When parsing fails
    /// the bar keeps its previous menu and layout.
    pub fn inflate_menu(&mut self, resources: &dyn ResourceProvider, id: ResourceId) -> Result<(), NavigationError> {
        let themed = HostThemed {
            inner: resources,
            theme: &self.config.theme,
        };
        let menu = MenuParser::new(&themed).parse(id)?;
        let kind = LayoutKind::for_menu(&menu, &self.config);

        let mut layout = match self.layout.take() {
            Some(layout) if layout.kind() == kind => layout,
            previous => {
                if let Some(mut previous) = previous {
                    self.listener = previous.take_item_click_listener();
                }
                tracing::debug!(target: targets::LAYOUT, %kind, "creating layout");
                let mut layout = kind.create(&self.config);
                layout.set_item_click_listener(self.listener.take());
                layout
            }
        };
        layout.remove_all();
        layout.populate(&menu);

        self.layout = Some(layout);
        self.menu = Some(menu);
        Ok(())
    }

    /// The menu currently shown, if any.
    pub fn menu(&self) -> Option<&MenuModel> {
        self.menu.as_ref()
    }

    /// The current layout controller, if a menu was inflated.
    pub fn controller(&self) -> Option<&dyn LayoutController> {
        self.layout.as_deref()
    }

    /// Mutable access to the current layout controller.
    pub fn controller_mut(&mut self) -> Option<&mut (dyn LayoutController + 'static)> {
        self.layout.as_deref_mut()
    }

    /// Selected index, or [`NO_SELECTION`] when no menu is shown.
    pub fn selected_index(&self) -> i32 {
        self.layout.as_ref().map_or(NO_SELECTION, |layout| layout.selected_index())
    }

    /// Select `index`. Fails with `IndexOutOfRange` when no menu is shown.
    pub fn set_selected_index(&mut self, index: i32, animate: bool) -> LayoutResult<()> {
        match self.layout.as_mut() {
            Some(layout) => layout.set_selected_index(index, animate),
            None => Err(LayoutError::IndexOutOfRange { index, count: 0 }),
        }
    }

    /// Enable or disable `index`. Fails with `IndexOutOfRange` when no menu is shown.
    pub fn set_item_enabled(&mut self, index: i32, enabled: bool) -> LayoutResult<()> {
        match self.layout.as_mut() {
            Some(layout) => layout.set_item_enabled(index, enabled),
            None => Err(LayoutError::IndexOutOfRange { index, count: 0 }),
        }
    }

    /// Registers the listener notified of selection changes.
    pub fn set_item_click_listener(&mut self, listener: Option<Box<dyn ItemClickListener>>) {
        match self.layout.as_mut() {
            Some(layout) => layout.set_item_click_listener(listener),
            None => self.listener = listener,
        }
    }

    /// Removes the menu and all items. The listener stays registered.
    pub fn clear(&mut self) {
        if let Some(layout) = self.layout.as_mut() {
            layout.remove_all();
        }
        self.menu = None;
    }
}

impl std::fmt::Debug for BottomNavigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BottomNavigation")
            .field("config", &self.config)
            .field("menu", &self.menu)
            .field("kind", &self.layout.as_ref().map(|layout| layout.kind()))
            .field("selected_index", &self.selected_index())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bottom_nav_core::{Color, ResourceBundle};

    const MENU: ResourceId = ResourceId(1);

    #[test]
    fn test_empty_bar() {
        let mut nav = BottomNavigation::new(NavigationConfig::default());
        assert_eq!(nav.selected_index(), NO_SELECTION);
        assert!(nav.menu().is_none());
        assert!(nav.controller().is_none());
        assert_eq!(
            nav.set_selected_index(0, false),
            Err(LayoutError::IndexOutOfRange { index: 0, count: 0 })
        );
        assert!(nav.set_item_enabled(0, false).is_err());
    }

    #[test]
    fn test_configured_theme_fills_unspecified_colors() {
        let theme = ThemeDefaults {
            foreground: Color(0xFF21_96F3),
            ..ThemeDefaults::default()
        };
        let mut resources = ResourceBundle::new();
        resources.insert_menu(MENU, r#"<menu><item android:id="1" android:title="Home"/></menu>"#);

        let mut nav = BottomNavigation::new(NavigationConfig::default().with_theme(theme));
        nav.inflate_menu(&resources, MENU).unwrap();

        let style = nav.menu().unwrap().style();
        assert_eq!(style.color_active, Color(0xFF21_96F3));
        assert_eq!(style.color_inactive, Color(0x7F21_96F3));
    }

    #[test]
    fn test_failed_inflate_keeps_previous_menu() {
        let mut resources = ResourceBundle::new();
        resources.insert_menu(MENU, r#"<menu><item android:id="1"/><item android:id="2"/></menu>"#);
        resources.insert_menu(ResourceId(2), "<menu></menu>");

        let mut nav = BottomNavigation::new(NavigationConfig::default());
        nav.inflate_menu(&resources, MENU).unwrap();
        nav.set_selected_index(1, false).unwrap();

        assert!(matches!(
            nav.inflate_menu(&resources, ResourceId(2)),
            Err(NavigationError::Parse(_))
        ));
        assert!(nav.inflate_menu(&resources, ResourceId(3)).is_err());
        assert_eq!(nav.menu().map(MenuModel::len), Some(2));
        assert_eq!(nav.selected_index(), 1);
    }

    #[test]
    fn test_clear() {
        let mut resources = ResourceBundle::new();
        resources.insert_menu(MENU, r#"<menu><item android:id="1"/></menu>"#);

        let mut nav = BottomNavigation::new(NavigationConfig::default());
        nav.inflate_menu(&resources, MENU).unwrap();
        nav.clear();

        assert!(nav.menu().is_none());
        assert_eq!(nav.selected_index(), NO_SELECTION);
        assert_eq!(nav.controller().map(|c| c.item_count()), Some(0));
    }
}
