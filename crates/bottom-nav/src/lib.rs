//! Bottom Nav: selection and layout controllers for a tab-style navigation bar.
//!
//! A menu document is parsed by [`bottom_nav_core`] into a [`MenuModel`];
//! this crate presents it:
//!
//! - **Layouts**: the [`LayoutController`] contract and its fixed, shifting
//!   and tablet implementations
//! - **Configuration**: [`NavigationConfig`], loadable from TOML
//! - **Facade**: [`BottomNavigation`], which inflates a menu, picks the
//!   layout family and keeps the click listener across re-inflation
//!
//! # Example
//!
//! ```
//! use bottom_nav::{BottomNavigation, LayoutKind, NavigationConfig};
//! use bottom_nav_core::{ResourceBundle, ResourceId};
//!
//! let mut resources = ResourceBundle::new();
//! resources.insert_menu(
//!     ResourceId(1),
//!     r#"<menu>
//!          <item android:id="1" android:title="Home"/>
//!          <item android:id="2" android:title="Search"/>
//!        </menu>"#,
//! );
//!
//! let mut nav = BottomNavigation::new(NavigationConfig::default());
//! nav.set_item_click_listener(Some(Box::new(|index: i32, _animate: bool| {
//!     println!("selected {index}");
//! })));
//! nav.inflate_menu(&resources, ResourceId(1))?;
//! assert_eq!(nav.controller().map(|c| c.kind()), Some(LayoutKind::Fixed));
//!
//! nav.set_selected_index(1, true)?;
//! assert_eq!(nav.selected_index(), 1);
//! # Ok::<(), bottom_nav::NavigationError>(())
//! ```

mod config;
mod error;
pub mod layout;
mod navigation;

pub use bottom_nav_core::{MenuEntry, MenuModel, MenuStyle};
pub use config::NavigationConfig;
pub use error::{ConfigError, LayoutError, LayoutResult, NavigationError};
pub use layout::{
    Arrangement, Fixed, FixedLayout, ItemClickListener, ItemView, LayoutController, LayoutKind, NO_SELECTION,
    NavigationLayout, SelectionState, Shifting, ShiftingLayout, Tablet, TabletLayout,
};
pub use navigation::BottomNavigation;
