//! Tests of the layout controller contract and the navigation facade.

use std::cell::RefCell;
use std::rc::Rc;

use bottom_nav::{
    BottomNavigation, ItemClickListener, ItemView, LayoutController, LayoutError, LayoutKind, LayoutResult,
    NO_SELECTION, NavigationConfig, NavigationError, SelectionState,
};
use bottom_nav_core::{Color, MenuModel, MenuParser, ResourceBundle, ResourceId};

const TWO_ITEMS: ResourceId = ResourceId(0x7f0d_0001);
const FIVE_ITEMS: ResourceId = ResourceId(0x7f0d_0002);
const THREE_ITEMS: ResourceId = ResourceId(0x7f0d_0003);

const KINDS: [LayoutKind; 3] = [LayoutKind::Fixed, LayoutKind::Shifting, LayoutKind::Tablet];

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("bottom_nav=debug,bottom_nav_core=debug")
        .with_test_writer()
        .try_init();
}

fn resources() -> ResourceBundle {
    let mut bundle = ResourceBundle::new();
    bundle.insert_menu(
        TWO_ITEMS,
        r##"<menu bbn_itemColorActive="#FF0000"><item android:id="1" android:title="A"/><item android:id="2" android:title="B" android:enabled="false"/></menu>"##,
    );
    let five = (1..=5)
        .map(|i| format!(r#"<item android:id="{i}" android:title="Tab {i}"/>"#))
        .collect::<String>();
    bundle.insert_menu(FIVE_ITEMS, format!("<menu>{five}</menu>"));
    bundle.insert_menu(
        THREE_ITEMS,
        r#"<menu><item android:id="1"/><item android:id="2"/><item android:id="3"/></menu>"#,
    );
    bundle
}

fn parse(id: ResourceId) -> MenuModel {
    MenuParser::new(&resources()).parse(id).expect("menu should parse")
}

type Calls = Rc<RefCell<Vec<(i32, bool)>>>;

fn recorder() -> (Calls, Box<dyn ItemClickListener>) {
    let calls = Calls::default();
    let sink = calls.clone();
    (calls, Box::new(move |index: i32, animate: bool| sink.borrow_mut().push((index, animate))))
}

fn snapshot(layout: &dyn LayoutController) -> (i32, Vec<ItemView>) {
    let items = (0..layout.item_count()).filter_map(|i| layout.item(i).cloned()).collect();
    (layout.selected_index(), items)
}

/// Minimal controller recording what the contract asks of it.
struct RecordingLayout {
    distribute_equally: bool,
    selection: SelectionState,
    items: Vec<ItemView>,
    listener: Option<Box<dyn ItemClickListener>>,
    populated: usize,
}

impl RecordingLayout {
    fn new(config: &NavigationConfig) -> Self {
        Self {
            distribute_equally: config.distribute_equally,
            selection: SelectionState::new(),
            items: Vec::new(),
            listener: None,
            populated: 0,
        }
    }
}

impl LayoutController for RecordingLayout {
    fn kind(&self) -> LayoutKind {
        LayoutKind::Fixed
    }

    fn distribute_equally(&self) -> bool {
        self.distribute_equally
    }

    fn populate(&mut self, menu: &MenuModel) {
        self.populated += 1;
        self.selection.reset(menu.entries().iter().map(|e| e.is_enabled()));
    }

    fn selected_index(&self) -> i32 {
        self.selection.selected()
    }

    fn set_selected_index(&mut self, index: i32, animate: bool) -> LayoutResult<()> {
        if self.selection.select(index)? {
            if let Some(listener) = self.listener.as_mut() {
                listener.on_item_click(index, animate);
            }
        }
        Ok(())
    }

    fn set_item_enabled(&mut self, index: i32, enabled: bool) -> LayoutResult<()> {
        self.selection.set_enabled(index, enabled).map(|_| ())
    }

    fn remove_all(&mut self) {
        self.selection.clear();
    }

    fn set_item_click_listener(&mut self, listener: Option<Box<dyn ItemClickListener>>) {
        self.listener = listener;
    }

    fn take_item_click_listener(&mut self) -> Option<Box<dyn ItemClickListener>> {
        self.listener.take()
    }

    fn item_count(&self) -> usize {
        self.selection.count()
    }

    fn item(&self, index: usize) -> Option<&ItemView> {
        self.items.get(index)
    }

    fn is_item_enabled(&self, index: usize) -> Option<bool> {
        self.selection.is_enabled(index)
    }
}

#[test]
fn test_double_sees_distribute_equally() {
    for flag in [true, false] {
        let config = NavigationConfig::default().with_distribute_equally(flag);
        let mut layout = RecordingLayout::new(&config);
        layout.populate(&parse(TWO_ITEMS));
        assert_eq!(layout.distribute_equally(), flag);
        assert_eq!(layout.populated, 1);
        assert_eq!(layout.is_item_enabled(1), Some(false));
    }
}

#[test]
fn test_real_layouts_honor_distribute_equally() {
    for flag in [true, false] {
        let config = NavigationConfig::default().with_distribute_equally(flag);
        for kind in KINDS {
            let mut layout = kind.create(&config);
            layout.populate(&parse(FIVE_ITEMS));
            // fixed at construction, unaffected by population
            assert_eq!(layout.distribute_equally(), flag, "{kind}");
        }
    }
}

#[test]
fn test_selection_contract_for_every_kind() {
    init_tracing();
    for kind in KINDS {
        let (calls, listener) = recorder();
        let mut layout = kind.create(&NavigationConfig::default());
        assert_eq!(layout.selected_index(), NO_SELECTION);
        layout.set_item_click_listener(Some(listener));
        layout.populate(&parse(FIVE_ITEMS));
        assert_eq!(layout.selected_index(), 0, "{kind}");

        layout.set_selected_index(3, true).unwrap();
        layout.set_selected_index(3, true).unwrap();
        layout.set_selected_index(4, false).unwrap();
        assert_eq!(*calls.borrow(), vec![(3, true), (4, false)], "{kind}");
    }
}

#[test]
fn test_out_of_range_never_mutates() {
    for kind in KINDS {
        let (calls, listener) = recorder();
        let mut layout = kind.create(&NavigationConfig::default());
        layout.set_item_click_listener(Some(listener));
        layout.populate(&parse(TWO_ITEMS));
        layout.set_selected_index(1, false).unwrap();
        let before = snapshot(layout.as_ref());

        for index in [-1, 2, 100, i32::MAX, i32::MIN] {
            assert_eq!(
                layout.set_selected_index(index, true),
                Err(LayoutError::IndexOutOfRange { index, count: 2 })
            );
            assert_eq!(
                layout.set_item_enabled(index, true),
                Err(LayoutError::IndexOutOfRange { index, count: 2 })
            );
        }

        assert_eq!(snapshot(layout.as_ref()), before, "{kind}");
        assert_eq!(calls.borrow().len(), 1);
    }
}

#[test]
fn test_enabling_does_not_select_and_disabled_is_selectable() {
    let mut layout = LayoutKind::Fixed.create(&NavigationConfig::default());
    layout.populate(&parse(TWO_ITEMS));
    assert_eq!(layout.is_item_enabled(1), Some(false));

    layout.set_item_enabled(1, true).unwrap();
    assert_eq!(layout.selected_index(), 0);

    layout.set_item_enabled(1, false).unwrap();
    layout.set_selected_index(1, false).unwrap();
    assert_eq!(layout.selected_index(), 1);
    assert!(layout.item(1).unwrap().is_selected());
}

#[test]
fn test_remove_all_then_populate_is_idempotent() {
    let menu = parse(FIVE_ITEMS);
    for kind in KINDS {
        let mut layout = kind.create(&NavigationConfig::default().with_distribute_equally(false));

        layout.remove_all();
        layout.populate(&menu);
        let first = snapshot(layout.as_ref());

        layout.set_selected_index(2, false).unwrap();
        layout.set_item_enabled(4, false).unwrap();

        layout.remove_all();
        layout.populate(&menu);
        assert_eq!(snapshot(layout.as_ref()), first, "{kind}");

        layout.populate(&menu);
        assert_eq!(snapshot(layout.as_ref()), first, "{kind}");
    }
}

#[test]
fn test_remove_all_returns_to_empty() {
    for kind in KINDS {
        let mut layout = kind.create(&NavigationConfig::default());
        layout.populate(&parse(TWO_ITEMS));
        layout.remove_all();
        assert_eq!(layout.selected_index(), NO_SELECTION);
        assert_eq!(layout.item_count(), 0);
        assert!(layout.set_selected_index(0, false).is_err());
    }
}

#[test]
fn test_two_item_scenario_through_facade() {
    init_tracing();
    let (calls, listener) = recorder();
    let mut nav = BottomNavigation::new(NavigationConfig::default());
    nav.set_item_click_listener(Some(listener));
    nav.inflate_menu(&resources(), TWO_ITEMS).unwrap();

    let menu = nav.menu().unwrap();
    assert_eq!(menu.len(), 2);
    assert!(!menu.entries()[1].is_enabled());
    assert_eq!(menu.style().color_inactive.alpha(), 0x7F);

    let controller = nav.controller().unwrap();
    assert_eq!(controller.kind(), LayoutKind::Fixed);
    assert_eq!(controller.item(0).unwrap().tint(), Color::RED);
    assert_eq!(controller.item(1).unwrap().tint(), menu.style().color_disabled);

    nav.set_selected_index(1, true).unwrap();
    assert_eq!(*calls.borrow(), vec![(1, true)]);
}

#[test]
fn test_wrong_root_through_facade() {
    let mut resources = resources();
    resources.insert_menu(ResourceId(9), r#"<list><item android:id="1"/></list>"#);

    let mut nav = BottomNavigation::new(NavigationConfig::default());
    let result = nav.inflate_menu(&resources, ResourceId(9));
    assert!(matches!(result, Err(NavigationError::Parse(_))));
    assert!(nav.menu().is_none());
    assert!(nav.controller().is_none());
}

#[test]
fn test_reinflation_switches_kind_and_keeps_listener() {
    let resources = resources();
    let (calls, listener) = recorder();
    let mut nav = BottomNavigation::new(NavigationConfig::default());
    nav.inflate_menu(&resources, TWO_ITEMS).unwrap();
    nav.set_item_click_listener(Some(listener));

    nav.inflate_menu(&resources, FIVE_ITEMS).unwrap();
    assert_eq!(nav.controller().map(|c| c.kind()), Some(LayoutKind::Shifting));
    assert_eq!(nav.selected_index(), 0);
    let controller = nav.controller().unwrap();
    assert!(controller.item(0).unwrap().is_label_visible());
    assert!(!controller.item(1).unwrap().is_label_visible());

    nav.set_selected_index(4, false).unwrap();

    nav.inflate_menu(&resources, THREE_ITEMS).unwrap();
    assert_eq!(nav.controller().map(|c| c.kind()), Some(LayoutKind::Fixed));
    nav.set_selected_index(2, true).unwrap();

    assert_eq!(*calls.borrow(), vec![(4, false), (2, true)]);
}

#[test]
fn test_tablet_mode_always_uses_rail() {
    let resources = resources();
    let mut nav = BottomNavigation::new(NavigationConfig::default().with_tablet_mode(true));
    for id in [TWO_ITEMS, FIVE_ITEMS] {
        nav.inflate_menu(&resources, id).unwrap();
        let controller = nav.controller_mut().unwrap();
        assert_eq!(controller.kind(), LayoutKind::Tablet);
        assert!(!controller.item(0).unwrap().is_label_visible());
    }
}

#[test]
fn test_config_file_drives_facade() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "shifting_threshold = 5").unwrap();
    let config = NavigationConfig::load(file.path()).unwrap();

    let mut nav = BottomNavigation::new(config);
    nav.inflate_menu(&resources(), FIVE_ITEMS).unwrap();
    assert_eq!(nav.controller().map(|c| c.kind()), Some(LayoutKind::Fixed));
}
