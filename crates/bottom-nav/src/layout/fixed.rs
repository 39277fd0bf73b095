//! Fixed arrangement: every item shows its label.

use super::{Arrangement, ItemView, LayoutKind};

/// Every label visible.
///
/// When items are not distributed equally, each item's share follows the
/// length of its title so long labels get more room.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fixed;

impl Arrangement for Fixed {
    const KIND: LayoutKind = LayoutKind::Fixed;

    fn arrange(&self, items: &mut [ItemView], _selected: i32, distribute_equally: bool) {
        for item in items.iter_mut() {
            item.label_visible = true;
            item.weight = if distribute_equally {
                1.0
            } else {
                item.title().chars().count().max(1) as f32
            };
        }
    }
}
