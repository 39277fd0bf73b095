//! Tablet arrangement: a vertical rail of icons.

use super::{Arrangement, ItemView, LayoutKind};

/// Icons only, stacked vertically with equal shares.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tablet;

impl Arrangement for Tablet {
    const KIND: LayoutKind = LayoutKind::Tablet;

    fn arrange(&self, items: &mut [ItemView], _selected: i32, _distribute_equally: bool) {
        for item in items.iter_mut() {
            item.label_visible = false;
            item.weight = 1.0;
        }
    }
}
