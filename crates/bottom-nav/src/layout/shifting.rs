//! Shifting arrangement: the selected item grows and shows its label.

use super::{Arrangement, ItemView, LayoutKind};

/// Share of the selected item relative to the others.
const SELECTED_WEIGHT: f32 = 1.5;

/// Only the selected item shows its label.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shifting;

impl Arrangement for Shifting {
    const KIND: LayoutKind = LayoutKind::Shifting;

    fn arrange(&self, items: &mut [ItemView], selected: i32, distribute_equally: bool) {
        for (index, item) in items.iter_mut().enumerate() {
            let is_selected = selected >= 0 && index == selected as usize;
            item.label_visible = is_selected;
            item.weight = if is_selected && !distribute_equally {
                SELECTED_WEIGHT
            } else {
                1.0
            };
        }
    }
}
