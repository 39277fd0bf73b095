//! Selection and enablement bookkeeping shared by every layout.

use crate::error::{LayoutError, LayoutResult};

/// Selected index reported when there is nothing to select.
pub const NO_SELECTION: i32 = -1;

/// Which entry is selected, and which entries are enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    /// Currently selected index (-1 if no entries).
    selected: i32,
    /// Per-entry enabled flags; its length is the entry count.
    enabled: Vec<bool>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected: NO_SELECTION,
            enabled: Vec::new(),
        }
    }
}

impl SelectionState {
    /// Create an empty state with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all entries. Selects the first one, if any.
    pub fn reset(&mut self, enabled: impl IntoIterator<Item = bool>) {
        self.enabled = enabled.into_iter().collect();
        self.selected = if self.enabled.is_empty() { NO_SELECTION } else { 0 };
    }

    /// Forgets all entries.
    pub fn clear(&mut self) {
        self.enabled.clear();
        self.selected = NO_SELECTION;
    }

    /// Number of entries.
    pub fn count(&self) -> usize {
        self.enabled.len()
    }

    /// Selected index, or [`NO_SELECTION`].
    pub fn selected(&self) -> i32 {
        self.selected
    }

    /// Returns true if `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected >= 0 && self.selected as usize == index
    }

    /// Validates `index` against the entry count.
    pub fn check(&self, index: i32) -> LayoutResult<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.enabled.len())
            .ok_or(LayoutError::IndexOutOfRange {
                index,
                count: self.enabled.len(),
            })
    }

    /// Selects `index`. Returns whether the selection changed.
    ///
    /// Disabled entries can be selected.
    pub fn select(&mut self, index: i32) -> LayoutResult<bool> {
        self.check(index)?;
        if self.selected == index {
            return Ok(false);
        }
        self.selected = index;
        Ok(true)
    }

    /// Enables or disables `index`. Returns whether the flag changed.
    pub fn set_enabled(&mut self, index: i32, enabled: bool) -> LayoutResult<bool> {
        let i = self.check(index)?;
        let changed = self.enabled[i] != enabled;
        self.enabled[i] = enabled;
        Ok(changed)
    }

    /// Enabled flag of `index`, `None` when out of range.
    pub fn is_enabled(&self, index: usize) -> Option<bool> {
        self.enabled.get(index).copied()
    }
}
