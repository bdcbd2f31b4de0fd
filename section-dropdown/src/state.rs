//! Selection state holder.
//!
//! Owns the selected item and whether the overlay is open. Geometry is not
//! tracked here; the widget measures the trigger before calling [`open`].
//!
//! [`open`]: SelectionState::open

use crate::item::Item;

/// Current selection and overlay visibility of one dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState<V> {
    selected: Option<Item<V>>,
    is_open: bool,
}

impl<V> Default for SelectionState<V> {
    fn default() -> Self {
        Self {
            selected: None,
            is_open: false,
        }
    }
}

impl<V: Clone + PartialEq> SelectionState<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `default` already selected.
    pub fn with_default(default: Option<Item<V>>) -> Self {
        Self {
            selected: default,
            is_open: false,
        }
    }

    pub fn selected(&self) -> Option<&Item<V>> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether `item` is the current selection by group and value.
    pub fn is_selected(&self, item: &Item<V>) -> bool {
        self.selected.as_ref().is_some_and(|s| s.same_as(item))
    }

    /// Open the overlay. Returns false if it was already open.
    pub fn open(&mut self) -> bool {
        if self.is_open {
            return false;
        }
        self.is_open = true;
        log::debug!("SelectionState: open");
        true
    }

    /// Close the overlay. Returns false if it was already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open {
            return false;
        }
        self.is_open = false;
        log::debug!("SelectionState: close");
        true
    }

    /// Flip between open and closed. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
        self.is_open
    }

    /// Make `item` the selection, close the overlay and hand the item to
    /// `sink`.
    ///
    /// The item is not checked against any section list.
    pub fn select(&mut self, item: Item<V>, sink: impl FnOnce(&Item<V>)) {
        sink(&item);
        self.selected = Some(item);
        self.is_open = false;
    }

    /// Re-synchronise with a caller-supplied default.
    ///
    /// `Some` overwrites the selection every time it is applied; `None`
    /// leaves the selection alone.
    pub fn apply_default(&mut self, default: Option<Item<V>>) {
        if let Some(item) = default {
            self.selected = Some(item);
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}
