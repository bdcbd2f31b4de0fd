//! Section and item records supplied by the caller.

use std::collections::HashMap;

use crate::error::DropdownError;

/// A selectable entry.
///
/// Two items refer to the same entry when their `group_id` and `value` are
/// equal; the label takes no part in identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Item<V> {
    pub label: String,
    pub value: V,
    pub group_id: String,
}

impl<V: PartialEq> Item<V> {
    pub fn new(label: impl Into<String>, value: V, group_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            group_id: group_id.into(),
        }
    }

    /// Selection identity: same group and same value.
    pub fn same_as(&self, other: &Item<V>) -> bool {
        self.group_id == other.group_id && self.value == other.value
    }
}

/// A titled group of items.
#[derive(Debug, Clone, PartialEq)]
pub struct Section<V> {
    pub group_id: String,
    pub title: String,
    pub items: Vec<Item<V>>,
}

impl<V> Section<V> {
    pub fn new(group_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Append an item. The item keeps whatever group id it was built with.
    pub fn item(mut self, item: Item<V>) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = Item<V>>) -> Self {
        self.items.extend(items);
        self
    }
}

/// Check that every section carries a distinct group id.
///
/// Reports the first collision found, in section order.
pub fn validate_sections<V>(sections: &[Section<V>]) -> Result<(), DropdownError> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, section) in sections.iter().enumerate() {
        if let Some(&first) = seen.get(section.group_id.as_str()) {
            return Err(DropdownError::DuplicateGroupId {
                group_id: section.group_id.clone(),
                first,
                second: index,
            });
        }
        seen.insert(&section.group_id, index);
    }
    Ok(())
}

/// Find the section owning `group_id`, by position.
pub fn section_index<V>(sections: &[Section<V>], group_id: &str) -> Option<usize> {
    sections.iter().position(|s| s.group_id == group_id)
}
