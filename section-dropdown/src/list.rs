//! Sectioned list renderer.
//!
//! Flattens sections into header and item rows, keeps a scroll offset over
//! a fixed-height viewport and paints the visible window.

use std::collections::HashSet;

use crate::buffer::Buffer;
use crate::error::DropdownError;
use crate::item::{Item, Section, section_index};
use crate::rect::{Rect, SignedRect};
use crate::style::{Color, DropdownStyles};
use crate::text::truncate_to_width;

/// Row key: item position within its section followed by the label.
pub fn key_for<V>(item: &Item<V>, index: usize) -> String {
    format!("{}{}", index, item.label)
}

/// One line of the list.
#[derive(Debug, Clone, PartialEq)]
pub enum Row<V> {
    Header {
        section_index: usize,
        title: String,
    },
    Item {
        section_index: usize,
        item_index: usize,
        key: String,
        item: Item<V>,
    },
}

/// A section and item position within the rendered sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTarget {
    pub section_index: usize,
    pub item_index: usize,
}

#[derive(Debug, Clone)]
pub struct SectionedList<V> {
    sections: Vec<Section<V>>,
    rows: Vec<Row<V>>,
    offset: usize,
    viewport: usize,
}

impl<V: Clone + PartialEq> SectionedList<V> {
    /// Build rows for `sections`, already in rendering order.
    pub fn new(sections: Vec<Section<V>>, viewport: u16) -> Self {
        let mut rows = Vec::new();
        let mut keys = HashSet::new();
        let mut duplicate_keys = 0;

        for (section_index, section) in sections.iter().enumerate() {
            rows.push(Row::Header {
                section_index,
                title: section.title.clone(),
            });
            for (item_index, item) in section.items.iter().enumerate() {
                let key = key_for(item, item_index);
                if !keys.insert(key.clone()) {
                    duplicate_keys += 1;
                }
                rows.push(Row::Item {
                    section_index,
                    item_index,
                    key,
                    item: item.clone(),
                });
            }
        }

        if duplicate_keys > 0 {
            log::debug!("SectionedList: {} rows share a key with an earlier row", duplicate_keys);
        }

        Self {
            sections,
            rows,
            offset: 0,
            viewport: viewport as usize,
        }
    }

    pub fn sections(&self) -> &[Section<V>] {
        &self.sections
    }

    pub fn rows(&self) -> &[Row<V>] {
        &self.rows
    }

    /// Index of the first visible row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    pub fn max_offset(&self) -> usize {
        self.rows.len().saturating_sub(self.viewport)
    }

    /// The row shown on `line` of the viewport.
    pub fn row_at(&self, line: usize) -> Option<&Row<V>> {
        if line >= self.viewport {
            return None;
        }
        self.rows.get(self.offset + line)
    }

    /// Find the section carrying `group_id` among the rendered sections.
    pub fn locate(&self, group_id: &str, item_index: usize) -> Result<ScrollTarget, DropdownError> {
        section_index(&self.sections, group_id)
            .map(|section_index| ScrollTarget {
                section_index,
                item_index,
            })
            .ok_or_else(|| DropdownError::SectionNotFound(group_id.to_string()))
    }

    /// Position of the selected item, if it is rendered.
    pub fn target_of(&self, selected: &Item<V>) -> Option<ScrollTarget> {
        self.rows.iter().find_map(|row| match row {
            Row::Item {
                section_index,
                item_index,
                item,
                ..
            } if item.same_as(selected) => Some(ScrollTarget {
                section_index: *section_index,
                item_index: *item_index,
            }),
            _ => None,
        })
    }

    /// Flattened row index of `target`.
    pub fn row_of(&self, target: ScrollTarget) -> Option<usize> {
        let section = self.sections.get(target.section_index)?;
        if target.item_index >= section.items.len() {
            return None;
        }
        let before: usize = self.sections[..target.section_index]
            .iter()
            .map(|s| s.items.len() + 1)
            .sum();
        Some(before + 1 + target.item_index)
    }

    /// Bring `target` to the top of the viewport, as far as the content
    /// allows. Returns the new offset.
    pub fn scroll_to(&mut self, target: ScrollTarget) -> Result<usize, DropdownError> {
        let row = self.row_of(target).ok_or_else(|| {
            let group_id = self
                .sections
                .get(target.section_index)
                .map(|s| s.group_id.clone())
                .unwrap_or_default();
            DropdownError::SectionNotFound(group_id)
        })?;
        self.offset = row.min(self.max_offset());
        Ok(self.offset)
    }

    /// Scroll by `delta` rows. Returns true if the offset changed.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let max = self.max_offset() as i64;
        let next = (self.offset as i64 + i64::from(delta)).clamp(0, max) as usize;
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    /// Paint the visible rows into `area`. Lines that fall off the buffer
    /// are skipped; the area itself is never moved.
    pub fn paint(
        &self,
        area: SignedRect,
        styles: &DropdownStyles,
        highlight: Color,
        selected: Option<&Item<V>>,
        buf: &mut Buffer,
    ) {
        let x0 = area.x.clamp(0, i32::from(buf.width())) as u16;
        let x1 = area.right().clamp(0, i32::from(buf.width())) as u16;
        if x1 <= x0 {
            return;
        }

        for line in 0..self.viewport {
            let Some(y) = area.screen_row(line as i32) else {
                continue;
            };
            if y >= buf.height() {
                break;
            }
            let line_rect = Rect::new(x0, y, x1 - x0, 1);
            buf.fill(line_rect, &styles.overlay);

            let Some(row) = self.row_at(line) else {
                continue;
            };

            let (row_style, text_style, label) = match row {
                Row::Header { title, .. } => {
                    let row_style = styles.overlay.merge(&styles.section_header);
                    let text_style = row_style.merge(&styles.section_header_text);
                    (row_style, text_style, title.as_str())
                }
                Row::Item { item, .. } => {
                    let mut row_style = styles.overlay.merge(&styles.item);
                    if selected.is_some_and(|s| s.same_as(item)) {
                        row_style.background = Some(highlight);
                    }
                    let text_style = row_style.merge(&styles.item_text);
                    (row_style, text_style, item.label.as_str())
                }
            };

            buf.fill(line_rect, &row_style);
            let pad = row_style.padding.unwrap_or(0);
            let start = x0.saturating_add(pad);
            let room = x1.saturating_sub(pad).saturating_sub(start) as usize;
            buf.put_str(start, y, x1, &truncate_to_width(label, room), &text_style);
        }
    }
}
