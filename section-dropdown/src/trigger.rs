//! Trigger renderer: the always-visible control.

use crate::buffer::Buffer;
use crate::item::Item;
use crate::rect::Rect;
use crate::style::{DropdownStyles, Style};
use crate::text::{display_width, truncate_to_width};

/// Default text shown while nothing is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Select item";

/// A run of styled text, used for the trailing accessory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextRun {
    pub text: String,
    pub style: Style,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// What the trigger shows.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerView {
    pub text: String,
    pub is_placeholder: bool,
    pub accessory: Option<TextRun>,
}

impl TriggerView {
    pub fn new<V>(selected: Option<&Item<V>>, placeholder: &str, accessory: Option<TextRun>) -> Self {
        match selected {
            Some(item) => Self {
                text: item.label.clone(),
                is_placeholder: false,
                accessory,
            },
            None => Self {
                text: placeholder.to_string(),
                is_placeholder: true,
                accessory,
            },
        }
    }

    /// Draw the trigger box into `rect`: label on the left, accessory
    /// right-aligned.
    pub fn paint(&self, rect: Rect, styles: &DropdownStyles, buf: &mut Buffer) {
        let style = &styles.trigger;
        buf.fill(rect, style);

        let border = style.border.unwrap_or_default();
        if let Some(glyphs) = border.glyphs() {
            paint_border(rect, glyphs, style, buf);
        }

        let b = border.size();
        let pad = style.padding.unwrap_or(0);
        let inner = rect.shrink(b, b.saturating_add(pad), b, b.saturating_add(pad));
        if inner.is_empty() {
            return;
        }
        // Single text line, vertically centred.
        let y = inner.y + (inner.height - 1) / 2;

        let accessory_width = self
            .accessory
            .as_ref()
            .map(|a| u16::try_from(display_width(&a.text)).unwrap_or(u16::MAX))
            .unwrap_or(0);
        let gap = if accessory_width > 0 { 1 } else { 0 };
        let label_room = inner.width.saturating_sub(accessory_width.saturating_add(gap));

        let text_style = style.merge(&styles.selected_text);
        let label = truncate_to_width(&self.text, label_room as usize);
        buf.put_str(inner.x, y, inner.x + label_room, &label, &text_style);

        if let Some(accessory) = &self.accessory
            && accessory_width <= inner.width
        {
            let x = inner.right() - accessory_width;
            buf.put_str(x, y, inner.right(), &accessory.text, &style.merge(&accessory.style));
        }
    }
}

fn paint_border(rect: Rect, glyphs: [char; 6], style: &Style, buf: &mut Buffer) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let [tl, tr, bl, br, h, v] = glyphs;
    let edge = Style {
        foreground: style.border_color.or(style.foreground),
        ..*style
    };
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    let horizontal: String = std::iter::repeat_n(h, (rect.width - 2) as usize).collect();
    buf.put_str(rect.x, rect.y, rect.right(), &format!("{tl}{horizontal}{tr}"), &edge);
    buf.put_str(rect.x, bottom, rect.right(), &format!("{bl}{horizontal}{br}"), &edge);
    for y in rect.y + 1..bottom {
        buf.put_str(rect.x, y, rect.x + 1, &v.to_string(), &edge);
        buf.put_str(right, y, right + 1, &v.to_string(), &edge);
    }
}
