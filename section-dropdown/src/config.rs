//! Construction-time options of a dropdown.

use std::time::Duration;

use crate::item::{Item, Section};
use crate::placement::ListPosition;
use crate::schedule::DEFAULT_SCROLL_DELAY;
use crate::style::{Color, Style, StyleOverrides};
use crate::trigger::{DEFAULT_PLACEHOLDER, TextRun};

/// Default overlay height in rows.
pub const DEFAULT_OVERLAY_HEIGHT: u16 = 10;

/// Default highlight behind the selected row.
pub const DEFAULT_SELECTED_BACKGROUND: Color = Color::rgb(0xCC, 0xCC, 0xCC);

pub type SelectedSink<V> = Box<dyn FnMut(&Item<V>)>;
pub type AccessoryFn = Box<dyn Fn() -> TextRun>;

/// Options for a [`SectionDropdown`](crate::SectionDropdown).
///
/// Only the section data is required.
///
/// # Example
///
/// ```ignore
/// let config = DropdownConfig::new(sections)
///     .placeholder("Pick one")
///     .list_position(ListPosition::Top)
///     .on_selected(|item| log::info!("picked {}", item.label));
/// ```
pub struct DropdownConfig<V> {
    /// Layout id the trigger is measured by.
    pub id: String,
    pub data: Vec<Section<V>>,
    pub default_value: Option<Item<V>>,
    pub on_selected: Option<SelectedSink<V>>,
    pub accessory_right: Option<AccessoryFn>,
    pub placeholder: String,
    pub list_position: ListPosition,
    pub styles: StyleOverrides,
    pub selected_item_background_color: Color,
    /// Rows reserved for the overlay, whatever the content height.
    pub overlay_height: u16,
    /// Settle time before scrolling to the selected row.
    pub scroll_delay: Duration,
}

impl<V> DropdownConfig<V> {
    pub fn new(data: Vec<Section<V>>) -> Self {
        Self {
            id: "section-dropdown".to_string(),
            data,
            default_value: None,
            on_selected: None,
            accessory_right: None,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            list_position: ListPosition::default(),
            styles: StyleOverrides::default(),
            selected_item_background_color: DEFAULT_SELECTED_BACKGROUND,
            overlay_height: DEFAULT_OVERLAY_HEIGHT,
            scroll_delay: DEFAULT_SCROLL_DELAY,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn default_value(mut self, item: Item<V>) -> Self {
        self.default_value = Some(item);
        self
    }

    pub fn on_selected(mut self, sink: impl FnMut(&Item<V>) + 'static) -> Self {
        self.on_selected = Some(Box::new(sink));
        self
    }

    pub fn accessory_right(mut self, accessory: impl Fn() -> TextRun + 'static) -> Self {
        self.accessory_right = Some(Box::new(accessory));
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn list_position(mut self, position: ListPosition) -> Self {
        self.list_position = position;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.styles.trigger = Some(style);
        self
    }

    pub fn selected_text_style(mut self, style: Style) -> Self {
        self.styles.selected_text = Some(style);
        self
    }

    pub fn item_style(mut self, style: Style) -> Self {
        self.styles.item = Some(style);
        self
    }

    pub fn item_text_style(mut self, style: Style) -> Self {
        self.styles.item_text = Some(style);
        self
    }

    pub fn item_header_style(mut self, style: Style) -> Self {
        self.styles.section_header = Some(style);
        self
    }

    pub fn item_header_text_style(mut self, style: Style) -> Self {
        self.styles.section_header_text = Some(style);
        self
    }

    pub fn selected_item_background_color(mut self, color: Color) -> Self {
        self.selected_item_background_color = color;
        self
    }

    pub fn overlay_height(mut self, rows: u16) -> Self {
        self.overlay_height = rows;
        self
    }

    pub fn scroll_delay(mut self, delay: Duration) -> Self {
        self.scroll_delay = delay;
        self
    }
}

impl<V> std::fmt::Debug for DropdownConfig<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropdownConfig")
            .field("id", &self.id)
            .field("sections", &self.data.len())
            .field("placeholder", &self.placeholder)
            .field("list_position", &self.list_position)
            .field("overlay_height", &self.overlay_height)
            .field("scroll_delay", &self.scroll_delay)
            .finish_non_exhaustive()
    }
}
