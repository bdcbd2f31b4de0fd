//! Overlay placement relative to the trigger.

use crate::item::Section;
use crate::measure::TriggerGeometry;
use crate::rect::SignedRect;

/// Where the overlay opens relative to its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPosition {
    /// Above the trigger, with sections in reverse order.
    Top,
    #[default]
    Bottom,
}

/// Top-left corner and width of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub width: i32,
}

impl Placement {
    /// Full overlay area, always `overlay_height` rows tall.
    pub fn rect(&self, overlay_height: u16) -> SignedRect {
        SignedRect::new(self.x, self.y, self.width, i32::from(overlay_height))
    }
}

/// Compute the overlay position from the trigger geometry.
///
/// The overlay always reserves `overlay_height` rows and is never clamped to
/// the screen.
pub fn compute_placement(
    geometry: TriggerGeometry,
    position: ListPosition,
    overlay_height: u16,
) -> Placement {
    let y = match position {
        ListPosition::Bottom => geometry.y + geometry.height,
        ListPosition::Top => geometry.y - i32::from(overlay_height) - geometry.height,
    };
    Placement {
        x: geometry.x,
        y,
        width: geometry.width,
    }
}

/// Sections in rendering order: reversed when opening upwards so the section
/// nearest the trigger stays adjacent to it.
pub fn ordered_sections<V: Clone>(sections: &[Section<V>], position: ListPosition) -> Vec<Section<V>> {
    match position {
        ListPosition::Bottom => sections.to_vec(),
        ListPosition::Top => sections.iter().rev().cloned().collect(),
    }
}
