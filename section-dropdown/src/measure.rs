//! Trigger measurement.
//!
//! The widget never lays itself out. Whoever places the trigger on screen
//! records its rect in a [`LayoutHost`], and the measurer reads it back
//! before every open and whenever the host reports a layout change.

use std::collections::HashMap;

use crate::rect::{Rect, SignedRect};

/// Absolute on-screen box of the trigger, in viewport coordinates.
pub type TriggerGeometry = SignedRect;

/// Anything that can report where an element was laid out.
pub trait LayoutHost {
    /// The absolute rect of the element with `id`, or `None` if it has not
    /// been laid out yet.
    fn measure_in_window(&self, id: &str) -> Option<Rect>;
}

/// Element id to rect map, filled during layout.
#[derive(Debug, Clone, Default)]
pub struct LayoutMap {
    rects: HashMap<String, Rect>,
}

impl LayoutMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    pub fn get(&self, id: &str) -> Option<&Rect> {
        self.rects.get(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Rect> {
        self.rects.remove(id)
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }
}

impl LayoutHost for LayoutMap {
    fn measure_in_window(&self, id: &str) -> Option<Rect> {
        self.get(id).copied()
    }
}

/// Keeps the trigger geometry fresh.
#[derive(Debug, Clone, Default)]
pub struct TriggerMeasurer {
    id: String,
    geometry: TriggerGeometry,
}

impl TriggerMeasurer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            geometry: TriggerGeometry::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The last measured geometry.
    pub fn geometry(&self) -> TriggerGeometry {
        self.geometry
    }

    /// Query the host for the trigger's box.
    ///
    /// A trigger that has not been laid out measures as all zeros, which puts
    /// the overlay at the origin.
    pub fn measure(&mut self, host: &dyn LayoutHost) -> TriggerGeometry {
        self.geometry = match host.measure_in_window(&self.id) {
            Some(rect) => rect.into(),
            None => {
                log::debug!("TriggerMeasurer: '{}' not laid out yet", self.id);
                TriggerGeometry::default()
            }
        };
        self.geometry
    }

    /// Layout-changed notification. Returns true if the geometry moved.
    pub fn on_layout(&mut self, host: &dyn LayoutHost) -> bool {
        let previous = self.geometry;
        self.measure(host) != previous
    }

    /// Record a rect directly, for hosts that paint the trigger themselves.
    pub(crate) fn record(&mut self, rect: Rect) -> bool {
        let geometry: TriggerGeometry = rect.into();
        let changed = geometry != self.geometry;
        self.geometry = geometry;
        changed
    }
}
