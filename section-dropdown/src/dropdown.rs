//! The sectioned dropdown widget.

use std::time::Duration;

use crate::buffer::Buffer;
use crate::config::{AccessoryFn, DropdownConfig, SelectedSink};
use crate::event::{Event, Key, MouseButton};
use crate::item::{Item, Section, validate_sections};
use crate::list::{Row, SectionedList};
use crate::measure::{LayoutHost, LayoutMap, TriggerGeometry, TriggerMeasurer};
use crate::placement::{ListPosition, Placement, compute_placement, ordered_sections};
use crate::rect::{Rect, SignedRect};
use crate::schedule::{ScrollRequest, ScrollScheduler};
use crate::state::SelectionState;
use crate::style::{Color, DropdownStyles};
use crate::trigger::TriggerView;

/// A trigger that opens a scrollable, sectioned list of items.
///
/// The widget owns its selection, trigger geometry, list scroll offset and
/// the pending scroll-to-selected task. Dropping it cancels that task.
///
/// # Example
///
/// ```ignore
/// let mut dropdown = SectionDropdown::new(DropdownConfig::new(sections));
///
/// // each frame
/// dropdown.apply_pending_scrolls();
/// dropdown.paint_trigger(Rect::new(2, 2, 20, 3), &mut buf);
/// dropdown.paint_overlay(&mut buf);
///
/// // each input event
/// dropdown.handle_event(&event);
/// ```
pub struct SectionDropdown<V> {
    data: Vec<Section<V>>,
    placeholder: String,
    list_position: ListPosition,
    styles: DropdownStyles,
    highlight: Color,
    overlay_height: u16,
    scroll_delay: Duration,
    on_selected: Option<SelectedSink<V>>,
    accessory_right: Option<AccessoryFn>,

    state: SelectionState<V>,
    measurer: TriggerMeasurer,
    /// Rects recorded while painting, for measuring without an outside host.
    layout: LayoutMap,
    /// Built on open, dropped on close.
    list: Option<SectionedList<V>>,
    scheduler: ScrollScheduler,
    focused: bool,
}

impl<V: Clone + PartialEq> SectionDropdown<V> {
    pub fn new(config: DropdownConfig<V>) -> Self {
        if let Err(e) = validate_sections(&config.data) {
            log::warn!("SectionDropdown '{}': {}", config.id, e);
        }

        log::debug!(
            "SectionDropdown::new id={} sections={} position={:?}",
            config.id,
            config.data.len(),
            config.list_position
        );

        Self {
            styles: DropdownStyles::default().merged(&config.styles),
            data: config.data,
            placeholder: config.placeholder,
            list_position: config.list_position,
            highlight: config.selected_item_background_color,
            overlay_height: config.overlay_height,
            scroll_delay: config.scroll_delay,
            on_selected: config.on_selected,
            accessory_right: config.accessory_right,
            state: SelectionState::with_default(config.default_value),
            measurer: TriggerMeasurer::new(config.id),
            layout: LayoutMap::new(),
            list: None,
            scheduler: ScrollScheduler::new(),
            focused: false,
        }
    }

    // -------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------

    pub fn id(&self) -> &str {
        self.measurer.id()
    }

    pub fn data(&self) -> &[Section<V>] {
        &self.data
    }

    pub fn selected(&self) -> Option<&Item<V>> {
        self.state.selected()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn styles(&self) -> &DropdownStyles {
        &self.styles
    }

    pub fn geometry(&self) -> TriggerGeometry {
        self.measurer.geometry()
    }

    /// The open list, if any.
    pub fn list(&self) -> Option<&SectionedList<V>> {
        self.list.as_ref()
    }

    pub fn trigger_view(&self) -> TriggerView {
        let accessory = self.accessory_right.as_ref().map(|f| f());
        TriggerView::new(self.state.selected(), &self.placeholder, accessory)
    }

    /// Selected label, or the placeholder.
    pub fn trigger_text(&self) -> String {
        self.trigger_view().text
    }

    pub fn placement(&self) -> Placement {
        compute_placement(self.measurer.geometry(), self.list_position, self.overlay_height)
    }

    pub fn overlay_rect(&self) -> SignedRect {
        self.placement().rect(self.overlay_height)
    }

    /// Group ids in the order the list renders them.
    pub fn rendered_group_ids(&self) -> Vec<String> {
        match &self.list {
            Some(list) => list.sections().iter().map(|s| s.group_id.clone()).collect(),
            None => ordered_sections(&self.data, self.list_position)
                .into_iter()
                .map(|s| s.group_id)
                .collect(),
        }
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.scheduler.has_pending()
    }

    // -------------------------------------------------------------------------
    // Data and defaults
    // -------------------------------------------------------------------------

    /// Replace the sections. An open list is rebuilt from the new data.
    pub fn set_data(&mut self, data: Vec<Section<V>>) {
        if let Err(e) = validate_sections(&data) {
            log::warn!("SectionDropdown '{}': {}", self.id(), e);
        }
        self.data = data;
        if self.state.is_open() {
            self.build_list();
        }
    }

    /// Re-apply the caller's default. `Some` always overwrites the current
    /// selection; an open list then scrolls to it after the delay.
    pub fn set_default_value(&mut self, default: Option<Item<V>>) {
        let previous = self.state.selected().cloned();
        self.state.apply_default(default);
        if self.list.is_some() && self.state.selected() != previous.as_ref() {
            self.schedule_scroll_to_selected();
        }
    }

    pub fn clear_selection(&mut self) {
        self.state.clear();
    }

    /// Layout-changed notification from a host that lays the trigger out
    /// itself. Returns true if the trigger moved.
    pub fn on_layout(&mut self, host: &dyn LayoutHost) -> bool {
        let moved = self.measurer.on_layout(host);
        match host.measure_in_window(self.measurer.id()) {
            Some(rect) => {
                self.layout.insert(self.measurer.id().to_string(), rect);
            }
            None => {
                self.layout.remove(self.measurer.id());
            }
        }
        moved
    }

    // -------------------------------------------------------------------------
    // Open / close / select
    // -------------------------------------------------------------------------

    /// Measure the trigger through `host`, then open.
    pub fn open(&mut self, host: &dyn LayoutHost) {
        if self.state.is_open() {
            return;
        }
        self.measurer.measure(host);
        self.state.open();
        self.build_list();
        log::debug!(
            "SectionDropdown '{}' open at {:?}",
            self.id(),
            self.placement()
        );
    }

    pub fn close(&mut self) {
        if self.state.close() {
            self.list = None;
            self.scheduler.cancel();
        }
    }

    /// Close when open, otherwise measure and open.
    pub fn toggle(&mut self, host: &dyn LayoutHost) {
        if self.state.is_open() {
            self.close();
        } else {
            self.open(host);
        }
    }

    /// Open or close using the rect recorded by the last [`paint_trigger`].
    ///
    /// [`paint_trigger`]: Self::paint_trigger
    pub fn activate(&mut self) {
        let layout = std::mem::take(&mut self.layout);
        self.toggle(&layout);
        self.layout = layout;
    }

    /// Select `item`, close the overlay and notify the sink.
    pub fn select(&mut self, item: Item<V>) {
        log::debug!("SectionDropdown '{}' selected '{}'", self.id(), item.label);
        let sink = &mut self.on_selected;
        self.state.select(item, |item| {
            if let Some(sink) = sink.as_mut() {
                sink(item);
            }
        });
        self.list = None;
        self.scheduler.cancel();
    }

    fn build_list(&mut self) {
        let sections = ordered_sections(&self.data, self.list_position);
        self.list = Some(SectionedList::new(sections, self.overlay_height));
        self.schedule_scroll_to_selected();
    }

    /// Schedule a scroll to the selected row, if the open list renders it.
    fn schedule_scroll_to_selected(&mut self) {
        let request = self.list.as_ref().and_then(|list| {
            let target = list.target_of(self.state.selected()?)?;
            Some(ScrollRequest {
                group_id: list.sections()[target.section_index].group_id.clone(),
                item_index: target.item_index,
            })
        });

        if let Some(request) = request
            && let Err(e) = self.scheduler.schedule(request, self.scroll_delay)
        {
            log::warn!("SectionDropdown '{}': scroll to selected skipped: {}", self.id(), e);
        }
    }

    // -------------------------------------------------------------------------
    // Scroll-to-selected
    // -------------------------------------------------------------------------

    /// Apply every scroll request whose delay has elapsed. Returns true if
    /// the list moved.
    pub fn apply_pending_scrolls(&mut self) -> bool {
        let mut moved = false;
        while let Some(request) = self.scheduler.try_recv() {
            moved |= self.apply_scroll(request);
        }
        moved
    }

    /// Wait for the next scroll request to fire. Pair with [`apply_scroll`].
    ///
    /// [`apply_scroll`]: Self::apply_scroll
    pub async fn next_scroll(&mut self) -> Option<ScrollRequest> {
        self.scheduler.recv().await
    }

    /// Scroll the open list to `request`. A closed list or a section that
    /// has disappeared since scheduling is skipped.
    pub fn apply_scroll(&mut self, request: ScrollRequest) -> bool {
        let Some(list) = self.list.as_mut() else {
            log::debug!("SectionDropdown: scroll request after close ignored");
            return false;
        };
        let before = list.offset();
        match list
            .locate(&request.group_id, request.item_index)
            .and_then(|target| list.scroll_to(target))
        {
            Ok(offset) => offset != before,
            Err(e) => {
                log::warn!("SectionDropdown: scroll to selected failed: {}", e);
                false
            }
        }
    }

    // -------------------------------------------------------------------------
    // Input
    // -------------------------------------------------------------------------

    /// Route an input event. Returns true if the dropdown consumed it.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match *event {
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => self.handle_click(x, y),
            Event::Click { .. } => false,
            Event::Scroll { x, y, delta } => {
                if !self.overlay_rect().contains(i32::from(x), i32::from(y)) {
                    return false;
                }
                match self.list.as_mut() {
                    Some(list) => {
                        list.scroll_by(i32::from(delta));
                        true
                    }
                    None => false,
                }
            }
            Event::Key { key, .. } => self.handle_key(key),
            Event::Resize { .. } => false,
        }
    }

    fn handle_click(&mut self, x: u16, y: u16) -> bool {
        let on_trigger = self
            .layout
            .get(self.measurer.id())
            .is_some_and(|r| r.contains(x, y));

        if !self.state.is_open() {
            self.focused = on_trigger;
            if on_trigger {
                self.activate();
            }
            return on_trigger;
        }

        let overlay = self.overlay_rect();
        let (x, y) = (i32::from(x), i32::from(y));
        if !overlay.contains(x, y) {
            // Backdrop, the trigger included.
            self.close();
            return true;
        }

        let line = (y - overlay.y) as usize;
        let picked = self.list.as_ref().and_then(|list| match list.row_at(line) {
            Some(Row::Item { item, .. }) => Some(item.clone()),
            // Headers take the tap and do nothing.
            Some(Row::Header { .. }) | None => None,
        });
        if let Some(item) = picked {
            self.select(item);
        }
        true
    }

    fn handle_key(&mut self, key: Key) -> bool {
        if self.state.is_open() {
            match key {
                Key::Escape => {
                    self.close();
                    return true;
                }
                Key::Enter | Key::Char(' ') if self.focused => {
                    self.close();
                    return true;
                }
                _ => {}
            }

            let page = i32::from(self.overlay_height.max(1));
            let delta = match key {
                Key::Up => -1,
                Key::Down => 1,
                Key::PageUp => -page,
                Key::PageDown => page,
                _ => return false,
            };
            if let Some(list) = self.list.as_mut() {
                list.scroll_by(delta);
            }
            return true;
        }

        match key {
            Key::Enter | Key::Char(' ') if self.focused => {
                self.activate();
                true
            }
            _ => false,
        }
    }

    // -------------------------------------------------------------------------
    // Painting
    // -------------------------------------------------------------------------

    /// Paint the trigger into `rect` and record it as the trigger's layout.
    ///
    /// A rect different from the last one counts as a layout change and
    /// refreshes the geometry, open or not.
    pub fn paint_trigger(&mut self, rect: Rect, buf: &mut Buffer) {
        self.layout.insert(self.measurer.id().to_string(), rect);
        if self.measurer.record(rect) {
            log::debug!("SectionDropdown '{}' trigger moved to {:?}", self.id(), rect);
        }
        self.trigger_view().paint(rect, &self.styles, buf);
    }

    /// Paint the overlay, if open. Call after everything it should cover.
    pub fn paint_overlay(&self, buf: &mut Buffer) {
        let Some(list) = &self.list else {
            return;
        };
        list.paint(
            self.overlay_rect(),
            &self.styles,
            self.highlight,
            self.state.selected(),
            buf,
        );
    }
}

impl<V> std::fmt::Debug for SectionDropdown<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionDropdown")
            .field("id", &self.measurer.id())
            .field("sections", &self.data.len())
            .field("list_position", &self.list_position)
            .field("is_open", &self.list.is_some())
            .finish_non_exhaustive()
    }
}
