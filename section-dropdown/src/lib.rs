pub mod buffer;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod event;
pub mod item;
pub mod list;
pub mod measure;
pub mod placement;
pub mod rect;
pub mod schedule;
pub mod state;
pub mod style;
pub mod terminal;
pub mod text;
pub mod trigger;

pub use buffer::{Buffer, Cell};
pub use config::{DEFAULT_OVERLAY_HEIGHT, DEFAULT_SELECTED_BACKGROUND, DropdownConfig};
pub use dropdown::SectionDropdown;
pub use error::DropdownError;
pub use event::{Event, Key, Modifiers, MouseButton, event_stream};
pub use item::{Item, Section, validate_sections};
pub use list::{Row, ScrollTarget, SectionedList, key_for};
pub use measure::{LayoutHost, LayoutMap, TriggerGeometry, TriggerMeasurer};
pub use placement::{ListPosition, Placement, compute_placement, ordered_sections};
pub use rect::{Rect, SignedRect};
pub use schedule::{DEFAULT_SCROLL_DELAY, ScrollRequest, ScrollScheduler};
pub use state::SelectionState;
pub use style::{Border, Color, DropdownStyles, Rgb, Style, StyleOverrides, TextStyle};
pub use terminal::Terminal;
pub use trigger::{DEFAULT_PLACEHOLDER, TextRun, TriggerView};
