//! Error types.
//!
//! None of these are fatal to the widget. They are returned by the helpers
//! that detect them and logged by the widget, which then carries on in a
//! degraded but non-crashing state.

use thiserror::Error;

/// Errors raised while building, scrolling or styling a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropdownError {
    /// Two sections share a group id, so scroll targeting is ambiguous.
    #[error("Duplicate group id '{group_id}' at sections {first} and {second}")]
    DuplicateGroupId {
        /// The repeated group id.
        group_id: String,
        /// Index of the first section carrying it.
        first: usize,
        /// Index of the later section carrying it.
        second: usize,
    },

    /// A scroll target's section is no longer among the rendered sections.
    #[error("Section '{0}' not found in rendered sections")]
    SectionNotFound(String),

    /// A color string could not be parsed.
    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    /// A delayed task was requested outside of a tokio runtime.
    #[error("No tokio runtime available to schedule a delayed scroll")]
    NoRuntime,
}
