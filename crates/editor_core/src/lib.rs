//! Application state for the catalog editor.
//!
//! The whole editor is one [`AppState`] value: the committed catalog, the
//! create/edit drafts, the transient color selection, and the open
//! workflow. Every UI event becomes an [`Action`], and
//! [`AppState::apply`] is the only way state changes — it consumes the
//! current state and returns the next one plus an optional success
//! [`Notice`] for the toast layer.

mod action;
mod reducer;
mod state;

pub use action::{Action, Notice, NoticeKind};
pub use reducer::Transition;
pub use state::{AppState, Workflow};

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
