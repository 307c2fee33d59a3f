//! Application state and behavior for the directory view.
//!
//! The [`App`] type aggregates the records, filter inputs and rendering
//! state. Supporting modules split the implementation into input handling
//! (actions), rendering and the state container itself.

mod actions;
mod render;
mod state;

pub use state::{App, SessionSummary};
