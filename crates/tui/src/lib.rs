//! Interactive terminal UI for `cafedir`.
//!
//! This crate contains the directory view: the builder, event loop,
//! rendering pipeline, state management, clipboard worker and the widgets and
//! themes that make up the terminal application.

mod app;
mod builder;
pub mod clipboard;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

#[cfg(test)]
mod snapshot_tests;

pub use app::{App, SessionSummary};
pub use builder::DirectoryUi;
pub use config::UiLabels;

pub use crate::input::SearchInput;
pub use crate::style::{StyleConfig, Theme, builtin_themes, default_theme};
