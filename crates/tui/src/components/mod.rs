//! UI building blocks shared across rendering and state modules.

/// Input prompt rendering and the provider filter badge.
pub mod prompt;
/// Table row construction and match highlighting.
pub mod rows;
/// Stats summary and status line.
pub mod status;
/// Table rendering and configuration.
pub mod tables;

pub use prompt::{InputContext, render_input};
pub use rows::{RowStyles, build_record_rows, highlight_line};
pub use status::{StatusContext, StatusMessage, render_status, stats_line};
pub use tables::{TableSpec, default_widths, render_table, visible_rows};
