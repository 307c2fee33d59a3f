//! Core data model and pure transformations for `cafedir`.
//!
//! Everything in this crate is free of terminal concerns: loading the static
//! record list, classifying email providers, filtering and sorting, summarizing
//! domains and rendering CSV. The TUI and the CLI both build on these pieces.

pub mod app_dirs;
pub mod classify;
pub mod copied;
pub mod export;
pub mod filter;
pub mod records;
pub mod stats;
pub mod view;

pub use crate::classify::{ProviderKind, classify, domain_of, is_public_provider};
pub use crate::copied::{COPIED_WINDOW, CopiedMarker};
pub use crate::export::{CSV_FILE_NAME, CSV_HEADER, ExportError, to_csv, write_csv};
pub use crate::filter::{ProviderFilter, apply, compare_names, matches_search};
pub use crate::records::{LoadError, Record, bundled_records, load_records, parse_records};
pub use crate::stats::{DomainStats, EMPTY_LABEL, summarize};
pub use crate::view::DirectoryView;
