//! Core state container for the directory view.
//!
//! The [`App`] owns the records, the two filter inputs, the copied marker and
//! the UI-only bits (selection, status line, theme).

use std::path::PathBuf;
use std::time::Instant;

use cafedir_core::{CopiedMarker, DirectoryView, ProviderFilter, Record, write_csv};
use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use serde::Serialize;

use crate::clipboard::{ClipboardWorker, CopyResult, osc52_sequence};
use crate::components::StatusMessage;
use crate::config::UiLabels;
use crate::input::SearchInput;
use crate::style::{StyleConfig, Theme};

/// What the session looked like when the user quit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
	/// Search term at exit.
	pub query: String,
	/// Provider filter at exit.
	pub provider: ProviderFilter,
	/// Number of rows visible at exit.
	pub visible: usize,
	/// Files written by exports during the session.
	pub exports: Vec<PathBuf>,
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	/// Records and the memoized derived view.
	pub view: DirectoryView,
	/// Text input holding the search term.
	pub search_input: SearchInput<'a>,
	/// Current style and theme configuration.
	pub style: StyleConfig,
	pub(crate) provider_filter: ProviderFilter,
	pub(crate) copied: CopiedMarker,
	pub(crate) labels: UiLabels,
	pub(crate) table_state: TableState,
	pub(crate) results_area: Option<Rect>,
	pub(crate) clipboard: ClipboardWorker,
	/// OSC 52 request waiting to be written between frames.
	pub(crate) pending_osc52: Option<String>,
	pub(crate) export_dir: PathBuf,
	pub(crate) status: Option<StatusMessage>,
	pub(crate) exports: Vec<PathBuf>,
}

impl<'a> App<'a> {
	/// Construct an [`App`] showing every record, writing to the system
	/// clipboard and exporting into the default export directory.
	pub fn new(records: Vec<Record>) -> Self {
		Self::with_clipboard(records, ClipboardWorker::spawn())
	}

	/// Construct an [`App`] with a custom clipboard worker.
	pub fn with_clipboard(records: Vec<Record>, clipboard: ClipboardWorker) -> Self {
		let mut app = Self {
			view: DirectoryView::new(records),
			search_input: SearchInput::new(""),
			style: StyleConfig::default(),
			provider_filter: ProviderFilter::default(),
			copied: CopiedMarker::new(),
			labels: UiLabels::default(),
			table_state: TableState::default(),
			results_area: None,
			clipboard,
			pending_osc52: None,
			export_dir: cafedir_core::app_dirs::default_export_dir(),
			status: None,
			exports: Vec::new(),
		};
		app.ensure_selection();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.style.theme = theme;
		self.search_input.set_style(theme.prompt);
	}

	pub fn set_labels(&mut self, labels: UiLabels) {
		self.labels = labels;
	}

	pub fn set_export_dir(&mut self, dir: impl Into<PathBuf>) {
		self.export_dir = dir.into();
	}

	pub fn set_query(&mut self, query: impl Into<String>) {
		self.search_input.set_text(query);
		self.refresh_view();
	}

	pub fn provider_filter(&self) -> ProviderFilter {
		self.provider_filter
	}

	pub fn set_provider_filter(&mut self, provider: ProviderFilter) {
		self.provider_filter = provider;
		self.refresh_view();
	}

	/// Clear the search term and show every provider again.
	pub fn reset_filters(&mut self) {
		self.search_input.set_text("");
		self.provider_filter = ProviderFilter::default();
		self.refresh_view();
		log::debug!("filters reset");
	}

	/// Recompute the visible rows from the current filter inputs.
	pub(crate) fn refresh_view(&mut self) {
		let query = self.search_input.text().to_string();
		if self.view.refresh(&query, self.provider_filter) {
			self.table_state.select(None);
			*self.table_state.offset_mut() = 0;
			self.ensure_selection();
		}
	}

	/// Keep the selection on a visible row, or clear it when nothing is shown.
	pub(crate) fn ensure_selection(&mut self) {
		let len = self.filtered_len();
		match self.table_state.selected() {
			_ if len == 0 => self.table_state.select(None),
			Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
			Some(_) => {}
			None => self.table_state.select(Some(0)),
		}
	}

	pub(crate) fn filtered_len(&self) -> usize {
		self.view.filtered().len()
	}

	/// The record under the selection cursor.
	pub fn selected_record(&self) -> Option<&Record> {
		let selected = self.table_state.selected()?;
		self.view.filtered().get(selected)
	}

	/// Ask the clipboard worker to copy the selected email.
	pub(crate) fn copy_selected(&mut self) {
		let Some(email) = self.selected_record().map(|record| record.email.clone()) else {
			return;
		};
		log::debug!("copying {email}");
		self.clipboard.request(&email);
	}

	/// Apply every finished copy. Successful copies start a new marker window.
	pub(crate) fn pump_clipboard_results(&mut self, now: Instant) {
		for result in self.clipboard.try_results() {
			self.handle_copy_result(result, now);
		}
	}

	pub(crate) fn handle_copy_result(&mut self, result: CopyResult, now: Instant) {
		match result.outcome {
			Ok(()) => {
				log::info!("copied {} to clipboard", result.email);
				self.copied.mark(result.email, now);
			}
			Err(err) => {
				log::warn!(
					"failed to copy {} to clipboard: {err}; asking the terminal via OSC 52",
					result.email
				);
				self.pending_osc52 = Some(osc52_sequence(&result.email));
			}
		}
	}

	/// The OSC 52 request queued by the last failed copy, if any.
	pub(crate) fn take_osc52(&mut self) -> Option<String> {
		self.pending_osc52.take()
	}

	/// The email still inside its "copied" window.
	pub fn copied_email(&self, now: Instant) -> Option<&str> {
		self.copied.current(now)
	}

	/// Write the visible rows to the export directory.
	pub(crate) fn export_visible(&mut self) {
		match write_csv(self.view.filtered(), &self.export_dir) {
			Ok(path) => {
				self.status = Some(StatusMessage::Info(format!(
					"Exported {} rows to {}",
					self.filtered_len(),
					path.display()
				)));
				self.exports.push(path);
			}
			Err(err) => {
				log::error!("export failed: {err}");
				self.status = Some(StatusMessage::Error(format!("Export failed: {err}")));
			}
		}
	}

	pub(crate) fn summary(&self) -> SessionSummary {
		SessionSummary {
			query: self.search_input.text().to_string(),
			provider: self.provider_filter,
			visible: self.filtered_len(),
			exports: self.exports.clone(),
		}
	}
}
