use std::path::PathBuf;

use anyhow::Result;
use cafedir_core::{ProviderFilter, Record};

use crate::App;
use crate::app::SessionSummary;
use crate::clipboard::ClipboardWorker;
use crate::config::UiLabels;
use crate::style::{self, Theme};

/// A small builder for configuring the directory view before running it.
pub struct DirectoryUi {
	records: Vec<Record>,
	initial_query: String,
	provider: ProviderFilter,
	theme: Option<Theme>,
	labels: Option<UiLabels>,
	export_dir: Option<PathBuf>,
}

impl DirectoryUi {
	pub fn new(records: Vec<Record>) -> Self {
		Self {
			records,
			initial_query: String::new(),
			provider: ProviderFilter::default(),
			theme: None,
			labels: None,
			export_dir: None,
		}
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = query.into();
		self
	}

	pub fn with_provider_filter(mut self, provider: ProviderFilter) -> Self {
		self.provider = provider;
		self
	}

	/// Select a builtin theme by name. Unknown names keep the default theme.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		match style::by_name(name) {
			Some(theme) => self.theme = Some(theme),
			None => log::warn!("unknown theme '{name}', keeping the default"),
		}
		self
	}

	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = Some(labels);
		self
	}

	pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.export_dir = Some(dir.into());
		self
	}

	/// Materialize the configured [`App`] without starting the terminal.
	pub fn build<'a>(self) -> App<'a> {
		let clipboard = ClipboardWorker::spawn();
		self.build_with_clipboard(clipboard)
	}

	/// Like [`Self::build`], with a custom clipboard worker.
	pub fn build_with_clipboard<'a>(self, clipboard: ClipboardWorker) -> App<'a> {
		let mut app = App::with_clipboard(self.records, clipboard);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(labels) = self.labels {
			app.set_labels(labels);
		}
		if let Some(dir) = self.export_dir {
			app.set_export_dir(dir);
		}
		app.set_provider_filter(self.provider);
		if !self.initial_query.is_empty() {
			app.set_query(self.initial_query);
		}
		app
	}

	/// Run the interactive view until the user quits.
	pub fn run(self) -> Result<SessionSummary> {
		let mut app = self.build();
		app.run()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn records() -> Vec<Record> {
		vec![
			Record::new("Zeta Café", "a@gmail.com", None, None),
			Record::new("Alpha Café", "b@firma.de", None, None),
		]
	}

	#[test]
	fn initial_state_comes_from_builder() {
		let app = DirectoryUi::new(records())
			.with_initial_query("café")
			.with_provider_filter(ProviderFilter::Public)
			.with_theme_name("light")
			.build_with_clipboard(ClipboardWorker::with_copier(|_| Ok(())));

		assert_eq!(app.search_input.text(), "café");
		assert_eq!(app.provider_filter(), ProviderFilter::Public);
		assert_eq!(app.style.theme, style::by_name("light").expect("light theme"));
		let names: Vec<_> = app.view.filtered().iter().map(|r| r.name.as_str()).collect();
		assert_eq!(names, ["Zeta Café"]);
	}

	#[test]
	fn unknown_theme_keeps_default() {
		let app = DirectoryUi::new(records())
			.with_theme_name("nope")
			.build_with_clipboard(ClipboardWorker::with_copier(|_| Ok(())));
		assert_eq!(app.style.theme, style::default_theme());
	}
}
