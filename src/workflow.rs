use anyhow::{Context, Result};
use cafedir_core::{DirectoryView, Record, bundled_records, load_records, write_csv};
use cafedir_tui::{DirectoryUi, SessionSummary, UiLabels};

use crate::settings::ResolvedConfig;

/// Coordinates loading the records and running either the interactive view
/// or one of the headless commands.
pub(crate) struct DirectoryWorkflow {
	config: ResolvedConfig,
	records: Vec<Record>,
}

impl DirectoryWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let records = match &config.data_path {
			Some(path) => load_records(path)
				.with_context(|| format!("failed to load records from {}", path.display()))?,
			None => {
				let records = bundled_records().context("bundled dataset is invalid")?;
				log::info!("using {} bundled sample records", records.len());
				records
			}
		};
		Ok(Self { config, records })
	}

	/// The filtered view for the configured query and provider.
	pub(crate) fn view(&self) -> DirectoryView {
		let mut view = DirectoryView::new(self.records.clone());
		view.refresh(&self.config.initial_query, self.config.provider);
		view
	}

	/// Export the configured view without opening the UI.
	pub(crate) fn export(&self) -> Result<(std::path::PathBuf, usize)> {
		let view = self.view();
		let path = write_csv(view.filtered(), &self.config.export_dir)?;
		Ok((path, view.filtered().len()))
	}

	pub(crate) fn run_interactive(self) -> Result<SessionSummary> {
		let Self { config, records } = self;

		let mut labels = UiLabels::default();
		if let Some(headers) = config.headers {
			labels = labels.with_headers(headers);
		}
		if let Some(title) = config.table_title {
			labels = labels.with_table_title(title);
		}

		let mut ui = DirectoryUi::new(records)
			.with_initial_query(config.initial_query)
			.with_provider_filter(config.provider)
			.with_labels(labels)
			.with_export_dir(config.export_dir);
		if let Some(theme) = config.theme {
			ui = ui.with_theme_name(&theme);
		}

		ui.run()
	}

	pub(crate) fn query(&self) -> &str {
		&self.config.initial_query
	}

	pub(crate) fn provider(&self) -> cafedir_core::ProviderFilter {
		self.config.provider
	}
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use cafedir_core::{CSV_FILE_NAME, ProviderFilter};
	use log::LevelFilter;

	use super::*;

	fn config(data_path: Option<PathBuf>, export_dir: PathBuf) -> ResolvedConfig {
		ResolvedConfig {
			data_path,
			initial_query: String::new(),
			provider: ProviderFilter::Public,
			theme: None,
			table_title: None,
			headers: None,
			export_dir,
			log_level: LevelFilter::Off,
			log_file: None,
		}
	}

	#[test]
	fn headless_export_writes_filtered_rows() {
		let dir = tempfile::tempdir().expect("tempdir");
		let data = dir.path().join("cafes.json");
		std::fs::write(
			&data,
			r#"[
				{"name": "Zeta Café", "email": "a@gmail.com"},
				{"name": "Alpha Café", "email": "b@firma.de", "website": ""}
			]"#,
		)
		.expect("write data");

		let workflow =
			DirectoryWorkflow::from_config(config(Some(data), dir.path().join("out")))
				.expect("workflow");
		let (path, rows) = workflow.export().expect("export");

		assert_eq!(rows, 1);
		assert_eq!(path, dir.path().join("out").join(CSV_FILE_NAME));
		let csv = std::fs::read_to_string(path).expect("read csv");
		assert_eq!(
			csv,
			"\"Name\",\"Email\",\"Website\",\"Source\"\n\"Zeta Café\",\"a@gmail.com\",\"\",\"\""
		);
	}

	#[test]
	fn bundled_records_are_used_without_data_file() {
		let dir = tempfile::tempdir().expect("tempdir");
		let workflow =
			DirectoryWorkflow::from_config(config(None, dir.path().to_path_buf())).expect("workflow");
		let view = workflow.view();
		assert!(view.total() > 0);
		assert_eq!(view.stats().business_count, 0);
		assert_eq!(view.stats().public_count, view.filtered().len());
	}

	#[test]
	fn invalid_data_file_is_an_error() {
		let dir = tempfile::tempdir().expect("tempdir");
		let data = dir.path().join("broken.json");
		std::fs::write(&data, r#"[{"name": "X", "email": "not-an-email"}]"#).expect("write");

		let result = DirectoryWorkflow::from_config(config(Some(data), dir.path().to_path_buf()));
		assert!(result.is_err());
	}
}
