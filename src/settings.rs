use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use cafedir_core::{ProviderFilter, app_dirs};
use config::{Config, ConfigError, File};
use log::LevelFilter;
use serde::Deserialize;

use crate::cli::CliArgs;

const LOG_FILE_NAME: &str = "cafedir.log";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	data: DataSection,
	ui: UiSection,
	export: ExportSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DataSection {
	path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	initial_query: Option<String>,
	provider: Option<String>,
	table_title: Option<String>,
	headers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ExportSection {
	dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
	file: Option<PathBuf>,
}

pub struct ResolvedConfig {
	/// Data file; `None` means the bundled sample.
	pub data_path: Option<PathBuf>,
	pub initial_query: String,
	pub provider: ProviderFilter,
	pub theme: Option<String>,
	pub table_title: Option<String>,
	pub headers: Option<Vec<String>>,
	pub export_dir: PathBuf,
	pub log_level: LevelFilter,
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		match &self.data_path {
			Some(path) => println!("  Data file: {}", path.display()),
			None => println!("  Data file: (bundled sample)"),
		}
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
		println!("  Provider filter: {}", self.provider);
		println!(
			"  UI theme: {}",
			self.theme.as_deref().unwrap_or("(use the library default)")
		);
		if let Some(title) = &self.table_title {
			println!("  Table title: {title}");
		}
		if let Some(headers) = &self.headers {
			println!("  Headers: {}", headers.join(", "));
		}
		println!("  Export directory: {}", self.export_dir.display());
		println!("  Log level: {}", self.log_level);
		match &self.log_file {
			Some(path) => println!("  Log file: {}", path.display()),
			None => println!("  Log file: (disabled)"),
		}
	}
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let config = build_config(cli)?;
	resolve_config(config, cli)
}

fn resolve_config(config: Config, cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = config
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("cafedir")
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("ui.headers"),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".cafedir.toml"));
		files.push(current_dir.join("cafedir.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.data.clone() {
			self.data.path = Some(path);
		}
		if let Some(query) = cli.query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(provider) = cli.provider {
			self.ui.provider = Some(provider.as_str().to_string());
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(dir) = cli.export_dir.clone() {
			self.export.dir = Some(dir);
		}
		if let Some(level) = cli.log_level {
			self.logging.level = Some(level.as_str().to_string());
		}
		if let Some(file) = cli.log_file.clone() {
			self.logging.file = Some(file);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let data_path = match self.data.path {
			Some(path) if path.is_relative() => Some(
				env::current_dir()
					.context("failed to resolve current directory for data file")?
					.join(path),
			),
			other => other,
		};

		let provider = match self.ui.provider.as_deref() {
			Some(value) => value.parse::<ProviderFilter>().map_err(|err| anyhow!(err))?,
			None => ProviderFilter::default(),
		};

		let theme = match self.ui.theme {
			Some(name) if name.trim().is_empty() => None,
			Some(name) => {
				if cafedir_tui::style::by_name(&name).is_none() {
					bail!(
						"unknown theme '{name}' (available: {})",
						cafedir_tui::style::names().join(", ")
					);
				}
				Some(name)
			}
			None => None,
		};

		let headers = self
			.ui
			.headers
			.map(sanitize_headers)
			.filter(|headers| !headers.is_empty());
		if let Some(headers) = &headers
			&& headers.len() != 4
		{
			bail!(
				"expected 4 table headers (name, email, website, source), got {}",
				headers.len()
			);
		}

		let log_level = match self.logging.level.as_deref() {
			Some(level) => level
				.trim()
				.parse::<LevelFilter>()
				.with_context(|| format!("unknown log level '{level}'"))?,
			None => LevelFilter::Info,
		};
		let log_file = match self.logging.file {
			Some(file) => Some(file),
			None => app_dirs::get_data_dir()
				.ok()
				.map(|dir| dir.join(LOG_FILE_NAME)),
		};

		Ok(ResolvedConfig {
			data_path,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			provider,
			theme,
			table_title: self.ui.table_title.filter(|title| !title.trim().is_empty()),
			headers,
			export_dir: self.export.dir.unwrap_or_else(app_dirs::default_export_dir),
			log_level,
			log_file,
		})
	}
}

fn sanitize_headers(headers: Vec<String>) -> Vec<String> {
	headers
		.into_iter()
		.map(|header| header.trim().to_string())
		.filter(|header| !header.is_empty())
		.collect()
}
