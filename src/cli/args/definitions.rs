use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{LogLevelArg, OutputFormat, ProviderArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `cafedir` binary.
#[derive(Parser, Debug)]
#[command(
	name = "cafedir",
	version,
	long_version = long_version(),
	about = "Browse, filter and export a static café contact directory",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CAFEDIR_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long = "data",
		value_name = "FILE",
		help = "JSON file with the records to show (default: bundled sample)"
	)]
	pub(crate) data: Option<PathBuf>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Initial search term (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		short = 'f',
		long = "provider",
		value_enum,
		help = "Initial provider filter (default: all)"
	)]
	pub(crate) provider: Option<ProviderArg>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: default)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "export-dir",
		value_name = "DIR",
		help = "Directory CSV exports are written to (default: downloads folder)"
	)]
	pub(crate) export_dir: Option<PathBuf>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: cafedir.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		long = "log-level",
		value_enum,
		help = "Minimum level written to the log (default: info)"
	)]
	pub(crate) log_level: Option<LogLevelArg>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "list",
		conflicts_with = "export",
		help = "Print the filtered records and stats instead of opening the UI"
	)]
	pub(crate) list: bool,
	#[arg(
		long = "export",
		help = "Write the filtered records as CSV and exit instead of opening the UI"
	)]
	pub(crate) export: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print results"
	)]
	pub(crate) output: OutputFormat,
}
