use cafedir_core::ProviderFilter;
use clap::ValueEnum;

/// Provider filters accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ProviderArg {
	All,
	Business,
	Public,
}

impl ProviderArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		ProviderFilter::from(self).as_str()
	}
}

impl From<ProviderArg> for ProviderFilter {
	fn from(value: ProviderArg) -> Self {
		match value {
			ProviderArg::All => ProviderFilter::All,
			ProviderArg::Business => ProviderFilter::Business,
			ProviderArg::Public => ProviderFilter::Public,
		}
	}
}

/// Log levels selectable from the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevelArg {
	Off,
	Error,
	Warn,
	Info,
	Debug,
	Trace,
}

impl LogLevelArg {
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			LogLevelArg::Off => "off",
			LogLevelArg::Error => "error",
			LogLevelArg::Warn => "warn",
			LogLevelArg::Info => "info",
			LogLevelArg::Debug => "debug",
			LogLevelArg::Trace => "trace",
		}
	}
}

/// Output formats supported by the headless commands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
