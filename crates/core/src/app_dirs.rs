//! Resolve configuration and data directories for `cafedir`.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::{ProjectDirs, UserDirs};

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "cafedir";

const CONFIG_DIR_ENV: &str = "CAFEDIR_CONFIG_DIR";
const DATA_DIR_ENV: &str = "CAFEDIR_DATA_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for cafedir"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the configuration directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the data directory used for the log file.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Return the directory exports are written to when nothing is configured.
///
/// This is the user's download folder when the platform exposes one and the
/// current working directory otherwise.
pub fn default_export_dir() -> PathBuf {
	if let Some(dirs) = UserDirs::new()
		&& let Some(downloads) = dirs.download_dir()
	{
		return downloads.to_path_buf();
	}

	env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
