//! Logger setup for the binary.
//!
//! The terminal belongs to the UI while it runs, so records go to a log file.
//! `RUST_LOG` still takes precedence over the configured level when set.

use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Route `log` records to `file`, or discard them when no file is known.
pub fn initialize(level: LevelFilter, file: Option<&Path>) -> Result<()> {
	let mut builder = Builder::from_env(Env::default().default_filter_or(level.as_str()));
	builder.format_timestamp_millis();

	match file {
		Some(path) => {
			if let Some(parent) = path.parent()
				&& !parent.as_os_str().is_empty()
			{
				fs::create_dir_all(parent).with_context(|| {
					format!("failed to create log directory {}", parent.display())
				})?;
			}
			let handle = OpenOptions::new()
				.create(true)
				.append(true)
				.open(path)
				.with_context(|| format!("failed to open log file {}", path.display()))?;
			builder.target(Target::Pipe(Box::new(handle)));
		}
		None => {
			builder.filter_level(LevelFilter::Off);
		}
	}

	builder
		.try_init()
		.context("failed to install the logger")?;
	Ok(())
}
