//! CSV rendering of the visible records.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::records::Record;

/// File name used for every export.
pub const CSV_FILE_NAME: &str = "mainz-cafes.csv";
pub const CSV_HEADER: [&str; 4] = ["Name", "Email", "Website", "Source"];

#[derive(Debug, Error)]
pub enum ExportError {
	#[error("failed to create export directory {path}")]
	CreateDir {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to write {path}")]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Render `records` as CSV with a header row.
///
/// Every field is quoted and embedded quotes are doubled, so commas and line
/// breaks inside values are safe. Rows are joined with `\n`.
#[must_use]
pub fn to_csv(records: &[Record]) -> String {
	let header = csv_row(CSV_HEADER);
	let rows = records.iter().map(|record| {
		csv_row([
			record.name.as_str(),
			record.email.as_str(),
			record.website.as_deref().unwrap_or_default(),
			record.source.as_deref().unwrap_or_default(),
		])
	});

	std::iter::once(header)
		.chain(rows)
		.collect::<Vec<_>>()
		.join("\n")
}

/// Write the CSV for `records` to `dir/mainz-cafes.csv` and return the path.
pub fn write_csv(records: &[Record], dir: &Path) -> Result<PathBuf, ExportError> {
	fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
		path: dir.to_path_buf(),
		source,
	})?;

	let path = dir.join(CSV_FILE_NAME);
	fs::write(&path, to_csv(records)).map_err(|source| ExportError::Write {
		path: path.clone(),
		source,
	})?;

	log::info!("exported {} records to {}", records.len(), path.display());
	Ok(path)
}

fn csv_row<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
	fields
		.into_iter()
		.map(quote_field)
		.collect::<Vec<_>>()
		.join(",")
}

fn quote_field(value: &str) -> String {
	format!("\"{}\"", value.replace('"', "\"\""))
}
