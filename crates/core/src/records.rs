//! Contact records and the loader for the static JSON data file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classify::domain_of;

const BUNDLED_DATA: &str = include_str!("../data/cafes.json");

/// One café's contact entry.
///
/// Records are immutable after loading. `website` and `source` are `None`
/// whenever the data file leaves them out or supplies an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
	pub name: String,
	pub email: String,
	pub website: Option<String>,
	pub source: Option<String>,
}

impl Record {
	/// Build a record from raw fields, normalizing the optional ones.
	pub fn new(
		name: impl Into<String>,
		email: impl Into<String>,
		website: Option<&str>,
		source: Option<&str>,
	) -> Self {
		Self {
			name: name.into().trim().to_string(),
			email: email.into().trim().to_string(),
			website: normalize_optional(website),
			source: normalize_optional(source),
		}
	}

	/// Lower-cased portion of the email after `@`.
	#[must_use]
	pub fn domain(&self) -> String {
		domain_of(&self.email)
	}
}

#[derive(Debug, Deserialize)]
struct RawRecord {
	name: String,
	email: String,
	#[serde(default)]
	website: Option<String>,
	#[serde(default)]
	source: Option<String>,
}

/// Failures raised while reading the data file.
#[derive(Debug, Error)]
pub enum LoadError {
	#[error("failed to read data file {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("data file is not a valid record list")]
	Parse(#[from] serde_json::Error),
	#[error("record {index} has an invalid email address '{email}'")]
	InvalidEmail { index: usize, email: String },
}

/// Read and validate the records stored at `path`.
pub fn load_records(path: &Path) -> Result<Vec<Record>, LoadError> {
	let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	let records = parse_records(&text)?;
	log::info!("loaded {} records from {}", records.len(), path.display());
	Ok(records)
}

/// Parse a JSON array of records, normalizing and validating every entry.
pub fn parse_records(json: &str) -> Result<Vec<Record>, LoadError> {
	let raw: Vec<RawRecord> = serde_json::from_str(json)?;
	raw.into_iter()
		.enumerate()
		.map(|(index, entry)| {
			let record = Record::new(
				entry.name,
				entry.email,
				entry.website.as_deref(),
				entry.source.as_deref(),
			);
			if is_well_formed(&record.email) {
				Ok(record)
			} else {
				Err(LoadError::InvalidEmail {
					index,
					email: record.email,
				})
			}
		})
		.collect()
}

/// The sample dataset compiled into the binary.
pub fn bundled_records() -> Result<Vec<Record>, LoadError> {
	parse_records(BUNDLED_DATA)
}

fn normalize_optional(value: Option<&str>) -> Option<String> {
	value
		.map(str::trim)
		.filter(|value| !value.is_empty())
		.map(str::to_string)
}

fn is_well_formed(email: &str) -> bool {
	let mut parts = email.split('@');
	matches!(
		(parts.next(), parts.next(), parts.next()),
		(Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty()
	)
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn empty_optional_fields_become_absent() {
		let records = parse_records(
			r#"[{"name": " Café Eins ", "email": "eins@example.de", "website": "", "source": "  "}]"#,
		)
		.expect("parse");

		assert_eq!(records.len(), 1);
		assert_eq!(records[0].name, "Café Eins");
		assert_eq!(records[0].website, None);
		assert_eq!(records[0].source, None);
	}

	#[test]
	fn missing_and_null_optional_fields_are_accepted() {
		let records = parse_records(
			r#"[
				{"name": "A", "email": "a@example.de"},
				{"name": "B", "email": "b@example.de", "website": null, "source": "https://maps.example"}
			]"#,
		)
		.expect("parse");

		assert_eq!(records[0].website, None);
		assert_eq!(records[1].source.as_deref(), Some("https://maps.example"));
	}

	#[test]
	fn emails_without_a_single_at_sign_are_rejected() {
		for email in ["no-at-sign.de", "two@@example.de", "@example.de", "local@"] {
			let json = format!(r#"[{{"name": "X", "email": "{email}"}}]"#);
			let err = parse_records(&json).expect_err("invalid email");
			assert!(
				matches!(err, LoadError::InvalidEmail { index: 0, .. }),
				"unexpected error for {email}: {err}"
			);
		}
	}

	#[test]
	fn load_records_reads_file() {
		let mut file = tempfile::NamedTempFile::new().expect("tempfile");
		write!(file, r#"[{{"name": "Z", "email": "z@Firma.DE"}}]"#).expect("write");

		let records = load_records(file.path()).expect("load");
		assert_eq!(records[0].domain(), "firma.de");
	}

	#[test]
	fn missing_file_reports_path() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("absent.json");
		let err = load_records(&path).expect_err("missing file");
		assert!(err.to_string().contains("absent.json"));
	}

	#[test]
	fn bundled_dataset_is_valid() {
		let records = bundled_records().expect("bundled data");
		assert!(!records.is_empty());
		for record in &records {
			let domain = record.domain();
			assert!(!domain.is_empty());
			assert_eq!(domain, domain.to_lowercase());
		}
	}
}
