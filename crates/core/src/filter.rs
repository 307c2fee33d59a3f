//! Free-text and provider filtering followed by a name sort.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::classify::is_public_provider;
use crate::records::Record;

/// Provider category selected in the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderFilter {
	#[default]
	All,
	Business,
	Public,
}

impl ProviderFilter {
	pub const ALL: [ProviderFilter; 3] = [
		ProviderFilter::All,
		ProviderFilter::Business,
		ProviderFilter::Public,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			ProviderFilter::All => "all",
			ProviderFilter::Business => "business",
			ProviderFilter::Public => "public",
		}
	}

	/// Human-readable label shown next to the search input.
	pub fn label(self) -> &'static str {
		match self {
			ProviderFilter::All => "All providers",
			ProviderFilter::Business => "Business domains",
			ProviderFilter::Public => "Public providers",
		}
	}

	/// The next option in `all → business → public → all` order.
	#[must_use]
	pub fn cycle(self) -> Self {
		match self {
			ProviderFilter::All => ProviderFilter::Business,
			ProviderFilter::Business => ProviderFilter::Public,
			ProviderFilter::Public => ProviderFilter::All,
		}
	}

	pub fn accepts(self, record: &Record) -> bool {
		match self {
			ProviderFilter::All => true,
			ProviderFilter::Business => !is_public_provider(&record.email),
			ProviderFilter::Public => is_public_provider(&record.email),
		}
	}
}

impl fmt::Display for ProviderFilter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for ProviderFilter {
	type Err = String;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"all" => Ok(ProviderFilter::All),
			"business" => Ok(ProviderFilter::Business),
			"public" => Ok(ProviderFilter::Public),
			other => Err(format!(
				"unknown provider filter '{other}' (expected all, business or public)"
			)),
		}
	}
}

/// Whether `record` contains the already trimmed and case-folded `needle`.
///
/// Fields are joined with a single space, so a needle that contains a space can
/// run from the end of one field into the start of the next.
pub fn matches_search(record: &Record, needle: &str) -> bool {
	if needle.is_empty() {
		return true;
	}

	let haystack = [
		Some(record.name.as_str()),
		Some(record.email.as_str()),
		record.website.as_deref(),
		record.source.as_deref(),
	]
	.into_iter()
	.flatten()
	.collect::<Vec<_>>()
	.join(" ")
	.to_lowercase();

	haystack.contains(needle)
}

/// Filter `records` by search term and provider, sorted by name.
pub fn apply(records: &[Record], search_term: &str, provider: ProviderFilter) -> Vec<Record> {
	let needle = search_term.trim().to_lowercase();
	let mut filtered: Vec<Record> = records
		.iter()
		.filter(|record| matches_search(record, &needle))
		.filter(|record| provider.accepts(record))
		.cloned()
		.collect();
	filtered.sort_by(|a, b| compare_names(&a.name, &b.name));
	filtered
}

/// Locale-aware name ordering.
///
/// Names compare by their transliterated, lower-cased form first so accented
/// and umlauted letters sort next to their base letter. Equal keys fall back
/// to the raw strings to keep the order total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
	collation_key(a)
		.cmp(&collation_key(b))
		.then_with(|| a.cmp(b))
}

fn collation_key(name: &str) -> String {
	deunicode::deunicode(name).to_lowercase()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Vec<Record> {
		vec![
			Record::new("Zeta Café", "a@gmail.com", None, None),
			Record::new("Alpha Café", "b@firma.de", None, None),
		]
	}

	fn names(records: &[Record]) -> Vec<&str> {
		records.iter().map(|record| record.name.as_str()).collect()
	}

	#[test]
	fn empty_search_returns_everything_sorted() {
		let result = apply(&sample(), "", ProviderFilter::All);
		assert_eq!(names(&result), ["Alpha Café", "Zeta Café"]);
	}

	#[test]
	fn spaced_term_can_span_adjacent_fields() {
		let record = Record::new("Café Dom", "rhein@firma.de", None, None);
		assert!(matches_search(&record, "dom rhein"));
		assert!(!matches_search(&record, "domrhein"));
	}

	#[test]
	fn whitespace_only_search_is_empty() {
		let result = apply(&sample(), "   ", ProviderFilter::All);
		assert_eq!(result.len(), 2);
	}

	#[test]
	fn public_filter_keeps_webmail_only() {
		let result = apply(&sample(), "", ProviderFilter::Public);
		assert_eq!(result.len(), 1);
		assert_eq!(result[0].name, "Zeta Café");
		assert_eq!(result[0].email, "a@gmail.com");
	}

	#[test]
	fn business_filter_drops_webmail() {
		let result = apply(&sample(), "", ProviderFilter::Business);
		assert_eq!(names(&result), ["Alpha Café"]);
	}

	#[test]
	fn search_matches_email_domain() {
		let result = apply(&sample(), "firma", ProviderFilter::All);
		assert_eq!(names(&result), ["Alpha Café"]);
	}

	#[test]
	fn search_is_case_insensitive_and_trimmed() {
		let result = apply(&sample(), "  ZETA ", ProviderFilter::All);
		assert_eq!(names(&result), ["Zeta Café"]);
	}

	#[test]
	fn search_covers_optional_fields() {
		let records = vec![
			Record::new("One", "one@firma.de", Some("https://kaffee.example"), None),
			Record::new("Two", "two@firma.de", None, Some("osm/node/42")),
		];
		assert_eq!(names(&apply(&records, "kaffee", ProviderFilter::All)), ["One"]);
		assert_eq!(names(&apply(&records, "node/42", ProviderFilter::All)), ["Two"]);
	}

	#[test]
	fn filtering_is_idempotent() {
		let records = sample();
		let first = apply(&records, "café", ProviderFilter::All);
		let second = apply(&records, "café", ProviderFilter::All);
		assert_eq!(first, second);
	}

	#[test]
	fn umlauts_sort_next_to_base_letter() {
		let records = vec![
			Record::new("Pavillon", "p@firma.de", None, None),
			Record::new("Ölmühle", "o@firma.de", None, None),
			Record::new("Nordcafé", "n@firma.de", None, None),
			Record::new("ateliercafé", "a@firma.de", None, None),
		];
		let result = apply(&records, "", ProviderFilter::All);
		assert_eq!(
			names(&result),
			["ateliercafé", "Nordcafé", "Ölmühle", "Pavillon"]
		);
	}

	#[test]
	fn provider_filter_parses_and_cycles() {
		assert_eq!(" Public ".parse::<ProviderFilter>(), Ok(ProviderFilter::Public));
		assert!("webmail".parse::<ProviderFilter>().is_err());

		let mut filter = ProviderFilter::default();
		let mut seen = Vec::new();
		for _ in 0..3 {
			seen.push(filter);
			filter = filter.cycle();
		}
		assert_eq!(seen, ProviderFilter::ALL);
		assert_eq!(filter, ProviderFilter::All);
	}
}
