//! Domain statistics over the visible records.

use indexmap::IndexMap;
use serde::Serialize;

use crate::classify::{ProviderKind, classify};
use crate::records::Record;

/// Placeholder shown instead of a top domain when nothing is visible.
pub const EMPTY_LABEL: &str = "—";

/// Summary of the domains present in a record sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainStats {
	/// Number of distinct domains.
	pub unique_domains: usize,
	/// Most frequent domain with its count.
	pub top_domain: Option<(String, usize)>,
	pub public_count: usize,
	pub business_count: usize,
}

impl DomainStats {
	/// `"domain (count)"`, or [`EMPTY_LABEL`] for an empty input.
	#[must_use]
	pub fn top_domain_label(&self) -> String {
		match &self.top_domain {
			Some((domain, count)) => format!("{domain} ({count})"),
			None => EMPTY_LABEL.to_string(),
		}
	}

	pub fn total(&self) -> usize {
		self.public_count + self.business_count
	}
}

/// Summarize `records` in a single pass.
///
/// On equal counts the domain encountered first in `records` wins.
pub fn summarize(records: &[Record]) -> DomainStats {
	let mut frequencies: IndexMap<String, usize> = IndexMap::new();
	let mut public_count = 0;
	let mut business_count = 0;

	for record in records {
		*frequencies.entry(record.domain()).or_default() += 1;
		match classify(&record.email) {
			ProviderKind::Public => public_count += 1,
			ProviderKind::Business => business_count += 1,
		}
	}

	let mut top_domain: Option<(&String, usize)> = None;
	for (domain, &count) in &frequencies {
		if top_domain.is_none_or(|(_, best)| count > best) {
			top_domain = Some((domain, count));
		}
	}

	DomainStats {
		unique_domains: frequencies.len(),
		top_domain: top_domain.map(|(domain, count)| (domain.clone(), count)),
		public_count,
		business_count,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(name: &str, email: &str) -> Record {
		Record::new(name, email, None, None)
	}

	#[test]
	fn empty_input_uses_placeholder() {
		let stats = summarize(&[]);
		assert_eq!(stats, DomainStats::default());
		assert_eq!(stats.top_domain_label(), EMPTY_LABEL);
	}

	#[test]
	fn counts_public_and_business() {
		let stats = summarize(&[
			record("Alpha Café", "b@firma.de"),
			record("Zeta Café", "a@gmail.com"),
		]);
		assert_eq!(stats.public_count, 1);
		assert_eq!(stats.business_count, 1);
		assert_eq!(stats.unique_domains, 2);
		assert_eq!(stats.total(), 2);
	}

	#[test]
	fn most_frequent_domain_wins() {
		let stats = summarize(&[
			record("A", "a@firma.de"),
			record("B", "b@gmail.com"),
			record("C", "c@GMAIL.com"),
		]);
		assert_eq!(stats.top_domain, Some(("gmail.com".to_string(), 2)));
		assert_eq!(stats.top_domain_label(), "gmail.com (2)");
		assert_eq!(stats.unique_domains, 2);
	}

	#[test]
	fn ties_go_to_first_seen_domain() {
		let stats = summarize(&[
			record("A", "a@zeta.de"),
			record("B", "b@alpha.de"),
			record("C", "c@alpha.de"),
			record("D", "d@zeta.de"),
		]);
		assert_eq!(stats.top_domain, Some(("zeta.de".to_string(), 2)));
	}

	#[test]
	fn public_and_business_cover_every_record() {
		let records = crate::records::bundled_records().expect("bundled data");
		let stats = summarize(&records);
		assert_eq!(stats.public_count + stats.business_count, records.len());
	}
}
