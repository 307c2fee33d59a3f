//! Memoized derived view over the static record list.

use crate::filter::{ProviderFilter, apply};
use crate::records::Record;
use crate::stats::{DomainStats, summarize};

/// Owns the records and caches the filtered rows and their statistics for
/// the last `(search term, provider filter)` pair.
#[derive(Debug, Clone)]
pub struct DirectoryView {
	records: Vec<Record>,
	key: Option<(String, ProviderFilter)>,
	filtered: Vec<Record>,
	stats: DomainStats,
}

impl DirectoryView {
	/// Build a view showing every record.
	pub fn new(records: Vec<Record>) -> Self {
		let mut view = Self {
			records,
			key: None,
			filtered: Vec::new(),
			stats: DomainStats::default(),
		};
		view.refresh("", ProviderFilter::All);
		view
	}

	/// Recompute the derived rows if the inputs changed. Returns whether a
	/// recomputation happened.
	pub fn refresh(&mut self, search_term: &str, provider: ProviderFilter) -> bool {
		if let Some((term, filter)) = &self.key
			&& term == search_term
			&& *filter == provider
		{
			return false;
		}

		self.filtered = apply(&self.records, search_term, provider);
		self.stats = summarize(&self.filtered);
		self.key = Some((search_term.to_string(), provider));
		true
	}

	pub fn filtered(&self) -> &[Record] {
		&self.filtered
	}

	pub fn stats(&self) -> &DomainStats {
		&self.stats
	}

	/// Size of the unfiltered record list.
	pub fn total(&self) -> usize {
		self.records.len()
	}
}
