/// Human-readable labels rendered around the directory table.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Placeholder shown while the search input is empty.
	pub search_placeholder: String,
	/// Title of the bordered results table.
	pub table_title: String,
	/// Column headers, in `Name, Email, Website, Source` order.
	pub headers: Vec<String>,
	/// Message rendered when no record matches.
	pub empty_message: String,
	/// Key hints shown in the status line when nothing else is displayed.
	pub hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			search_placeholder: "Search name, email, website or source".to_string(),
			table_title: "Cafés".to_string(),
			headers: ["Name", "Email", "Website", "Source"]
				.into_iter()
				.map(String::from)
				.collect(),
			empty_message: "No results".to_string(),
			hint: "Tab provider · Ctrl+R reset · Enter copy email · Ctrl+S export CSV · Esc quit"
				.to_string(),
		}
	}
}

impl UiLabels {
	/// Replace the column headers, ignoring blank entries.
	#[must_use]
	pub fn with_headers<I, S>(mut self, headers: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let headers: Vec<String> = headers
			.into_iter()
			.map(Into::into)
			.map(|header| header.trim().to_string())
			.filter(|header| !header.is_empty())
			.collect();
		if !headers.is_empty() {
			self.headers = headers;
		}
		self
	}

	#[must_use]
	pub fn with_table_title(mut self, title: impl Into<String>) -> Self {
		self.table_title = title.into();
		self
	}
}
