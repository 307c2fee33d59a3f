use std::path::Path;

use anyhow::Result;
use cafedir_core::{DirectoryView, ProviderFilter, classify};
use cafedir_tui::SessionSummary;
use serde_json::json;

/// Print the filtered records followed by the domain summary.
pub(crate) fn print_plain(view: &DirectoryView) {
	print!("{}", format_plain(view));
}

pub(crate) fn format_plain(view: &DirectoryView) -> String {
	let mut out = String::new();
	for record in view.filtered() {
		let mut line = format!("{}\t{}", record.name, record.email);
		if let Some(website) = &record.website {
			line.push('\t');
			line.push_str(website);
		}
		out.push_str(&line);
		out.push('\n');
	}

	let stats = view.stats();
	out.push_str(&format!(
		"{} shown of {} · {} domains · top {} · public {} · business {}\n",
		view.filtered().len(),
		view.total(),
		stats.unique_domains,
		stats.top_domain_label(),
		stats.public_count,
		stats.business_count,
	));
	out
}

/// Format the filtered records and stats as a JSON document.
pub(crate) fn format_view_json(
	view: &DirectoryView,
	query: &str,
	provider: ProviderFilter,
) -> Result<String> {
	let records: Vec<_> = view
		.filtered()
		.iter()
		.map(|record| {
			json!({
				"name": record.name,
				"email": record.email,
				"website": record.website,
				"source": record.source,
				"domain": record.domain(),
				"provider": classify(&record.email),
			})
		})
		.collect();

	let payload = json!({
		"query": query,
		"provider": provider,
		"total": view.total(),
		"records": records,
		"stats": view.stats(),
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_view_json(
	view: &DirectoryView,
	query: &str,
	provider: ProviderFilter,
) -> Result<()> {
	println!("{}", format_view_json(view, query, provider)?);
	Ok(())
}

/// Report where a headless export went.
pub(crate) fn print_export(path: &Path, rows: usize, json_output: bool) -> Result<()> {
	if json_output {
		let payload = json!({ "path": path, "rows": rows });
		println!("{}", serde_json::to_string_pretty(&payload)?);
	} else {
		println!("Exported {rows} rows to {}", path.display());
	}
	Ok(())
}

/// Print what happened during an interactive session.
pub(crate) fn print_summary(summary: &SessionSummary, json_output: bool) -> Result<()> {
	if json_output {
		println!("{}", serde_json::to_string_pretty(summary)?);
		return Ok(());
	}

	for path in &summary.exports {
		println!("Exported {}", path.display());
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use cafedir_core::Record;
	use serde_json::Value;

	use super::*;

	fn view() -> DirectoryView {
		DirectoryView::new(vec![
			Record::new("Zeta Café", "a@gmail.com", None, None),
			Record::new("Alpha Café", "b@firma.de", Some("https://firma.de"), None),
		])
	}

	#[test]
	fn plain_output_lists_rows_then_stats() {
		let text = format_plain(&view());
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines[0], "Alpha Café\tb@firma.de\thttps://firma.de");
		assert_eq!(lines[1], "Zeta Café\ta@gmail.com");
		assert_eq!(
			lines[2],
			"2 shown of 2 · 2 domains · top firma.de (1) · public 1 · business 1"
		);
	}

	#[test]
	fn json_output_includes_stats_and_classification() {
		let mut view = view();
		view.refresh("", ProviderFilter::Public);
		let json = format_view_json(&view, "", ProviderFilter::Public).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");

		assert_eq!(value["provider"], "public");
		assert_eq!(value["total"], 2);
		assert_eq!(value["records"][0]["name"], "Zeta Café");
		assert_eq!(value["records"][0]["provider"], "public");
		assert_eq!(value["records"][0]["website"], Value::Null);
		assert_eq!(value["stats"]["public_count"], 1);
		assert_eq!(value["stats"]["business_count"], 0);
		assert_eq!(value["stats"]["top_domain"][0], "gmail.com");
	}
}
