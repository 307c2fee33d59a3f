use cafedir_core::Record;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};

/// Styles applied while building rows.
#[derive(Debug, Clone, Copy)]
pub struct RowStyles {
	/// Style for search matches.
	pub highlight: Style,
	/// Style for the email cell of the row that was just copied.
	pub copied: Style,
}

/// Build table rows for the visible records.
///
/// `needle` is the trimmed, lower-cased search term; matches inside each cell
/// are highlighted. The email of the row whose address equals `copied` gets a
/// trailing marker.
#[must_use]
pub fn build_record_rows<'a>(
	records: &'a [Record],
	needle: &str,
	copied: Option<&str>,
	styles: RowStyles,
) -> Vec<Row<'a>> {
	records
		.iter()
		.map(|record| {
			let email = if copied == Some(record.email.as_str()) {
				let mut line = highlight_line(&record.email, needle, styles.highlight);
				line.spans.push(Span::styled(" ✓ copied", styles.copied));
				line
			} else {
				highlight_line(&record.email, needle, styles.highlight)
			};

			Row::new([
				Cell::from(highlight_line(&record.name, needle, styles.highlight)),
				Cell::from(email),
				Cell::from(highlight_line(
					record.website.as_deref().unwrap_or_default(),
					needle,
					styles.highlight,
				)),
				Cell::from(highlight_line(
					record.source.as_deref().unwrap_or_default(),
					needle,
					styles.highlight,
				)),
			])
		})
		.collect()
}

/// Split `text` into spans, styling every case-insensitive occurrence of
/// `needle`.
#[must_use]
pub fn highlight_line<'a>(text: &'a str, needle: &str, style: Style) -> Line<'a> {
	let marks = match_mask(text, needle);
	if !marks.iter().any(|&marked| marked) {
		return Line::from(text);
	}

	let mut spans = Vec::new();
	let mut start = 0;
	let mut current = marks[0];
	for (idx, ((byte, _), &marked)) in text.char_indices().zip(&marks).enumerate() {
		if idx > 0 && marked != current {
			spans.push(styled(&text[start..byte], current, style));
			start = byte;
			current = marked;
		}
	}
	spans.push(styled(&text[start..], current, style));
	Line::from(spans)
}

fn styled(text: &str, marked: bool, style: Style) -> Span<'_> {
	if marked {
		Span::styled(text, style)
	} else {
		Span::raw(text)
	}
}

/// One flag per char of `text`, set for chars covered by a match.
fn match_mask(text: &str, needle: &str) -> Vec<bool> {
	let mut mask = vec![false; text.chars().count()];
	let needle: Vec<char> = needle.chars().collect();
	if needle.is_empty() {
		return mask;
	}

	// Lowering can expand a char, so remember which source char each folded
	// char came from.
	let mut folded = Vec::new();
	let mut origin = Vec::new();
	for (idx, ch) in text.chars().enumerate() {
		for lower in ch.to_lowercase() {
			folded.push(lower);
			origin.push(idx);
		}
	}

	if folded.len() < needle.len() {
		return mask;
	}
	for start in 0..=folded.len() - needle.len() {
		if folded[start..start + needle.len()] == needle[..] {
			for &source in &origin[start..start + needle.len()] {
				mask[source] = true;
			}
		}
	}
	mask
}

#[cfg(test)]
mod tests {
	use ratatui::style::Color;

	use super::*;

	fn contents(line: &Line<'_>) -> Vec<(String, bool)> {
		line.spans
			.iter()
			.map(|span| (span.content.to_string(), span.style.fg == Some(Color::Red)))
			.collect()
	}

	#[test]
	fn highlights_case_insensitive_matches() {
		let style = Style::new().fg(Color::Red);
		let line = highlight_line("Café Firma", "firma", style);
		assert_eq!(
			contents(&line),
			[("Café ".to_string(), false), ("Firma".to_string(), true)]
		);
	}

	#[test]
	fn no_match_keeps_single_span() {
		let line = highlight_line("Bäckerei", "xyz", Style::new());
		assert_eq!(line.spans.len(), 1);
	}

	#[test]
	fn multibyte_text_splits_on_char_boundaries() {
		let style = Style::new().fg(Color::Red);
		let line = highlight_line("Ölmühle Ö", "ö", style);
		assert_eq!(
			contents(&line),
			[
				("Ö".to_string(), true),
				("lmühle ".to_string(), false),
				("Ö".to_string(), true),
			]
		);
	}
}
