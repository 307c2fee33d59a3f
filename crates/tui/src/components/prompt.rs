use cafedir_core::ProviderFilter;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use crate::input::SearchInput;
use crate::style::Theme;

/// Argument bundle for rendering the input area.
pub struct InputContext<'a> {
	/// The search input widget.
	pub search_input: &'a SearchInput<'a>,
	/// Placeholder text shown when input is empty.
	pub placeholder: Option<&'a str>,
	/// Active provider filter, shown right-aligned.
	pub provider: ProviderFilter,
	/// Rendering area.
	pub area: Rect,
	/// Color theme.
	pub theme: &'a Theme,
}

/// Render the input row with optional placeholder and the filter badge.
pub fn render_input(frame: &mut ratatui::Frame, input: InputContext<'_>) {
	let InputContext {
		search_input,
		placeholder,
		provider,
		area,
		theme,
	} = input;

	search_input.render_textarea(frame, area);

	if search_input.text().is_empty()
		&& let Some(placeholder_text) = placeholder
	{
		render_placeholder(frame, area, placeholder_text, theme);
	}

	render_filter_badge(frame, area, provider, theme);
}

fn render_placeholder(frame: &mut ratatui::Frame, area: Rect, text: &str, theme: &Theme) {
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}
	// Leave the first cell for the cursor.
	let start = area.left().saturating_add(1);
	let width = area.width.saturating_sub(1);
	let mut used = 0;
	let display_text: String = text
		.chars()
		.take_while(|ch| {
			used += ch.width().unwrap_or(0);
			used <= usize::from(width)
		})
		.collect();
	frame.buffer_mut().set_line(
		start,
		area.top(),
		&Line::from(Span::styled(display_text, theme.empty_style())),
		width,
	);
}

/// Draw `[provider label]` at the right edge of the input row, never on top
/// of typed text.
fn render_filter_badge(
	frame: &mut ratatui::Frame,
	area: Rect,
	provider: ProviderFilter,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let line = Line::from(vec![
		Span::styled("[", theme.empty_style()),
		Span::styled(provider.label(), theme.prompt),
		Span::styled("]", theme.empty_style()),
	]);
	let line_width = line.width() as u16;

	let buffer = frame.buffer_mut();
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());

	let input_row = area.top();
	let mut last_char_x: Option<u16> = None;
	for x in area.left()..area.right() {
		if let Some(cell) = buffer.cell((x, input_row))
			&& !cell.symbol().trim().is_empty()
		{
			last_char_x = Some(x);
		}
	}

	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}

	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, input_row, &line, max_width);
}
