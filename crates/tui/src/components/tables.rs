use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 1;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	/// Column headers.
	pub headers: Vec<String>,
	/// Column width constraints.
	pub widths: Vec<Constraint>,
	/// Rendered table rows.
	pub rows: Vec<Row<'a>>,
	/// Optional title for the bordered table.
	pub title: Option<String>,
	/// Message shown in place of rows when there are none.
	pub empty_message: Option<&'a str>,
}

/// Column widths for the `Name, Email, Website, Source` layout.
#[must_use]
pub fn default_widths() -> Vec<Constraint> {
	vec![
		Constraint::Fill(3),
		Constraint::Fill(3),
		Constraint::Fill(3),
		Constraint::Fill(2),
	]
}

/// Render a bordered table with a header row.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let mut block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border_style());

	if let Some(title) = spec.title.clone() {
		block = block.title(title);
	}

	let inner = block.inner(area);
	frame.render_widget(block, area);

	let header_cells = spec.headers.into_iter().map(Cell::from).collect::<Vec<_>>();
	let header = Row::new(header_cells)
		.style(theme.header)
		.height(1)
		.bottom_margin(1);

	let mut widths = spec.widths;
	if widths.is_empty() {
		widths = vec![Constraint::Fill(1)];
	}

	let is_empty = spec.rows.is_empty();
	let table = Table::new(spec.rows, widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, inner, table_state);

	if is_empty
		&& let Some(message) = spec.empty_message
		&& inner.height > TABLE_HEADER_ROWS
	{
		let message_area = Rect {
			y: inner.y + TABLE_HEADER_ROWS,
			height: inner.height - TABLE_HEADER_ROWS,
			..inner
		};
		let empty = Paragraph::new(message)
			.style(theme.empty_style())
			.alignment(Alignment::Center);
		frame.render_widget(empty, message_area);
	}
}

/// Number of data rows visible inside a bordered table of `area`.
#[must_use]
pub fn visible_rows(area: Rect) -> usize {
	usize::from(area.height.saturating_sub(2 + TABLE_HEADER_ROWS))
}
