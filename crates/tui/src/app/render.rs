use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::widgets::Paragraph;

use super::App;
use crate::components::{
	InputContext, RowStyles, StatusContext, TableSpec, build_record_rows, default_widths,
	render_input, render_status, render_table, stats_line,
};

impl App<'_> {
	/// Render the whole view as of `now`, which decides whether the copied
	/// marker is still shown.
	pub(crate) fn draw_at(&mut self, frame: &mut Frame, now: Instant) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(3),
				Constraint::Length(1),
			])
			.split(area);

		let input_ctx = InputContext {
			search_input: &self.search_input,
			placeholder: Some(self.labels.search_placeholder.as_str()),
			provider: self.provider_filter,
			area: layout[0],
			theme: &self.style.theme,
		};
		render_input(frame, input_ctx);

		let stats = stats_line(
			self.view.stats(),
			self.filtered_len(),
			self.view.total(),
			&self.style.theme,
		);
		frame.render_widget(Paragraph::new(stats), layout[1]);

		self.results_area = Some(layout[2]);
		self.render_results(frame, layout[2], now);

		let status_ctx = StatusContext {
			copied: self.copied.current(now),
			message: self.status.as_ref(),
			hint: &self.labels.hint,
			theme: &self.style.theme,
		};
		render_status(frame, layout[3], status_ctx);
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect, now: Instant) {
		let needle = self.search_input.text().trim().to_lowercase();
		let styles = RowStyles {
			highlight: self.style.theme.highlight_style(),
			copied: self.style.theme.copied,
		};
		let rows = build_record_rows(
			self.view.filtered(),
			&needle,
			self.copied.current(now),
			styles,
		);

		let spec = TableSpec {
			headers: self.labels.headers.clone(),
			widths: default_widths(),
			rows,
			title: Some(format!(" {} ", self.labels.table_title)),
			empty_message: Some(self.labels.empty_message.as_str()),
		};

		render_table(frame, area, &mut self.table_state, spec, &self.style.theme);
	}
}
