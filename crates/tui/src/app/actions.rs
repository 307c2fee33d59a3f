use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::state::SessionSummary;
use crate::components::visible_rows;

const DEFAULT_PAGE: usize = 10;

impl<'a> App<'a> {
	/// Process a keyboard event and return a summary if the user exits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SessionSummary>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Ok(Some(self.summary())),
			KeyCode::Char('c') if ctrl => return Ok(Some(self.summary())),
			KeyCode::Tab => {
				let next = self.provider_filter.cycle();
				self.set_provider_filter(next);
			}
			KeyCode::Char('r') if ctrl => self.reset_filters(),
			KeyCode::Char('s') if ctrl => self.export_visible(),
			KeyCode::Enter => self.copy_selected(),
			KeyCode::Char('y') if ctrl => self.copy_selected(),
			KeyCode::Up => self.move_selection_up(1),
			KeyCode::Down => self.move_selection_down(1),
			KeyCode::PageUp => self.move_selection_up(self.page_size()),
			KeyCode::PageDown => self.move_selection_down(self.page_size()),
			KeyCode::Home if ctrl || self.search_input.text().is_empty() => self.select_first(),
			KeyCode::End if ctrl || self.search_input.text().is_empty() => self.select_last(),
			_ => {
				if self.search_input.input(key) {
					self.status = None;
					self.refresh_view();
				}
			}
		}
		Ok(None)
	}

	fn page_size(&self) -> usize {
		self.results_area
			.map(visible_rows)
			.filter(|rows| *rows > 0)
			.unwrap_or(DEFAULT_PAGE)
	}

	fn move_selection_up(&mut self, step: usize) {
		if let Some(selected) = self.table_state.selected() {
			self.table_state.select(Some(selected.saturating_sub(step)));
		}
	}

	fn move_selection_down(&mut self, step: usize) {
		let len = self.filtered_len();
		if len == 0 {
			return;
		}
		let next = self
			.table_state
			.selected()
			.map_or(0, |selected| selected.saturating_add(step));
		self.table_state.select(Some(next.min(len - 1)));
	}

	fn select_first(&mut self) {
		if self.filtered_len() > 0 {
			self.table_state.select(Some(0));
		}
	}

	fn select_last(&mut self) {
		let len = self.filtered_len();
		if len > 0 {
			self.table_state.select(Some(len - 1));
		}
	}
}
