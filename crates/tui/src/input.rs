//! Single-line search input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Text input holding the free-text search term.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(tui_textarea::CursorMove::End);
		Self { textarea }
	}

	/// Current search term.
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Feed a key to the input. Returns `true` when the text changed.
	///
	/// Line breaks are ignored so the input stays on one line.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if matches!(key.code, KeyCode::Enter)
			|| (key.code == KeyCode::Char('m') && key.modifiers.contains(KeyModifiers::CONTROL))
		{
			return false;
		}

		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	/// Replace the contents, moving the cursor to the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let mut textarea = TextArea::new(vec![text.into()]);
		textarea.set_cursor_line_style(self.textarea.cursor_line_style());
		textarea.set_style(self.textarea.style());
		textarea.move_cursor(tui_textarea::CursorMove::End);
		self.textarea = textarea;
	}

	pub fn set_style(&mut self, style: Style) {
		self.textarea.set_style(style);
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_updates_text() {
		let mut input = SearchInput::new("");
		assert!(input.input(key(KeyCode::Char('f'))));
		assert!(input.input(key(KeyCode::Char('i'))));
		assert_eq!(input.text(), "fi");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "f");
	}

	#[test]
	fn enter_does_not_split_lines() {
		let mut input = SearchInput::new("café");
		assert!(!input.input(key(KeyCode::Enter)));
		assert_eq!(input.text(), "café");
	}

	#[test]
	fn initial_text_keeps_cursor_at_end() {
		let mut input = SearchInput::new("caf");
		input.input(key(KeyCode::Char('e')));
		assert_eq!(input.text(), "cafe");

		input.set_text("");
		assert_eq!(input.text(), "");
	}
}
