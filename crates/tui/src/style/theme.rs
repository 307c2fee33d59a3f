use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for the UI elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Style for headers and borders.
	pub header: Style,
	/// Style for the selected row.
	pub row_highlight: Style,
	/// Style for the prompt and filter badge.
	pub prompt: Style,
	/// Style for placeholders, hints and empty states.
	pub empty: Style,
	/// Style for search matches inside cells.
	pub highlight: Style,
	/// Style for the "copied" indicator.
	pub copied: Style,
}

impl Theme {
	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		Style::default().fg(self.header.fg.unwrap_or(Color::Reset))
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

const DEFAULT_THEME: &str = "default";

fn dark() -> Theme {
	Theme {
		header: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
		row_highlight: Style::new().bg(Color::Rgb(45, 52, 64)),
		prompt: Style::new().fg(Color::Yellow),
		empty: Style::new().fg(Color::DarkGray),
		highlight: Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD),
		copied: Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
	}
}

fn light() -> Theme {
	Theme {
		header: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
		row_highlight: Style::new().bg(Color::Rgb(220, 228, 240)),
		prompt: Style::new().fg(Color::Rgb(150, 90, 0)),
		empty: Style::new().fg(Color::Gray),
		highlight: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
		copied: Style::new().fg(Color::Rgb(0, 120, 0)).add_modifier(Modifier::BOLD),
	}
}

fn high_contrast() -> Theme {
	Theme {
		header: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
		row_highlight: Style::new().add_modifier(Modifier::REVERSED),
		prompt: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
		empty: Style::new().fg(Color::Gray),
		highlight: Style::new()
			.fg(Color::Yellow)
			.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
		copied: Style::new().fg(Color::LightGreen).add_modifier(Modifier::BOLD),
	}
}

/// All builtin themes, in display order.
#[must_use]
pub fn builtin_themes() -> Vec<(&'static str, Theme)> {
	vec![
		(DEFAULT_THEME, dark()),
		("light", light()),
		("high-contrast", high_contrast()),
	]
}

#[must_use]
pub fn names() -> Vec<&'static str> {
	builtin_themes().into_iter().map(|(name, _)| name).collect()
}

/// Look up a theme by name. Matching ignores case and treats `_` like `-`.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = name.trim().to_ascii_lowercase().replace('_', "-");
	let wanted = match wanted.as_str() {
		"dark" => DEFAULT_THEME.to_string(),
		_ => wanted,
	};
	builtin_themes()
		.into_iter()
		.find(|(name, _)| *name == wanted)
		.map(|(_, theme)| theme)
}

#[must_use]
pub fn default_theme() -> Theme {
	dark()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lookup_is_case_and_separator_insensitive() {
		assert_eq!(by_name("High_Contrast"), Some(high_contrast()));
		assert_eq!(by_name("dark"), Some(default_theme()));
		assert!(by_name("solarized").is_none());
	}

	#[test]
	fn names_list_every_builtin() {
		assert_eq!(names(), ["default", "light", "high-contrast"]);
	}
}
