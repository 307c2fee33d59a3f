use cafedir_core::DomainStats;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

/// Transient message shown in the bottom line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
	Info(String),
	Error(String),
}

impl StatusMessage {
	pub fn text(&self) -> &str {
		match self {
			StatusMessage::Info(text) | StatusMessage::Error(text) => text,
		}
	}
}

/// Summary line: visible rows, domains, top domain and provider split.
#[must_use]
pub fn stats_line<'a>(stats: &DomainStats, shown: usize, total: usize, theme: &Theme) -> Line<'a> {
	let muted = theme.empty_style();
	let value = theme.prompt;
	Line::from(vec![
		Span::styled(format!("{shown}"), value),
		Span::styled(format!(" shown of {total} · "), muted),
		Span::styled(format!("{}", stats.unique_domains), value),
		Span::styled(" domains · top ", muted),
		Span::styled(stats.top_domain_label(), value),
		Span::styled(" · public ", muted),
		Span::styled(format!("{}", stats.public_count), value),
		Span::styled(" · business ", muted),
		Span::styled(format!("{}", stats.business_count), value),
	])
}

/// Argument bundle for the bottom status line.
pub struct StatusContext<'a> {
	pub copied: Option<&'a str>,
	pub message: Option<&'a StatusMessage>,
	pub hint: &'a str,
	pub theme: &'a Theme,
}

/// Render the status line. A live copy marker wins over other messages,
/// which in turn replace the key hint.
pub fn render_status(frame: &mut Frame, area: Rect, context: StatusContext<'_>) {
	let StatusContext {
		copied,
		message,
		hint,
		theme,
	} = context;

	let line = if let Some(email) = copied {
		Line::from(vec![
			Span::styled("✓ Copied ", theme.copied),
			Span::styled(email.to_string(), theme.prompt),
		])
	} else if let Some(message) = message {
		let style = match message {
			StatusMessage::Info(_) => theme.prompt,
			StatusMessage::Error(_) => Style::new().fg(ratatui::style::Color::Red),
		};
		Line::from(Span::styled(message.text().to_string(), style))
	} else {
		Line::from(Span::styled(hint.to_string(), theme.empty_style()))
	};

	frame.render_widget(Paragraph::new(line), area);
}
