use std::time::{Duration, Instant};

use cafedir_core::{COPIED_WINDOW, Record};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;
use crate::clipboard::ClipboardWorker;

fn records() -> Vec<Record> {
	vec![
		Record::new("Zeta Café", "a@gmail.com", None, None),
		Record::new("Alpha Café", "b@firma.de", Some("https://firma.de"), None),
		Record::new("Mitte Bar", "c@mitte.de", None, Some("osm")),
	]
}

fn app() -> App<'static> {
	App::with_clipboard(records(), ClipboardWorker::with_copier(|_| Ok(())))
}

fn render(app: &mut App<'_>, now: Instant) -> Vec<String> {
	let backend = TestBackend::new(120, 12);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal
		.draw(|frame| app.draw_at(frame, now))
		.expect("draw frame");
	buffer_lines(terminal.backend().buffer())
}

fn buffer_lines(buf: &Buffer) -> Vec<String> {
	(0..buf.area.height)
		.map(|y| {
			let mut line = String::new();
			for x in 0..buf.area.width {
				line.push_str(buf[(x, y)].symbol());
			}
			line.trim_end().to_string()
		})
		.collect()
}

fn row_index(lines: &[String], needle: &str) -> usize {
	lines
		.iter()
		.position(|line| line.contains(needle))
		.unwrap_or_else(|| panic!("no line contains {needle:?}:\n{}", lines.join("\n")))
}

#[test]
fn stats_line_snapshot() {
	let mut app = app();
	let lines = render(&mut app, Instant::now());
	insta::assert_snapshot!(
		lines[1].trim(),
		@"3 shown of 3 · 3 domains · top firma.de (1) · public 1 · business 2"
	);
}

#[test]
fn rows_are_sorted_and_headers_shown() {
	let mut app = app();
	let lines = render(&mut app, Instant::now());

	let header = row_index(&lines, "Name");
	for column in ["Email", "Website", "Source"] {
		assert!(lines[header].contains(column), "missing header {column}");
	}

	let alpha = row_index(&lines, "Alpha Café");
	let mitte = row_index(&lines, "Mitte Bar");
	let zeta = row_index(&lines, "Zeta Café");
	assert!(header < alpha && alpha < mitte && mitte < zeta);
	assert!(lines[alpha].contains("▶"));
	assert!(lines[0].contains("[All providers]"));
}

#[test]
fn empty_result_shows_message_and_placeholder_stats() {
	let mut app = app();
	app.set_query("no such café");
	let lines = render(&mut app, Instant::now());

	row_index(&lines, "No results");
	assert!(lines[1].contains("0 shown of 3"));
	assert!(lines[1].contains("top —"));
}

#[test]
fn copied_marker_shows_until_window_closes() {
	let mut app = app();
	app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
		.expect("copy key");
	let result = app.clipboard.recv_result().expect("copy result");
	let copied_at = Instant::now();
	app.handle_copy_result(result, copied_at);

	let lines = render(&mut app, copied_at + Duration::from_millis(500));
	let status = lines.last().expect("status line");
	assert!(status.contains("✓ Copied b@firma.de"), "status: {status}");
	assert!(lines[row_index(&lines, "Alpha Café")].contains("✓ copied"));

	let lines = render(&mut app, copied_at + COPIED_WINDOW);
	let status = lines.last().expect("status line");
	assert!(!status.contains("Copied"));
	assert!(status.contains("Esc quit"));
}
