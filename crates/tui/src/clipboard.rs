//! Clipboard access and the background worker that performs copies.
//!
//! Native tools run on the worker thread because their exit status confirms
//! the copy. OSC 52 cannot be confirmed and must go through the terminal
//! backend, so it is only built here and written by the UI thread.

use std::ffi::OsString;
use std::io::Write;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use base64::Engine;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
	#[error("no clipboard tool available")]
	Unavailable,
}

/// Copy text to the system clipboard with the first native tool that
/// succeeds (`wl-copy`, `xclip`, `xsel`, `pbcopy`).
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
	NativeClipboard::from_env().copy(text)
}

/// Escape sequence asking the terminal to store `text` in its clipboard.
///
/// Wrapped for passthrough when running inside tmux.
pub fn osc52_sequence(text: &str) -> String {
	let encoded = base64::engine::general_purpose::STANDARD.encode(text);
	if std::env::var_os("TMUX").is_some() {
		format!("\x1bPtmux;\x1b\x1b]52;c;{encoded}\x07\x1b\\")
	} else {
		format!("\x1b]52;c;{encoded}\x07")
	}
}

/// Native clipboard commands and where to look for them.
#[derive(Debug, Clone, Default)]
pub struct NativeClipboard {
	search_path: Option<OsString>,
	wayland: bool,
}

impl NativeClipboard {
	/// Use the process `PATH` and session type.
	pub fn from_env() -> Self {
		Self {
			search_path: None,
			wayland: std::env::var_os("WAYLAND_DISPLAY").is_some(),
		}
	}

	/// Resolve the tools in `path` instead of the process `PATH`.
	pub fn with_search_path(mut self, path: impl Into<OsString>) -> Self {
		self.search_path = Some(path.into());
		self
	}

	pub fn copy(&self, text: &str) -> Result<(), ClipboardError> {
		if self.wayland && self.run("wl-copy", &[], text) {
			return Ok(());
		}
		if self.run("xclip", &["-selection", "clipboard"], text) {
			return Ok(());
		}
		if self.run("xsel", &["--clipboard", "--input"], text) {
			return Ok(());
		}
		if self.run("pbcopy", &[], text) {
			return Ok(());
		}
		Err(ClipboardError::Unavailable)
	}

	fn run(&self, cmd: &str, args: &[&str], text: &str) -> bool {
		let mut command = Command::new(cmd);
		command
			.args(args)
			.stdin(Stdio::piped())
			.stdout(Stdio::null())
			.stderr(Stdio::null());
		if let Some(path) = &self.search_path {
			command.env("PATH", path);
		}
		let Ok(mut child) = command.spawn() else {
			return false;
		};

		let written = child
			.stdin
			.take()
			.is_some_and(|mut stdin| stdin.write_all(text.as_bytes()).is_ok());
		let status = child.wait();
		let copied = written && status.is_ok_and(|status| status.success());
		if !copied {
			log::debug!("{cmd} did not take the clipboard contents");
		}
		copied
	}
}

/// Completion report for one copy request.
#[derive(Debug)]
pub struct CopyResult {
	pub email: String,
	pub outcome: Result<(), ClipboardError>,
}

type CopyFn = Box<dyn Fn(&str) -> Result<(), ClipboardError> + Send>;

/// Runs clipboard writes off the UI thread and hands results back through a
/// channel.
pub struct ClipboardWorker {
	requests: Option<Sender<String>>,
	results: Receiver<CopyResult>,
	handle: Option<JoinHandle<()>>,
}

impl ClipboardWorker {
	/// Spawn a worker writing to the system clipboard.
	pub fn spawn() -> Self {
		Self::with_copier(copy_to_clipboard)
	}

	/// Spawn a worker that uses `copy` instead of the system clipboard.
	pub fn with_copier<F>(copy: F) -> Self
	where
		F: Fn(&str) -> Result<(), ClipboardError> + Send + 'static,
	{
		let (request_tx, request_rx) = mpsc::channel::<String>();
		let (result_tx, result_rx) = mpsc::channel();
		let copy: CopyFn = Box::new(copy);

		let handle = thread::spawn(move || {
			while let Ok(email) = request_rx.recv() {
				let outcome = copy(&email);
				if result_tx.send(CopyResult { email, outcome }).is_err() {
					break;
				}
			}
		});

		Self {
			requests: Some(request_tx),
			results: result_rx,
			handle: Some(handle),
		}
	}

	/// Queue a copy. The result arrives later through [`Self::try_results`].
	pub fn request(&self, email: &str) {
		let Some(requests) = &self.requests else {
			return;
		};
		if requests.send(email.to_string()).is_err() {
			log::warn!("clipboard worker stopped; dropping copy of {email}");
		}
	}

	/// Drain every result that has completed so far.
	pub fn try_results(&self) -> Vec<CopyResult> {
		self.results.try_iter().collect()
	}

	/// Block until the next result arrives. Used by tests.
	pub fn recv_result(&self) -> Option<CopyResult> {
		self.results.recv().ok()
	}

	pub fn shutdown(&mut self) {
		self.requests.take();
		if let Some(handle) = self.handle.take()
			&& handle.join().is_err()
		{
			log::error!("clipboard worker panicked");
		}
	}
}

impl Drop for ClipboardWorker {
	fn drop(&mut self) {
		self.shutdown();
	}
}
