//! The "just copied" indicator and its expiry window.

use std::time::{Duration, Instant};

/// How long a copied address stays highlighted.
pub const COPIED_WINDOW: Duration = Duration::from_secs(2);

/// Most recently copied email together with the instant it stops showing.
///
/// Marking again replaces both the value and the deadline, so the window
/// always belongs to the latest copy.
#[derive(Debug, Clone, Default)]
pub struct CopiedMarker {
	current: Option<(String, Instant)>,
}

impl CopiedMarker {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn mark(&mut self, email: impl Into<String>, now: Instant) {
		self.current = Some((email.into(), now + COPIED_WINDOW));
	}

	/// The copied email if its window is still open at `now`.
	pub fn current(&self, now: Instant) -> Option<&str> {
		match &self.current {
			Some((email, expires_at)) if now < *expires_at => Some(email.as_str()),
			_ => None,
		}
	}

	pub fn is_copied(&self, email: &str, now: Instant) -> bool {
		self.current(now) == Some(email)
	}

	/// Drop an expired marker. Returns `true` when something was cleared.
	pub fn prune(&mut self, now: Instant) -> bool {
		let expired = matches!(&self.current, Some((_, expires_at)) if now >= *expires_at);
		if expired {
			self.current = None;
		}
		expired
	}
}
