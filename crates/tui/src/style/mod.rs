//! Visual styling utilities.
//!
//! Themes hold the color scheme applied to the terminal UI. [`StyleConfig`]
//! wraps the active theme so further styling knobs can sit next to it.

pub mod theme;

pub use theme::{Theme, builtin_themes, by_name, default_theme, names};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}
