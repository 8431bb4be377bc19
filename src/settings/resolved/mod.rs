use medsearch::{Theme, UiConfig};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};
pub(super) use validation::{resolve_theme, validate_base_url};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub api_base_url: String,
	pub theme_name: Option<String>,
	pub theme: Theme,
	pub ui: UiConfig,
	pub initial_question: String,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
