use medsearch::UiConfig;
use serde::Deserialize;

use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) placeholder: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) initial_question: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) ui: UiConfig,
	pub(super) theme_name: Option<String>,
	pub(super) initial_question: String,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(placeholder) = cli.placeholder.clone() {
			self.placeholder = Some(placeholder);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(question) = cli.initial_question.clone() {
			self.initial_question = Some(question);
		}
	}

	/// Fill unset text from the built-in defaults.
	pub(super) fn finalize(self) -> UiResolution {
		let mut ui = UiConfig::default();
		if let Some(title) = self.title {
			ui.heading = title;
		}
		if let Some(placeholder) = self.placeholder {
			ui.placeholder = placeholder;
		}

		UiResolution {
			ui,
			theme_name: self.theme,
			initial_question: self.initial_question.unwrap_or_default(),
		}
	}
}
