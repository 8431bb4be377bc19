use serde::Deserialize;

use crate::cli::CliArgs;

/// Service connection values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ApiSection {
	pub(super) base_url: Option<String>,
}

impl ApiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.api_url.clone() {
			self.base_url = Some(url);
		}
	}
}
