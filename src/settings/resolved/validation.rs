use medsearch::ui::style::{self, Theme};

use super::{ConfigError, ConfigSources};

const BASE_URL_HINT: &str =
	"pass --api-url, set MEDSEARCH_API_URL, or add api.base_url to a config file";

/// Require a non-blank base URL. Its shape is deliberately not checked.
pub(crate) fn validate_base_url(
	value: Option<String>,
	sources: &ConfigSources,
) -> Result<String, ConfigError> {
	match value {
		None => Err(ConfigError::Missing {
			key: "api.base_url",
			hint: BASE_URL_HINT,
		}),
		Some(url) if url.trim().is_empty() => Err(ConfigError::invalid(
			"api.base_url",
			url,
			sources.source_for_base_url(),
			"must not be empty",
		)),
		Some(url) => Ok(url),
	}
}

/// Map a theme name onto a built-in theme, defaulting when unset.
pub(crate) fn resolve_theme(
	name: Option<&str>,
	sources: &ConfigSources,
) -> Result<Theme, ConfigError> {
	let Some(name) = name else {
		return Ok(style::default_theme());
	};
	style::by_name(name).ok_or_else(|| {
		ConfigError::invalid(
			"ui.theme",
			name,
			sources.source_for_theme(),
			format!("unknown theme; expected one of {}", style::names().join(", ")),
		)
	})
}
