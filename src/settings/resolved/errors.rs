use thiserror::Error;

use super::SettingSource;

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
	#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
	Invalid {
		key: &'static str,
		value: String,
		origin: SettingSource,
		reason: String,
	},
	#[error("missing value for {key}: {hint}")]
	Missing {
		key: &'static str,
		hint: &'static str,
	},
}

impl ConfigError {
	pub(crate) fn invalid<V, R>(key: &'static str, value: V, origin: SettingSource, reason: R) -> Self
	where
		V: Into<String>,
		R: Into<String>,
	{
		Self::Invalid {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}

	pub(crate) fn key(&self) -> &'static str {
		match self {
			Self::Invalid { key, .. } | Self::Missing { key, .. } => key,
		}
	}
}
