use serde::Deserialize;
use std::env;

use crate::cli::{API_URL_ENV, CliArgs};

use super::resolved::{
    ConfigError, ConfigSources, ResolvedConfig, SettingSource, resolve_theme, validate_base_url,
};

mod api;
mod ui;

use api::ApiSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    api: ApiSection,
    ui: UiSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.api.apply_cli_overrides(cli);
        self.ui.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig, ConfigError> {
        let sources = ConfigSources {
            api_base_url: base_url_source(
                cli.api_url.as_deref(),
                self.api.base_url.is_some(),
            ),
            ui_theme: detect_source(
                cli.theme.is_some(),
                self.ui.theme.is_some(),
                "MEDSEARCH__UI__THEME",
                "--theme",
                "ui.theme",
            ),
        };

        let api_base_url = validate_base_url(self.api.base_url, &sources)?;
        let theme = resolve_theme(self.ui.theme.as_deref(), &sources)?;
        let ui = self.ui.finalize();

        Ok(ResolvedConfig {
            api_base_url,
            theme_name: ui.theme_name,
            theme,
            ui: ui.ui,
            initial_question: ui.initial_question,
        })
    }
}

/// `--api-url` is also fed by clap from `MEDSEARCH_API_URL`, so a CLI value
/// that matches the variable is attributed to the environment.
fn base_url_source(cli_value: Option<&str>, value_present: bool) -> Option<SettingSource> {
    if let Some(value) = cli_value
        && env::var(API_URL_ENV).is_ok_and(|env_value| env_value == value)
    {
        return Some(SettingSource::Environment(API_URL_ENV));
    }
    detect_source(
        cli_value.is_some(),
        value_present,
        "MEDSEARCH__API__BASE_URL",
        "--api-url",
        "api.base_url",
    )
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
