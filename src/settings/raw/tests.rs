use std::io::Write;

use clap::Parser;
use medsearch::UiConfig;
use medsearch::ui::style;

use super::RawConfig;
use crate::cli::CliArgs;
use crate::settings::testing::with_env;

fn cli(args: &[&str]) -> CliArgs {
    let mut argv = vec!["medsearch"];
    argv.extend_from_slice(args);
    CliArgs::parse_from(argv)
}

#[test]
fn cli_overrides_take_precedence() {
    let mut cli = cli(&["--no-config"]);
    cli.api_url = Some("http://cli:1".into());
    cli.title = Some("title".into());
    cli.placeholder = Some("ask".into());
    cli.theme = Some("light".into());
    cli.initial_question = Some("query".into());

    let mut config = RawConfig::default();
    config.api.base_url = Some("http://file:2".into());
    config.ui.theme = Some("solarized".into());
    config.apply_cli_overrides(&cli);

    assert_eq!(config.api.base_url, cli.api_url);
    assert_eq!(config.ui.title, cli.title);
    assert_eq!(config.ui.placeholder, cli.placeholder);
    assert_eq!(config.ui.theme, cli.theme);
    assert_eq!(config.ui.initial_question, cli.initial_question);
}

#[test]
fn resolve_fills_ui_defaults() {
    let cli = cli(&["--no-config"]);
    let mut config = RawConfig::default();
    config.api.base_url = Some("http://localhost:8000".into());

    let resolved = config.resolve(&cli).expect("resolves");
    assert_eq!(resolved.api_base_url, "http://localhost:8000");
    assert_eq!(resolved.ui, UiConfig::default());
    assert_eq!(resolved.theme, style::default_theme());
    assert_eq!(resolved.theme_name, None);
    assert!(resolved.initial_question.is_empty());
}

#[test]
fn resolve_applies_title_and_placeholder() {
    let cli = cli(&["--no-config"]);
    let mut config = RawConfig::default();
    config.api.base_url = Some("http://localhost:8000".into());
    config.ui.title = Some("Cardiology".into());
    config.ui.placeholder = Some("Ask about hearts".into());

    let resolved = config.resolve(&cli).expect("resolves");
    assert_eq!(resolved.ui.heading, "Cardiology");
    assert_eq!(resolved.ui.placeholder, "Ask about hearts");
    assert_eq!(resolved.ui.window_title, UiConfig::default().window_title);
}

#[test]
fn resolve_requires_base_url() {
    let cli = cli(&["--no-config"]);
    let err = RawConfig::default().resolve(&cli).unwrap_err();
    assert!(err.to_string().contains("api.base_url"));
}

#[test]
fn resolve_rejects_unknown_theme_from_config_key() {
    let cli = cli(&["--no-config"]);
    let mut config = RawConfig::default();
    config.api.base_url = Some("http://localhost:8000".into());
    config.ui.theme = Some("neon".into());

    let err = config.resolve(&cli).unwrap_err().to_string();
    assert!(err.contains("ui.theme"));
    assert!(err.contains("neon"));
}

#[test]
fn config_file_values_deserialize() {
    let mut file = tempfile::NamedTempFile::with_suffix(".toml").expect("temp file");
    writeln!(
        file,
        "[api]\nbase_url = \"http://papers:9000\"\n\n[ui]\ntheme = \"light\"\ninitial_question = \"statins\""
    )
    .expect("write config");

    let raw: RawConfig = config::Config::builder()
        .add_source(config::File::from(file.path()).required(true))
        .build()
        .expect("builds")
        .try_deserialize()
        .expect("deserializes");

    let resolved = raw.resolve(&cli(&["--no-config"])).expect("resolves");
    assert_eq!(resolved.api_base_url, "http://papers:9000");
    assert_eq!(resolved.theme_name.as_deref(), Some("light"));
    assert_eq!(resolved.initial_question, "statins");
}

fn blank_base_url_error(args: &[&str], vars: &[(&str, Option<&str>)]) -> String {
    with_env(vars, || {
        let cli = cli(args);
        let mut config = RawConfig::default();
        config.apply_cli_overrides(&cli);
        config.resolve(&cli).unwrap_err().to_string()
    })
}

#[test]
fn blank_url_from_api_url_variable_is_attributed_to_it() {
    let err = blank_base_url_error(
        &["--no-config"],
        &[("MEDSEARCH_API_URL", Some("  ")), ("MEDSEARCH__API__BASE_URL", None)],
    );
    assert!(err.contains("environment variable `MEDSEARCH_API_URL`"), "{err}");
}

#[test]
fn blank_url_from_flag_is_attributed_to_flag() {
    let err = blank_base_url_error(
        &["--no-config", "--api-url", " "],
        &[("MEDSEARCH_API_URL", None), ("MEDSEARCH__API__BASE_URL", None)],
    );
    assert!(err.contains("CLI flag `--api-url`"), "{err}");
}

#[test]
fn blank_url_from_nested_variable_is_attributed_to_it() {
    let err = with_env(
        &[("MEDSEARCH_API_URL", None), ("MEDSEARCH__API__BASE_URL", Some(""))],
        || {
            let cli = cli(&["--no-config"]);
            let mut config = RawConfig::default();
            config.api.base_url = Some(String::new());
            config.resolve(&cli).unwrap_err().to_string()
        },
    );
    assert!(err.contains("environment variable `MEDSEARCH__API__BASE_URL`"), "{err}");
}
