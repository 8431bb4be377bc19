use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use config::{Config, ConfigError, Environment, File};

use crate::cli::CliArgs;
use medsearch::app_dirs;

/// Prefix for environment variables read by the configuration layer, as in
/// `MEDSEARCH__API__BASE_URL`.
pub(super) const ENV_PREFIX: &str = "medsearch";
const ENV_SEPARATOR: &str = "__";

/// A configuration file layer and whether it has to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ConfigFile {
	pub(super) path: PathBuf,
	pub(super) required: bool,
}

/// Files to merge, lowest precedence first. Defaults are optional; files
/// named with `--config` must exist.
pub(super) fn config_files(cli: &CliArgs) -> Vec<ConfigFile> {
	let mut files = Vec::new();

	if !cli.no_config {
		files.extend(default_config_files().into_iter().map(|path| ConfigFile {
			path,
			required: false,
		}));
	}

	files.extend(cli.config.iter().map(|path| ConfigFile {
		path: path.clone(),
		required: true,
	}));

	files
}

/// `MEDSEARCH__SECTION__KEY` variables. Single-underscore variables such as
/// `MEDSEARCH_LOG` or `MEDSEARCH_API_URL` are not configuration keys.
fn environment() -> Environment {
	Environment::with_prefix(ENV_PREFIX)
		.prefix_separator(ENV_SEPARATOR)
		.separator(ENV_SEPARATOR)
		.try_parsing(true)
}

/// Merge `files` and then the environment into a [`Config`].
pub(super) fn build_config(files: &[ConfigFile]) -> Result<Config> {
	let mut builder = Config::builder();

	for file in files {
		builder = builder.add_source(File::from(file.path.clone()).required(file.required));
	}

	builder = builder.add_source(environment());

	builder
		.build()
		.map_err(|err| match err {
			ConfigError::Frozen => anyhow!("configuration builder is frozen"),
			other => other.into(),
		})
		.with_context(|| format!("failed to read configuration from {}", describe(files)))
}

/// Human readable list of the layers that were consulted.
pub(super) fn describe(files: &[ConfigFile]) -> String {
	let mut layers: Vec<String> = files
		.iter()
		.filter(|file| file.required || file.path.exists())
		.map(|file| file.path.display().to_string())
		.collect();
	layers.push(format!("{}{ENV_SEPARATOR}* environment variables", ENV_PREFIX.to_uppercase()));
	layers.join(", ")
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".medsearch.toml"));
		files.push(current_dir.join("medsearch.toml"));
	}

	files
}
