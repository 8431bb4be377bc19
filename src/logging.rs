//! Tracing subscriber setup.
//!
//! The terminal UI owns stdout, so interactive sessions log to a file in the
//! data directory. One-shot runs log to stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Environment variable holding the `EnvFilter` directives.
pub const LOG_ENV: &str = "MEDSEARCH_LOG";
const DEFAULT_DIRECTIVES: &str = "warn";
const LOG_FILE_NAME: &str = "medsearch.log";

fn env_filter() -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Default log file location inside the data directory.
pub fn default_log_path() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Install a subscriber that appends to `path`, creating parent directories.
pub fn init_file(path: &Path) -> Result<()> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	tracing_subscriber::fmt()
		.with_env_filter(env_filter())
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

/// Install a subscriber that writes to stderr.
pub fn init_stderr() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(env_filter())
		.with_writer(std::io::stderr)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
