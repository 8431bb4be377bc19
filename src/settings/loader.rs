use anyhow::{Context, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::{build_config, config_files, describe};
use crate::cli::CliArgs;

/// Load configuration by combining config files, `MEDSEARCH__*` environment
/// variables and CLI arguments, in increasing precedence.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let files = config_files(cli);
	let mut raw: RawConfig = build_config(&files)?
		.try_deserialize()
		.with_context(|| format!("failed to deserialize configuration from {}", describe(&files)))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli).map_err(|err| {
		let key = err.key();
		anyhow::Error::new(err).context(format!("medsearch cannot start until `{key}` is fixed"))
	})
}
