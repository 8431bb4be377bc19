mod cli;
mod settings;

use std::process::ExitCode;

use anyhow::Result;
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};
use medsearch::{App, HttpBackend, QueryStatus, logging, run_once};
use settings::ResolvedConfig;

fn main() -> Result<ExitCode> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in medsearch::ui::style::names() {
			println!("{name}");
		}
		return Ok(ExitCode::SUCCESS);
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let backend = HttpBackend::new(&resolved.api_base_url)?;

	match cli.question.as_deref() {
		Some(question) => ask_once(&backend, question, cli.output),
		None => run_interactive(backend, &cli, resolved),
	}
}

/// Submit a single question without the terminal UI and print the outcome.
fn ask_once(backend: &HttpBackend, question: &str, format: OutputFormat) -> Result<ExitCode> {
	logging::init_stderr()?;

	let state = run_once(backend, question);
	print_status(state.status(), format)?;

	Ok(match state.status() {
		QueryStatus::Error(_) => ExitCode::FAILURE,
		_ => ExitCode::SUCCESS,
	})
}

/// Run the query widget until the user quits, then print the last outcome.
fn run_interactive(backend: HttpBackend, cli: &CliArgs, resolved: ResolvedConfig) -> Result<ExitCode> {
	let log_path = match cli.log_file.clone() {
		Some(path) => path,
		None => logging::default_log_path()?,
	};
	logging::init_file(&log_path)?;

	let outcome = App::new(backend)
		.with_ui(resolved.ui)
		.with_theme(resolved.theme)
		.with_question(resolved.initial_question)
		.run()?;

	print_status(&outcome.status, cli.output)?;
	Ok(ExitCode::SUCCESS)
}

fn print_status(status: &QueryStatus, format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Plain => print_plain(status),
		OutputFormat::Json => {
			if matches!(status, QueryStatus::Success(_) | QueryStatus::Error(_)) {
				print_json(status)?;
			}
		}
	}
	Ok(())
}
