use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Environment variable consulted for the service base URL.
pub(crate) const API_URL_ENV: &str = "MEDSEARCH_API_URL";

/// Command-line arguments accepted by the `medsearch` binary.
#[derive(Parser, Debug)]
#[command(
    name = "medsearch",
    version,
    long_version = long_version(),
    about = "Ask questions of a medical literature search service",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "MEDSEARCH_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'u',
        long = "api-url",
        value_name = "URL",
        env = API_URL_ENV,
        help = "Base URL of the search service; /api/query is appended"
    )]
    pub(crate) api_url: Option<String>,
    #[arg(
        short = 'q',
        long,
        value_name = "QUESTION",
        help = "Ask once without the terminal UI and print the result"
    )]
    pub(crate) question: Option<String>,
    #[arg(
        short = 'i',
        long = "initial-question",
        value_name = "TEXT",
        help = "Pre-fill the prompt of the terminal UI (default: empty)"
    )]
    pub(crate) initial_question: Option<String>,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Override the page heading (default: Medical Literature Search)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        long,
        value_name = "TEXT",
        help = "Override the prompt placeholder (default: preset text)"
    )]
    pub(crate) placeholder: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        long = "log-file",
        value_name = "FILE",
        help = "Write interactive session logs here (default: data directory)"
    )]
    pub(crate) log_file: Option<PathBuf>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
}
