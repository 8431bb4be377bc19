use medsearch::api::endpoint_url;

use super::ResolvedConfig;

pub(super) fn format_summary(config: &ResolvedConfig) -> String {
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  API base URL: {}", config.api_base_url),
		format!("  Query endpoint: {}", endpoint_url(&config.api_base_url)),
		format!(
			"  UI theme: {}",
			config.theme_name.as_deref().unwrap_or("(default)")
		),
		format!("  Heading: {}", config.ui.heading),
		format!("  Placeholder: {}", config.ui.placeholder),
	];
	if !config.initial_question.is_empty() {
		lines.push(format!("  Initial question: {}", config.initial_question));
	}
	lines.join("\n")
}

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("{}", format_summary(config));
}
