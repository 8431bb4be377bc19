use anyhow::Result;
use medsearch::QueryStatus;
use medsearch::ui::components::banner::error_text;
use medsearch::ui::components::results::{
	ANSWER_HEADING, relevance_label, source_title, sources_heading,
};
use serde_json::json;

/// Plain-text view of a settled query, using the same labels as the terminal UI.
pub(crate) fn format_plain(status: &QueryStatus) -> String {
	match status {
		QueryStatus::Idle | QueryStatus::Loading { .. } => String::new(),
		QueryStatus::Error(err) => error_text(&err.to_string()),
		QueryStatus::Success(response) => {
			let mut lines = vec![ANSWER_HEADING.to_string()];
			lines.extend(response.answer.split('\n').map(str::to_string));
			lines.push(String::new());
			lines.push(sources_heading(response.num_sources));
			for source in &response.sources {
				lines.push(source_title(source));
				lines.push(format!("    {}", relevance_label(source)));
			}
			lines.join("\n")
		}
	}
}

/// Print the plain-text view. Nothing is printed for an unsettled query.
pub(crate) fn print_plain(status: &QueryStatus) {
	let text = format_plain(status);
	if !text.is_empty() {
		println!("{text}");
	}
}

/// Format the outcome as JSON: the response verbatim, or an error object.
pub(crate) fn format_json(status: &QueryStatus) -> Result<String> {
	let payload = match status {
		QueryStatus::Success(response) => serde_json::to_value(response)?,
		QueryStatus::Error(err) => json!({ "error": err.to_string() }),
		QueryStatus::Idle | QueryStatus::Loading { .. } => serde_json::Value::Null,
	};
	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(status: &QueryStatus) -> Result<()> {
	println!("{}", format_json(status)?);
	Ok(())
}
