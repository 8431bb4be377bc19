/// Text used by the page shell and query widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	/// Terminal window title.
	pub window_title: String,
	/// Heading shown above the prompt.
	pub heading: String,
	/// Subtitle under the heading.
	pub description: String,
	/// Placeholder shown while the prompt is empty.
	pub placeholder: String,
	/// Caption next to the spinner while a query is in flight.
	pub loading_caption: String,
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			window_title: "Medical RAG Search".to_string(),
			heading: "🔬 Medical Literature Search".to_string(),
			description: "Search medical literature using AI".to_string(),
			placeholder: "Ask a question about medical literature...".to_string(),
			loading_caption: "Searching through papers...".to_string(),
		}
	}
}
