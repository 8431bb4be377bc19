use serde::{Deserialize, Serialize};

/// Number of supporting passages requested for every question.
pub const DEFAULT_TOP_K: u32 = 3;

/// JSON body posted to the query endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
	pub question: String,
	pub top_k: u32,
}

impl QueryRequest {
	/// Build a request for `question` exactly as typed; no trimming happens here.
	#[must_use]
	pub fn new(question: impl Into<String>) -> Self {
		Self {
			question: question.into(),
			top_k: DEFAULT_TOP_K,
		}
	}
}

/// Answer returned by the search service.
///
/// The shape is trusted: fields the service adds on top of these (it echoes
/// the question back, for instance) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
	pub answer: String,
	pub num_sources: i64,
	pub sources: Vec<Source>,
}

/// A single citation backing the answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
	pub rank: i64,
	pub file: String,
	pub relevance: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_serializes_with_fixed_top_k() {
		let body = serde_json::to_value(QueryRequest::new("  what is sepsis? ")).unwrap();
		assert_eq!(
			body,
			serde_json::json!({ "question": "  what is sepsis? ", "top_k": 3 })
		);
	}

	#[test]
	fn response_ignores_echoed_question() {
		let body = r#"{
			"question": "q",
			"answer": "A",
			"num_sources": 1,
			"sources": [{ "rank": 1, "file": "f.pdf", "relevance": "high" }]
		}"#;
		let parsed: QueryResponse = serde_json::from_str(body).unwrap();
		assert_eq!(parsed.answer, "A");
		assert_eq!(parsed.num_sources, 1);
		assert_eq!(
			parsed.sources,
			vec![Source {
				rank: 1,
				file: "f.pdf".into(),
				relevance: "high".into(),
			}]
		);
	}
}
