use anyhow::{Context, Result};
use reqwest::blocking::Client;

use super::{QueryError, QueryRequest, QueryResponse};

/// Path appended to the configured base URL.
pub const QUERY_PATH: &str = "/api/query";

/// Anything that can answer a [`QueryRequest`].
///
/// The terminal UI and the one-shot mode both go through this seam, which
/// lets tests swap the network for a scripted backend.
pub trait QueryBackend: Send {
	fn query(&self, request: &QueryRequest) -> Result<QueryResponse, QueryError>;
}

impl<B: QueryBackend + ?Sized> QueryBackend for Box<B> {
	fn query(&self, request: &QueryRequest) -> Result<QueryResponse, QueryError> {
		(**self).query(request)
	}
}

/// Join the base URL and the query path without inspecting either.
#[must_use]
pub fn endpoint_url(base_url: &str) -> String {
	format!("{base_url}{QUERY_PATH}")
}

/// [`QueryBackend`] that posts JSON to a live search service.
#[derive(Debug, Clone)]
pub struct HttpBackend {
	client: Client,
	endpoint: String,
}

impl HttpBackend {
	pub fn new(base_url: &str) -> Result<Self> {
		let client = Client::builder()
			.build()
			.context("failed to build HTTP client")?;
		Ok(Self {
			client,
			endpoint: endpoint_url(base_url),
		})
	}

	#[must_use]
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

impl QueryBackend for HttpBackend {
	fn query(&self, request: &QueryRequest) -> Result<QueryResponse, QueryError> {
		tracing::debug!(endpoint = %self.endpoint, top_k = request.top_k, "posting query");

		let response = self
			.client
			.post(&self.endpoint)
			.json(request)
			.send()
			.map_err(|err| {
				tracing::warn!(error = %err, "query request failed");
				QueryError::Transport(err.to_string())
			})?;

		let status = response.status();
		if !status.is_success() {
			tracing::warn!(status = status.as_u16(), "query endpoint returned an error status");
			return Err(QueryError::Status(status.as_u16()));
		}

		let body = response
			.text()
			.map_err(|err| QueryError::Transport(err.to_string()))?;
		serde_json::from_str(&body).map_err(|err| {
			tracing::warn!(error = %err, "query response was not a valid answer");
			QueryError::Decode(err.to_string())
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn endpoint_is_plain_concatenation() {
		assert_eq!(
			endpoint_url("http://localhost:8000"),
			"http://localhost:8000/api/query"
		);
		assert_eq!(
			endpoint_url("http://localhost:8000/"),
			"http://localhost:8000//api/query"
		);
	}

	#[test]
	fn backend_exposes_resolved_endpoint() {
		let backend = HttpBackend::new("https://search.example").unwrap();
		assert_eq!(backend.endpoint(), "https://search.example/api/query");
	}
}
