use super::commands::{PendingQuery, QueryReply};
use crate::api::{QueryError, QueryRequest, QueryResponse};

/// Where the current question is in its lifecycle.
///
/// Error and result share one slot, so a new outcome always replaces the
/// previous one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryStatus {
	#[default]
	Idle,
	Loading {
		generation: u64,
	},
	Error(QueryError),
	Success(QueryResponse),
}

impl QueryStatus {
	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading { .. })
	}

	#[must_use]
	pub fn error(&self) -> Option<&QueryError> {
		match self {
			Self::Error(err) => Some(err),
			_ => None,
		}
	}

	#[must_use]
	pub fn response(&self) -> Option<&QueryResponse> {
		match self {
			Self::Success(response) => Some(response),
			_ => None,
		}
	}
}

/// Reducer for the query widget.
#[derive(Debug, Default)]
pub struct QueryState {
	status: QueryStatus,
	last_generation: u64,
}

impl QueryState {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn status(&self) -> &QueryStatus {
		&self.status
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.status.is_loading()
	}

	/// Generation of the most recently accepted submit, `0` before the first.
	#[must_use]
	pub fn last_generation(&self) -> u64 {
		self.last_generation
	}

	/// Validate `question` and move to the loading state.
	///
	/// Returns the request to dispatch, or `None` when nothing should be sent:
	/// either the question was blank (the status now holds the validation
	/// error) or a request is already in flight (the status is unchanged).
	pub fn submit(&mut self, question: &str) -> Option<PendingQuery> {
		if self.status.is_loading() {
			tracing::debug!("ignoring submit while a query is in flight");
			return None;
		}

		if question.trim().is_empty() {
			tracing::debug!("rejecting blank question");
			self.status = QueryStatus::Error(QueryError::EmptyQuestion);
			return None;
		}

		self.last_generation = self.last_generation.wrapping_add(1);
		let generation = self.last_generation;
		self.status = QueryStatus::Loading { generation };
		tracing::info!(generation, "query submitted");

		Some(PendingQuery {
			generation,
			request: QueryRequest::new(question),
		})
	}

	/// Apply a reply if it answers the request currently loading.
	///
	/// Replies for any other generation are stale and dropped. Returns whether
	/// the state changed.
	pub fn apply_reply(&mut self, reply: QueryReply) -> bool {
		let QueryStatus::Loading { generation } = self.status else {
			tracing::debug!(generation = reply.generation, "dropping reply with nothing loading");
			return false;
		};
		if generation != reply.generation {
			tracing::debug!(
				expected = generation,
				received = reply.generation,
				"dropping stale reply"
			);
			return false;
		}

		self.status = match reply.outcome {
			Ok(response) => {
				tracing::info!(generation, sources = response.sources.len(), "answer received");
				QueryStatus::Success(response)
			}
			Err(err) => {
				tracing::info!(generation, error = %err, "query failed");
				QueryStatus::Error(err)
			}
		};
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::Source;

	fn sample_response() -> QueryResponse {
		QueryResponse {
			answer: "A".into(),
			num_sources: 1,
			sources: vec![Source {
				rank: 1,
				file: "f.pdf".into(),
				relevance: "high".into(),
			}],
		}
	}

	#[test]
	fn blank_questions_fail_validation_without_dispatch() {
		for question in ["", " ", "\t\n  "] {
			let mut state = QueryState::new();
			assert!(state.submit(question).is_none());
			assert_eq!(
				state.status(),
				&QueryStatus::Error(QueryError::EmptyQuestion)
			);
			assert_eq!(state.last_generation(), 0);
		}
	}

	#[test]
	fn valid_submit_keeps_raw_question_and_fixed_top_k() {
		let mut state = QueryState::new();
		let pending = state.submit("  sepsis markers ").expect("dispatch");
		assert_eq!(pending.request.question, "  sepsis markers ");
		assert_eq!(pending.request.top_k, 3);
		assert_eq!(
			state.status(),
			&QueryStatus::Loading {
				generation: pending.generation
			}
		);
	}

	#[test]
	fn new_submit_clears_previous_result() {
		let mut state = QueryState::new();
		let first = state.submit("first").unwrap();
		state.apply_reply(QueryReply {
			generation: first.generation,
			outcome: Ok(sample_response()),
		});
		assert!(state.status().response().is_some());

		let second = state.submit("second").unwrap();
		assert!(state.status().response().is_none());
		assert!(state.status().error().is_none());
		assert!(state.is_loading());
		assert!(second.generation > first.generation);
	}

	#[test]
	fn new_submit_clears_previous_error() {
		let mut state = QueryState::new();
		state.submit("   ");
		assert!(state.status().error().is_some());

		state.submit("real question").unwrap();
		assert!(state.status().error().is_none());
		assert!(state.is_loading());
	}

	#[test]
	fn submit_is_ignored_while_loading() {
		let mut state = QueryState::new();
		let pending = state.submit("first").unwrap();
		assert!(state.submit("second").is_none());
		assert!(state.submit("").is_none());
		assert_eq!(
			state.status(),
			&QueryStatus::Loading {
				generation: pending.generation
			}
		);
	}

	#[test]
	fn failure_replaces_loading_with_error() {
		let mut state = QueryState::new();
		let pending = state.submit("q").unwrap();
		assert!(state.apply_reply(QueryReply {
			generation: pending.generation,
			outcome: Err(QueryError::Status(500)),
		}));
		assert_eq!(
			state.status().error().map(ToString::to_string).as_deref(),
			Some("Failed to get answer")
		);
		assert!(state.status().response().is_none());
		assert!(!state.is_loading());
	}

	#[test]
	fn stale_replies_are_dropped() {
		let mut state = QueryState::new();
		let first = state.submit("first").unwrap();
		state.apply_reply(QueryReply {
			generation: first.generation,
			outcome: Err(QueryError::Transport("NetworkDown".into())),
		});
		let second = state.submit("second").unwrap();

		let applied = state.apply_reply(QueryReply {
			generation: first.generation,
			outcome: Ok(sample_response()),
		});
		assert!(!applied);
		assert_eq!(
			state.status(),
			&QueryStatus::Loading {
				generation: second.generation
			}
		);
	}

	#[test]
	fn replies_without_pending_request_are_dropped() {
		let mut state = QueryState::new();
		assert!(!state.apply_reply(QueryReply {
			generation: 1,
			outcome: Ok(sample_response()),
		}));
		assert_eq!(state.status(), &QueryStatus::Idle);
	}
}
