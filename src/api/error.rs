use thiserror::Error;

/// Ways a single submit attempt can end without an answer.
///
/// The `Display` output is the exact text shown in the error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
	/// The question was empty or whitespace only; nothing was sent.
	#[error("Please enter a question")]
	EmptyQuestion,
	/// The service answered with a non-success status. The body is discarded.
	#[error("Failed to get answer")]
	Status(u16),
	/// The request could not complete.
	#[error("{0}")]
	Transport(String),
	/// A success status arrived with a body that is not a valid answer.
	#[error("{0}")]
	Decode(String),
}

impl QueryError {
	/// True when the error was raised locally before any request was made.
	#[must_use]
	pub fn is_validation(&self) -> bool {
		matches!(self, Self::EmptyQuestion)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn banner_text_matches_each_variant() {
		assert_eq!(QueryError::EmptyQuestion.to_string(), "Please enter a question");
		assert_eq!(QueryError::Status(502).to_string(), "Failed to get answer");
		assert_eq!(
			QueryError::Transport("NetworkDown".into()).to_string(),
			"NetworkDown"
		);
		assert_eq!(
			QueryError::Decode("expected value at line 1 column 1".into()).to_string(),
			"expected value at line 1 column 1"
		);
	}

	#[test]
	fn only_empty_question_is_a_validation_error() {
		assert!(QueryError::EmptyQuestion.is_validation());
		assert!(!QueryError::Status(500).is_validation());
		assert!(!QueryError::Transport(String::new()).is_validation());
	}
}
