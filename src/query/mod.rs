//! The query lifecycle: validation, dispatch, and applying replies.
//!
//! [`QueryState`] is a plain reducer with no I/O. The interactive UI feeds it
//! through the background [`worker`], while [`run_once`] drives the same
//! transitions synchronously for non-interactive use.

mod commands;
mod state;
pub(crate) mod worker;

pub use commands::{PendingQuery, QueryReply};
pub(crate) use commands::QueryCommand;
pub use state::{QueryState, QueryStatus};

use crate::api::QueryBackend;

/// Submit `question` once and block until the lifecycle settles.
pub fn run_once<B>(backend: &B, question: &str) -> QueryState
where
	B: QueryBackend + ?Sized,
{
	let mut state = QueryState::new();
	if let Some(pending) = state.submit(question) {
		let outcome = backend.query(&pending.request);
		state.apply_reply(QueryReply {
			generation: pending.generation,
			outcome,
		});
	}
	state
}
