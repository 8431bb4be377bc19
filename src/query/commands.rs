use crate::api::{QueryError, QueryRequest, QueryResponse};

/// A validated request waiting to be sent, tagged with its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
	/// Identifier that lets the widget correlate the reply with this submit.
	pub generation: u64,
	pub request: QueryRequest,
}

/// Commands understood by the background query worker.
#[derive(Debug)]
pub(crate) enum QueryCommand {
	/// Send the request and report back with a [`QueryReply`].
	Submit(PendingQuery),
	/// Stop the background worker thread.
	Shutdown,
}

/// Outcome of one dispatched request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryReply {
	pub generation: u64,
	pub outcome: Result<QueryResponse, QueryError>,
}
