use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use crate::api::QueryBackend;
use crate::query::{PendingQuery, QueryCommand, QueryReply, worker};

/// UI-side handle to the background query worker.
pub(crate) struct QueryRuntime {
	tx: Sender<QueryCommand>,
	rx: Receiver<QueryReply>,
}

impl QueryRuntime {
	pub(crate) fn spawn<B: QueryBackend + 'static>(backend: B) -> Self {
		let (tx, rx) = worker::spawn(backend);
		Self { tx, rx }
	}

	/// Hand a request to the worker. Returns false when the worker has exited.
	pub(crate) fn dispatch(&self, pending: PendingQuery) -> bool {
		self.tx.send(QueryCommand::Submit(pending)).is_ok()
	}

	pub(crate) fn try_recv(&self) -> Result<QueryReply, TryRecvError> {
		self.rx.try_recv()
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(QueryCommand::Shutdown);
	}
}
