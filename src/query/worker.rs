use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use super::commands::{QueryCommand, QueryReply};
use crate::api::QueryBackend;

/// Launches the background query worker thread and returns communication channels.
pub(crate) fn spawn<B>(backend: B) -> (Sender<QueryCommand>, Receiver<QueryReply>)
where
	B: QueryBackend + 'static,
{
	let (command_tx, command_rx) = mpsc::channel();
	let (reply_tx, reply_rx) = mpsc::channel();

	thread::spawn(move || worker_loop(&backend, command_rx, reply_tx));

	(command_tx, reply_rx)
}

fn worker_loop<B: QueryBackend>(
	backend: &B,
	command_rx: Receiver<QueryCommand>,
	reply_tx: Sender<QueryReply>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(backend, &reply_tx, command) {
			break;
		}
	}
	tracing::debug!("query worker stopped");
}

fn handle_command<B: QueryBackend>(
	backend: &B,
	reply_tx: &Sender<QueryReply>,
	command: QueryCommand,
) -> bool {
	match command {
		QueryCommand::Submit(pending) => {
			tracing::debug!(generation = pending.generation, "dispatching query");
			let outcome = backend.query(&pending.request);
			reply_tx
				.send(QueryReply {
					generation: pending.generation,
					outcome,
				})
				.is_ok()
		}
		QueryCommand::Shutdown => false,
	}
}
