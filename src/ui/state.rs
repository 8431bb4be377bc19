use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use throbber_widgets_tui::ThrobberState;

use super::config::UiConfig;
use super::input::QueryInput;
use crate::api::{QueryBackend, QueryError};
use crate::query::{QueryReply, QueryState, QueryStatus};
pub use crate::ui::style::Theme;

mod query_runtime;

use query_runtime::QueryRuntime;

const THROBBER_INTERVAL: Duration = Duration::from_millis(100);

/// Question and final status handed back when the user leaves the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
	pub question: String,
	pub status: QueryStatus,
}

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.runtime.shutdown();
	}
}

pub struct App<'a> {
	pub(crate) state: QueryState,
	pub(crate) input: QueryInput<'a>,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) scroll: u16,
	/// Body area from the last draw, used to bound scrolling.
	pub(crate) results_area: Option<Rect>,
	last_throbber_tick: Instant,
	runtime: QueryRuntime,
}

impl<'a> App<'a> {
	/// Create an idle widget whose queries go to `backend`.
	pub fn new<B: QueryBackend + 'static>(backend: B) -> Self {
		let ui = UiConfig::default();
		let mut input = QueryInput::new(String::new());
		input.set_placeholder(ui.placeholder.clone());
		Self {
			state: QueryState::new(),
			input,
			ui,
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			scroll: 0,
			results_area: None,
			last_throbber_tick: Instant::now(),
			runtime: QueryRuntime::spawn(backend),
		}
	}

	#[must_use]
	pub fn with_ui(mut self, ui: UiConfig) -> Self {
		self.input.set_placeholder(ui.placeholder.clone());
		self.ui = ui;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	/// Pre-fill the prompt. Nothing is submitted.
	#[must_use]
	pub fn with_question(mut self, question: impl Into<String>) -> Self {
		self.input = QueryInput::new(question);
		self.input.set_placeholder(self.ui.placeholder.clone());
		self
	}

	#[must_use]
	pub fn status(&self) -> &QueryStatus {
		self.state.status()
	}

	#[must_use]
	pub fn question(&self) -> &str {
		self.input.text()
	}

	#[must_use]
	pub fn outcome(&self) -> SessionOutcome {
		SessionOutcome {
			question: self.question().to_string(),
			status: self.status().clone(),
		}
	}

	/// Validate the current question and dispatch it to the worker.
	pub fn submit(&mut self) {
		let Some(pending) = self.state.submit(self.input.text()) else {
			return;
		};
		self.scroll = 0;

		let generation = pending.generation;
		if !self.runtime.dispatch(pending) {
			tracing::error!("query worker is not running");
			self.state.apply_reply(QueryReply {
				generation,
				outcome: Err(QueryError::Transport(
					"query worker is not running".to_string(),
				)),
			});
		}
	}

	/// Drain replies waiting on the worker channel.
	pub fn pump_replies(&mut self) {
		while let Ok(reply) = self.runtime.try_recv() {
			if self.state.apply_reply(reply) {
				self.scroll = 0;
			}
		}
	}

	/// Advance the spinner at a fixed rate while loading.
	pub(crate) fn tick(&mut self) {
		if self.state.is_loading() && self.last_throbber_tick.elapsed() >= THROBBER_INTERVAL {
			self.throbber_state.calc_next();
			self.last_throbber_tick = Instant::now();
		}
	}
}
