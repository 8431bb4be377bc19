use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::components::results;
use super::state::SessionOutcome;

const PAGE_STEP: u16 = 10;

impl<'a> App<'a> {
	/// Apply a key press. Returns the session outcome once the user quits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SessionOutcome> {
		match key.code {
			KeyCode::Esc => return Some(self.outcome()),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Some(self.outcome());
			}
			KeyCode::Enter => self.submit(),
			KeyCode::Up => self.scroll_up(1),
			KeyCode::Down => self.scroll_down(1),
			KeyCode::PageUp => self.scroll_up(PAGE_STEP),
			KeyCode::PageDown => self.scroll_down(PAGE_STEP),
			_ => {
				// The prompt is disabled while a query is in flight.
				if !self.state.is_loading() {
					self.input.input(key);
				}
			}
		}
		None
	}

	/// Insert pasted text into the prompt as one line.
	///
	/// Line breaks become spaces so a pasted paragraph never submits early.
	pub(crate) fn handle_paste(&mut self, text: &str) {
		if self.state.is_loading() {
			return;
		}
		let single_line = text.replace("\r\n", " ").replace(['\r', '\n'], " ");
		self.input.paste(&single_line);
	}

	fn scroll_up(&mut self, step: u16) {
		self.scroll = self.scroll.saturating_sub(step);
	}

	fn scroll_down(&mut self, step: u16) {
		self.scroll = self.scroll.saturating_add(step).min(self.scroll_limit());
	}

	/// Keep the offset valid after the viewport changes size.
	pub(crate) fn clamp_scroll(&mut self) {
		self.scroll = self.scroll.min(self.scroll_limit());
	}

	fn scroll_limit(&self) -> u16 {
		match (self.state.status().response(), self.results_area) {
			(Some(response), Some(area)) => results::max_scroll(response, &self.theme, area),
			_ => 0,
		}
	}
}
