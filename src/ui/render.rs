use ratatui::{
	Frame,
	layout::{Constraint, Direction, Layout, Margin, Rect},
	widgets::Paragraph,
};

use super::App;
use super::components::{
	PromptContext, render_error, render_loading, render_prompt, render_results, render_shell,
	shell::SHELL_HEIGHT,
};
use crate::query::QueryStatus;

const PROMPT_HEIGHT: u16 = 3;
const FOOTER_HINT: &str = "Enter search • ↑/↓ scroll • Esc quit";

impl<'a> App<'a> {
	/// Draw the whole screen from the current state.
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(SHELL_HEIGHT),
				Constraint::Length(PROMPT_HEIGHT),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(area);

		render_shell(frame, layout[0], &self.ui, &self.theme);

		let loading = self.state.is_loading();
		render_prompt(
			frame,
			PromptContext {
				input: &mut self.input,
				loading,
				area: layout[1],
				theme: &self.theme,
			},
		);

		let body = layout[2].inner(Margin {
			vertical: 1,
			horizontal: 0,
		});
		self.results_area = Some(body);
		self.clamp_scroll();
		self.render_body(frame, body);

		let footer = Paragraph::new(FOOTER_HINT).style(self.theme.muted_style());
		frame.render_widget(footer, layout[3]);
	}

	fn render_body(&self, frame: &mut Frame, body: Rect) {
		match self.state.status() {
			QueryStatus::Idle => {}
			QueryStatus::Loading { .. } => render_loading(
				frame,
				body,
				&self.ui.loading_caption,
				&self.throbber_state,
				&self.theme,
			),
			QueryStatus::Error(err) => render_error(frame, body, &err.to_string(), &self.theme),
			QueryStatus::Success(response) => {
				render_results(frame, body, response, self.scroll, &self.theme);
			}
		}
	}
}
