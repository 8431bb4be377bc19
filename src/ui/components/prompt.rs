use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::ui::input::QueryInput;
use crate::ui::style::Theme;

const PROMPT_TITLE: &str = " Question ";

/// Argument bundle for rendering the question box.
pub struct PromptContext<'a, 'b> {
	pub input: &'a mut QueryInput<'b>,
	pub loading: bool,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the bordered prompt with the submit button on the right.
pub fn render_prompt(frame: &mut Frame, prompt: PromptContext<'_, '_>) {
	let PromptContext {
		input,
		loading,
		area,
		theme,
	} = prompt;

	let block = Block::bordered()
		.title(PROMPT_TITLE)
		.border_style(if loading {
			theme.muted_style()
		} else {
			theme.prompt_style()
		});
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let label = button_text(loading);
	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints(layout_constraints(button_width(&label)))
		.split(inner);

	input.render(frame, horizontal[0], !loading, theme);

	let button = Paragraph::new(label).style(theme.button_style(!loading));
	frame.render_widget(button, horizontal[1]);
}

/// Caption of the submit button.
#[must_use]
pub fn button_label(loading: bool) -> &'static str {
	if loading { "Searching..." } else { "Search" }
}

fn button_text(loading: bool) -> String {
	format!(" {} ", button_label(loading))
}

fn button_width(text: &str) -> u16 {
	u16::try_from(text.width()).unwrap_or(u16::MAX)
}

fn layout_constraints(button_width: u16) -> [Constraint; 2] {
	[Constraint::Min(1), Constraint::Length(button_width)]
}
