use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Text};
use ratatui::widgets::Paragraph;

use crate::ui::UiConfig;
use crate::ui::style::Theme;

/// Rows used by the heading and description.
pub const SHELL_HEIGHT: u16 = 2;

/// Render the static page heading. Holds no state.
pub fn render_shell(frame: &mut Frame, area: Rect, ui: &UiConfig, theme: &Theme) {
	let text = Text::from(vec![
		Line::styled(ui.heading.clone(), theme.header_style()),
		Line::styled(ui.description.clone(), theme.muted_style()),
	]);
	frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}
