use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::ui::style::Theme;

/// Rows taken by the banner border.
const BORDER_ROWS: u16 = 2;

#[must_use]
pub fn error_text(message: &str) -> String {
	format!("Error: {message}")
}

/// Rows the banner needs to show all of `message` within `width` columns.
#[must_use]
pub fn banner_height(message: &str, width: u16) -> u16 {
	let inner_width = width.saturating_sub(BORDER_ROWS);
	let rows = Paragraph::new(error_text(message))
		.wrap(Wrap { trim: true })
		.line_count(inner_width)
		.max(1);
	u16::try_from(rows)
		.unwrap_or(u16::MAX)
		.saturating_add(BORDER_ROWS)
}

/// Render the error banner at the top of `area`, growing with the message.
pub fn render_error(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
	let height = area.height.min(banner_height(message, area.width));
	if height == 0 || area.width == 0 {
		return;
	}
	let banner_area = Rect { height, ..area };

	let paragraph = Paragraph::new(error_text(message))
		.wrap(Wrap { trim: true })
		.block(Block::bordered().style(theme.error_style()));
	frame.render_widget(Clear, banner_area);
	frame.render_widget(paragraph, banner_area);
}
