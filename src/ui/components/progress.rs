use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::ui::style::Theme;

/// Spinner followed by the loading caption.
#[must_use]
pub fn loading_line(caption: &str, throbber_state: &ThrobberState, theme: &Theme) -> Line<'static> {
	let spinner = Throbber::default()
		.style(theme.accent_style())
		.throbber_style(theme.accent_style());
	let mut line = Line::default();
	line.spans.push(spinner.to_symbol_span(throbber_state));
	line.spans
		.push(Span::styled(caption.to_string(), theme.muted_style()));
	line
}

/// Render the loading indicator centred in the first row of `area`.
pub fn render_loading(
	frame: &mut Frame,
	area: Rect,
	caption: &str,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let row = Rect { height: 1, ..area };
	let paragraph =
		Paragraph::new(loading_line(caption, throbber_state, theme)).alignment(Alignment::Center);
	frame.render_widget(paragraph, row);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn loading_line_ends_with_caption() {
		let state = ThrobberState::default();
		let line = loading_line("Searching through papers...", &state, &Theme::default());
		assert_eq!(line.spans.len(), 2);
		assert_eq!(
			line.spans.last().map(|span| span.content.as_ref()),
			Some("Searching through papers...")
		);
	}
}
