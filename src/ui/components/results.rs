//! Answer and source list rendering.
//!
//! The text helpers here are shared with the plain-text output of the CLI so
//! both surfaces label things the same way.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};

use crate::api::{QueryResponse, Source};
use crate::ui::style::Theme;

pub const ANSWER_HEADING: &str = "Answer:";
const RELEVANCE_INDENT: &str = "    ";

#[must_use]
pub fn sources_heading(count: i64) -> String {
	format!("Sources ({count}):")
}

#[must_use]
pub fn source_title(source: &Source) -> String {
	format!("[{}] {}", source.rank, source.file)
}

#[must_use]
pub fn relevance_label(source: &Source) -> String {
	format!("Relevance: {}", source.relevance)
}

/// Build the styled lines for an answer followed by its sources, in the order
/// the service returned them.
#[must_use]
pub fn result_lines(response: &QueryResponse, theme: &Theme) -> Vec<Line<'static>> {
	let mut lines = vec![Line::styled(ANSWER_HEADING, theme.accent_style())];
	lines.extend(
		response
			.answer
			.split('\n')
			.map(|line| Line::raw(line.to_string())),
	);
	lines.push(Line::default());
	lines.push(Line::styled(
		sources_heading(response.num_sources),
		theme.accent_style(),
	));

	let title_style = Style::new().add_modifier(Modifier::BOLD);
	for source in &response.sources {
		lines.push(Line::styled(source_title(source), title_style));
		lines.push(Line::from(vec![
			Span::raw(RELEVANCE_INDENT),
			Span::styled(relevance_label(source), theme.muted_style()),
		]));
	}
	lines
}

fn results_paragraph(response: &QueryResponse, theme: &Theme) -> Paragraph<'static> {
	Paragraph::new(Text::from(result_lines(response, theme))).wrap(Wrap { trim: false })
}

/// Largest scroll offset that still fills `area`, counting wrapped rows.
#[must_use]
pub fn max_scroll(response: &QueryResponse, theme: &Theme, area: Rect) -> u16 {
	let rows = results_paragraph(response, theme).line_count(area.width);
	let limit = rows.saturating_sub(usize::from(area.height));
	u16::try_from(limit).unwrap_or(u16::MAX)
}

/// Render the answer and sources into `area`, skipping `scroll` rows.
pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	response: &QueryResponse,
	scroll: u16,
	theme: &Theme,
) {
	frame.render_widget(results_paragraph(response, theme).scroll((scroll, 0)), area);
}
