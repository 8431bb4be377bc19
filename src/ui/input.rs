//! Single-line question input backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

use super::style::Theme;

pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> QueryInput<'a> {
	#[must_use]
	pub fn new(initial: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	pub fn set_placeholder(&mut self, text: impl Into<String>) {
		self.textarea.set_placeholder_text(text);
	}

	/// Current question text, exactly as typed.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key to the editor. Returns whether the text changed.
	///
	/// Keys that would open a second line are swallowed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if inserts_newline(&key) {
			return false;
		}
		self.textarea.input(key)
	}

	/// Insert `text` at the cursor. The caller strips line breaks.
	pub fn paste(&mut self, text: &str) -> bool {
		self.textarea.insert_str(text)
	}

	/// Draw the editor, dimmed and without a cursor when `enabled` is false.
	pub fn render(&mut self, frame: &mut Frame, area: Rect, enabled: bool, theme: &Theme) {
		let (text_style, cursor_style) = if enabled {
			(Style::default(), Style::default().add_modifier(Modifier::REVERSED))
		} else {
			(theme.muted_style(), Style::default())
		};
		self.textarea.set_style(text_style);
		self.textarea.set_cursor_style(cursor_style);
		self.textarea.set_placeholder_style(theme.muted_style());
		frame.render_widget(&self.textarea, area);
	}
}

fn inserts_newline(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}
