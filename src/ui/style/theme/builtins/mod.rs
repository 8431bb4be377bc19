use ratatui::style::{Color, Modifier, Style};

use crate::ui::style::theme::types::{Theme, ThemeDefinition};

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::LightCyan),
	muted: Style::new().fg(Color::DarkGray),
	accent: Style::new()
		.fg(Color::Rgb(96, 165, 250))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(254, 202, 202)).bg(Color::Rgb(127, 29, 29)),
	button: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(96, 165, 250)),
	disabled: Style::new()
		.fg(Color::Rgb(100, 116, 139))
		.bg(Color::Rgb(30, 41, 59)),
};

pub const SOLARIZED: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(253, 246, 227))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(38, 139, 210)),
	muted: Style::new().fg(Color::Rgb(88, 110, 117)),
	accent: Style::new()
		.fg(Color::Rgb(181, 137, 0))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(253, 246, 227)).bg(Color::Rgb(220, 50, 47)),
	button: Style::new()
		.fg(Color::Rgb(0, 43, 54))
		.bg(Color::Rgb(38, 139, 210)),
	disabled: Style::new()
		.fg(Color::Rgb(88, 110, 117))
		.bg(Color::Rgb(7, 54, 66)),
};

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	muted: Style::new().fg(Color::Rgb(100, 100, 100)),
	accent: Style::new()
		.fg(Color::Rgb(37, 99, 235))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(153, 27, 27)).bg(Color::Rgb(254, 242, 242)),
	button: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(37, 99, 235)),
	disabled: Style::new()
		.fg(Color::Rgb(148, 163, 184))
		.bg(Color::Rgb(226, 232, 240)),
};

pub(crate) const DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition::new("slate", SLATE).with_aliases(&["default", "dark"]),
	ThemeDefinition::new("solarized", SOLARIZED),
	ThemeDefinition::new("light", LIGHT),
];
