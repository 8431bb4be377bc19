//! Visual styling utilities.
//!
//! Themes are fixed colour schemes; there is no user-defined styling beyond
//! picking one by name.

pub mod theme;

pub use theme::{Theme, ThemeDefinition, by_name, default_theme, names};
