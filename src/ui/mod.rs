//! Interactive terminal UI for asking questions.
//!
//! [`App`] owns the query widget: the prompt, the reducer, and the handle to
//! the background worker. The remaining submodules implement the event loop,
//! key handling, the render pass, and the widgets/themes it draws with.

mod actions;
pub mod components;
mod config;
pub mod input;
mod render;
mod runtime;
mod state;
pub mod style;

pub use config::UiConfig;
pub use input::QueryInput;
pub use runtime::run;
pub use state::{App, SessionOutcome};
pub use style::Theme;
