//! UI building blocks shared by the render pass.

/// Error banner.
pub mod banner;
/// Spinner shown while a query is in flight.
pub mod progress;
/// Question box and submit button.
pub mod prompt;
/// Answer and source list.
pub mod results;
/// Static page heading.
pub mod shell;

pub use banner::render_error;
pub use progress::render_loading;
pub use prompt::{PromptContext, render_prompt};
pub use results::render_results;
pub use shell::render_shell;
