//! Core crate exports for the `medsearch` terminal front end.
//!
//! The root module re-exports the query lifecycle, the HTTP backend, and the
//! terminal UI so the binary (and embedders) can wire them together without
//! digging through the module hierarchy.

pub mod api;
pub mod app_dirs;
pub mod logging;
pub mod query;
pub mod ui;

pub use api::{HttpBackend, QueryBackend, QueryError, QueryRequest, QueryResponse, Source};
pub use query::{QueryState, QueryStatus, run_once};
pub use ui::{App, SessionOutcome, Theme, UiConfig, run};
