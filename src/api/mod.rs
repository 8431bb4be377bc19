//! Wire types and the HTTP client for the remote question-answering service.

mod client;
mod error;
mod types;

pub use client::{HttpBackend, QUERY_PATH, QueryBackend, endpoint_url};
pub use error::QueryError;
pub use types::{DEFAULT_TOP_K, QueryRequest, QueryResponse, Source};
