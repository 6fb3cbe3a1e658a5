//! Mannah service library: users, the notes they send each other, and the
//! HTTP and PostgreSQL adapters around them.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// OpenAPI document served at `/api-docs/openapi.json` and dumped by tooling.
pub use doc::ApiDoc;
pub use middleware::{RequestTimeout, Trace};
