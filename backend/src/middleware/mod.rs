//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route: trace
//! identifiers and the per-request deadline.

pub mod timeout;
pub mod trace;

pub use timeout::RequestTimeout;
pub use trace::Trace;
