//! Inbound adapters translating external requests into domain calls.
//!
//! - **http**: actix-web REST handlers for users, mannah and probes.

pub mod http;
