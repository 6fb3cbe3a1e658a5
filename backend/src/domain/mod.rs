//! Domain primitives, services and ports.
//!
//! Purpose: define the user and mannah entities, the error taxonomy the HTTP
//! layer exposes, and the services that turn repository outcomes into that
//! taxonomy. Nothing here knows about actix or Diesel.
//!
//! Public surface:
//! - `User`, `UserDraft`, `UserId`: users and their identifiers.
//! - `Mannah`, `MannahDraft`, `MannahId`: notes between users.
//! - `Error`, `ErrorCode`: transport-agnostic failures.
//! - `UserService`, `MannahService`, `SchemaManager`: use-cases over ports.

pub mod error;
pub mod mannah;
pub mod mannah_service;
pub mod ports;
pub mod schema_manager;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::mannah::{Mannah, MannahDraft, MannahId};
pub use self::mannah_service::MannahService;
pub use self::schema_manager::{ConstraintOutcome, SchemaError, SchemaManager, SchemaReport};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDraft, UserId};
pub use self::user_service::UserService;
