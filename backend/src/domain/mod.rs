//! Domain primitives, ports and validation rules.
//!
//! Purpose: Define strongly typed entities shared by the HTTP adapter and the
//! storage adapters. Nothing in this module knows about actix or Diesel.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — transport agnostic failure payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - User / NewUser — user identity, name and birth date.
//! - Post / NewPost — posts owned by a user.
//! - validate_new_user — constraint checks for create payloads.

pub mod error;
pub mod ports;
pub mod post;
pub mod user;
pub mod user_validation;

pub use self::error::{Error, ErrorCode};
pub use self::post::{NewPost, Post, PostId};
pub use self::user::{NewUser, User, UserId, seed_users};
pub use self::user_validation::{
    NAME_MIN_CHARS, UserPayload, Violation, validate_new_user, violations_summary,
};

/// Response header carrying the per-request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

