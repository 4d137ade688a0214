//! CRUD web service exposing users and their posts over JSON/HTTP.
//!
//! Layout follows a ports-and-adapters split: [`domain`] holds entities,
//! validation and storage ports; [`outbound`] implements the ports (in-memory
//! and PostgreSQL); [`inbound`] exposes them over actix-web.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
