//! Request middleware.
//!
//! Purpose: attach request-scoped context (trace identifier and request
//! description) used by logging and the error translator.

pub mod trace;

pub use trace::{RequestContext, Trace};
