//! Outbound adapters implementing domain ports.
//!
//! - **memory**: insertion-ordered in-process stores
//! - **persistence**: PostgreSQL-backed repositories using Diesel
//!
//! Adapters convert between domain types and storage representations and
//! hold no business logic.

pub mod memory;
pub mod persistence;
