//! Per-scope HTTP adapter state.
//!
//! The same handlers serve both the in-memory scope and the persisted scope;
//! each scope registers its own [`UserResources`] via `app_data`, so handlers
//! only depend on domain ports and stay testable without I/O.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;

use crate::domain::ports::{PostRepository, UserRepository};

/// What `DELETE` does when the id is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingDelete {
    /// Raise a not-found error (404).
    NotFound,
    /// Succeed anyway (200).
    Ignore,
}

/// Ports and policies backing one user/post scope.
#[derive(Clone)]
pub struct UserResources {
    /// User storage for this scope.
    pub users: Arc<dyn UserRepository>,
    /// Post storage for this scope.
    pub posts: Arc<dyn PostRepository>,
    /// Outcome of deleting an unknown user.
    pub missing_delete: MissingDelete,
    /// Source of "today" for birth date checks.
    pub clock: Arc<dyn Clock>,
}

impl UserResources {
    /// Bundle the ports and delete policy for one scope.
    pub fn new(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        missing_delete: MissingDelete,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            posts,
            missing_delete,
            clock,
        }
    }

    /// Current UTC date, the reference point for "in the past".
    pub fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }
}
