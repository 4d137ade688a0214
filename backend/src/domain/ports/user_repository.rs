//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

impl From<UserPersistenceError> for Error {
    fn from(value: UserPersistenceError) -> Self {
        Self::internal(value.to_string())
    }
}

/// Storage for [`User`] records keyed by [`UserId`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user, in storage order.
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a user, assigning an id when none is supplied.
    ///
    /// What a supplied id that is already taken does is up to the adapter:
    /// the in-memory store appends a second user with that id, while the
    /// PostgreSQL store replaces the row.
    async fn save(&self, user: NewUser) -> Result<User, UserPersistenceError>;

    /// Remove a user, returning it when it existed.
    async fn delete_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;
}
