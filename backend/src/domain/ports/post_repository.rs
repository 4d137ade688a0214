//! Port abstraction for post persistence adapters.

use async_trait::async_trait;

use crate::domain::{Error, NewPost, Post, PostId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by post repository adapters.
    pub enum PostPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "post repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "post repository query failed: {message}",
    }
}

impl From<PostPersistenceError> for Error {
    fn from(value: PostPersistenceError) -> Self {
        Self::internal(value.to_string())
    }
}

/// Storage for [`Post`] records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Every stored post.
    async fn find_all(&self) -> Result<Vec<Post>, PostPersistenceError>;

    /// Fetch a post by identifier.
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostPersistenceError>;

    /// Posts owned by `user_id`, ordered by id.
    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Post>, PostPersistenceError>;

    /// Insert a post, assigning an id when none is supplied.
    ///
    /// A taken id behaves as in [`UserRepository::save`](super::UserRepository::save).
    async fn save(&self, post: NewPost) -> Result<Post, PostPersistenceError>;

    /// Remove a post, returning it when it existed.
    async fn delete_by_id(&self, id: PostId) -> Result<Option<Post>, PostPersistenceError>;
}
