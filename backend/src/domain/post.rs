//! Post data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::user::UserId;

/// Integer post identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i32, example = 11)]
pub struct PostId(i32);

impl PostId {
    /// Wrap a raw identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A post written by a user.
///
/// The owning user is kept for storage only; it is never serialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    /// Stable post identifier.
    pub id: PostId,
    /// Free text body.
    #[schema(example = "My first post")]
    pub description: String,
    #[serde(skip)]
    user_id: Option<UserId>,
}

impl Post {
    /// Build a post owned by `user_id`.
    pub fn new(id: PostId, description: impl Into<String>, user_id: UserId) -> Self {
        Self {
            id,
            description: description.into(),
            user_id: Some(user_id),
        }
    }

    /// Owning user. `None` only for posts decoded from JSON.
    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }
}

/// Post awaiting persistence; the owner is always attached by the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    /// Caller supplied identifier, if any.
    pub id: Option<PostId>,
    /// Free text body.
    pub description: String,
    /// Owning user.
    pub user_id: UserId,
}

impl NewPost {
    /// Resolve into a stored [`Post`] once an id has been assigned.
    pub fn into_post(self, id: PostId) -> Post {
        Post::new(id, self.description, self.user_id)
    }
}
