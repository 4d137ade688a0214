//! User data model.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::post::Post;

/// Integer user identifier, unique within the user collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i32, example = 1)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Application user.
///
/// `posts` is only populated when a caller asks for the relation and is left
/// out of the JSON otherwise. Posts never serialise their owner, so the graph
/// cannot recurse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable user identifier.
    pub id: UserId,
    /// Display name, at least two characters.
    #[schema(example = "Adam")]
    pub name: String,
    /// Birth date, strictly in the past when created through the API.
    #[schema(value_type = String, format = Date, example = "2000-01-01")]
    pub birth_date: NaiveDate,
    /// Posts owned by this user, when explicitly loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts: Option<Vec<Post>>,
}

impl User {
    /// Build a user without loading its posts.
    pub fn new(id: UserId, name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            birth_date,
            posts: None,
        }
    }

    /// Attach the user's posts.
    #[must_use]
    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = Some(posts);
        self
    }
}

/// Validated create payload; the id is optional and assigned by storage.
///
/// Only [`crate::domain::validate_new_user`] and storage adapters build
/// these, so every instance has passed the user constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub(crate) id: Option<UserId>,
    pub(crate) name: String,
    pub(crate) birth_date: NaiveDate,
}

impl NewUser {
    /// Caller supplied identifier, if any.
    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    /// Validated name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validated birth date.
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Resolve into a stored [`User`] once an id has been assigned.
    pub fn into_user(self, id: UserId) -> User {
        User::new(id, self.name, self.birth_date)
    }

    /// Trusted constructor for seed data and storage round trips; bypasses
    /// the constraint checks.
    pub fn trusted(id: Option<UserId>, name: impl Into<String>, birth_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            birth_date,
        }
    }
}

/// Users every in-memory user store starts with.
///
/// Their birth date is the supplied date, mirroring accounts created "now".
pub fn seed_users(today: NaiveDate) -> Vec<User> {
    [(1, "Adam"), (2, "Eve"), (3, "Jack")]
        .into_iter()
        .map(|(id, name)| User::new(UserId::new(id), name, today))
        .collect()
}
