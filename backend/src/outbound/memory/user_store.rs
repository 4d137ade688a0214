//! In-memory [`UserRepository`] adapter.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{Table, lock};
use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserId};

/// Ordered user collection with a monotonically increasing id counter.
///
/// `save` with an explicit id appends without checking for duplicates;
/// `find_by_id` and `delete_by_id` act on the first match.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    table: Mutex<Table<User>>,
}

impl InMemoryUserRepository {
    /// Start from `users`, with the counter at the highest seeded id.
    pub fn new(users: Vec<User>) -> Self {
        let counter = users.iter().map(|u| u.id.get()).max().unwrap_or(0);
        Self {
            table: Mutex::new(Table {
                rows: users,
                counter,
            }),
        }
    }

    /// An empty store whose first generated id is 1.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(lock(&self.table).rows.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(lock(&self.table).rows.iter().find(|u| u.id == id).cloned())
    }

    async fn save(&self, user: NewUser) -> Result<User, UserPersistenceError> {
        let mut table = lock(&self.table);
        let id = match user.id() {
            Some(id) => id,
            None => {
                table.counter += 1;
                UserId::new(table.counter)
            }
        };
        let stored = user.into_user(id);
        table.rows.push(stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut table = lock(&self.table);
        let position = table.rows.iter().position(|u| u.id == id);
        Ok(position.map(|index| table.rows.remove(index)))
    }
}
