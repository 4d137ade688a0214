//! In-memory [`PostRepository`] adapter.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{Table, lock};
use crate::domain::ports::{PostPersistenceError, PostRepository};
use crate::domain::{NewPost, Post, PostId, UserId};

/// Ordered post collection. Starts empty.
#[derive(Debug)]
pub struct InMemoryPostRepository {
    table: Mutex<Table<Post>>,
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self {
            table: Mutex::new(Table {
                rows: Vec::new(),
                counter: 0,
            }),
        }
    }
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, PostPersistenceError> {
        Ok(lock(&self.table).rows.clone())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostPersistenceError> {
        Ok(lock(&self.table).rows.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Post>, PostPersistenceError> {
        let mut posts: Vec<Post> = lock(&self.table)
            .rows
            .iter()
            .filter(|p| p.user_id() == Some(user_id))
            .cloned()
            .collect();
        posts.sort_by_key(|p| p.id);
        Ok(posts)
    }

    async fn save(&self, post: NewPost) -> Result<Post, PostPersistenceError> {
        let mut table = lock(&self.table);
        let id = match post.id {
            Some(id) => id,
            None => {
                table.counter += 1;
                PostId::new(table.counter)
            }
        };
        let stored = post.into_post(id);
        table.rows.push(stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: PostId) -> Result<Option<Post>, PostPersistenceError> {
        let mut table = lock(&self.table);
        let position = table.rows.iter().position(|p| p.id == id);
        Ok(position.map(|index| table.rows.remove(index)))
    }
}
