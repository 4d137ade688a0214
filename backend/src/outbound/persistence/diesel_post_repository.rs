//! PostgreSQL-backed `PostRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PostPersistenceError, PostRepository};
use crate::domain::{NewPost, Post, PostId, UserId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::identity_sequence::advance_identity_sequence;
use super::models::{NewPostRow, PostRow};
use super::pool::{DbPool, PoolError};
use super::schema::posts;

/// Diesel-backed implementation of the post repository port.
#[derive(Clone)]
pub struct DieselPostRepository {
    pool: DbPool,
}

impl DieselPostRepository {
    /// Create a repository that checks connections out of `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> PostPersistenceError {
    map_basic_pool_error(error, PostPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> PostPersistenceError {
    map_basic_diesel_error(
        error,
        PostPersistenceError::query,
        PostPersistenceError::connection,
    )
}

#[async_trait]
impl PostRepository for DieselPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, PostPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = posts::table
            .select(PostRow::as_select())
            .load::<PostRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, PostPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = posts::table
            .filter(posts::id.eq(id.get()))
            .select(PostRow::as_select())
            .first::<PostRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Post::from))
    }

    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<Post>, PostPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = posts::table
            .filter(posts::user_id.eq(user_id.get()))
            .order(posts::id.asc())
            .select(PostRow::as_select())
            .load::<PostRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn save(&self, post: NewPost) -> Result<Post, PostPersistenceError> {
        use diesel_async::AsyncConnection as _;
        use diesel_async::scoped_futures::ScopedFutureExt as _;

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let values = NewPostRow::from(&post);

        let saved = if post.id.is_none() {
            diesel::insert_into(posts::table)
                .values(&values)
                .returning(PostRow::as_returning())
                .get_result::<PostRow>(&mut conn)
                .await
        } else {
            conn.transaction(|conn| {
                async move {
                    let row = diesel::insert_into(posts::table)
                        .values(&values)
                        .on_conflict(posts::id)
                        .do_update()
                        .set((
                            posts::description.eq(excluded(posts::description)),
                            posts::user_id.eq(excluded(posts::user_id)),
                        ))
                        .returning(PostRow::as_returning())
                        .get_result::<PostRow>(conn)
                        .await?;
                    advance_identity_sequence(conn, "posts").await?;
                    Ok::<_, diesel::result::Error>(row)
                }
                .scope_boxed()
            })
            .await
        };
        let row = saved.map_err(map_diesel_error)?;
        Ok(Post::from(row))
    }

    async fn delete_by_id(&self, id: PostId) -> Result<Option<Post>, PostPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::delete(posts::table.filter(posts::id.eq(id.get())))
            .returning(PostRow::as_returning())
            .get_result::<PostRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Post::from))
    }
}
