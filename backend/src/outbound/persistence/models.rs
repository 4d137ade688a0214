//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; repositories convert them
//! to domain values.

use chrono::NaiveDate;
use diesel::prelude::*;

use super::schema::{posts, users};
use crate::domain::{NewPost, NewUser, Post, PostId, User, UserId};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId::new(row.id), row.name, row.birth_date)
    }
}

/// Insertable user; a `None` id lets the identity column choose.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Option<i32>,
    pub name: &'a str,
    pub birth_date: NaiveDate,
}

impl<'a> From<&'a NewUser> for NewUserRow<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            id: user.id().map(UserId::get),
            name: user.name(),
            birth_date: user.birth_date(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PostRow {
    pub id: i32,
    pub description: String,
    pub user_id: i32,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post::new(PostId::new(row.id), row.description, UserId::new(row.user_id))
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = posts)]
pub(crate) struct NewPostRow<'a> {
    pub id: Option<i32>,
    pub description: &'a str,
    pub user_id: i32,
}

impl<'a> From<&'a NewPost> for NewPostRow<'a> {
    fn from(post: &'a NewPost) -> Self {
        Self {
            id: post.id.map(PostId::get),
            description: &post.description,
            user_id: post.user_id.get(),
        }
    }
}
