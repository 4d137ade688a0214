//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Registered users.
    users (id) {
        /// Identity primary key; explicit values are accepted.
        id -> Int4,
        name -> Varchar,
        birth_date -> Date,
    }
}

diesel::table! {
    /// Posts, each owned by exactly one user.
    posts (id) {
        id -> Int4,
        description -> Text,
        /// Owning user; the foreign key has no cascade.
        user_id -> Int4,
    }
}

diesel::joinable!(posts -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(users, posts);
