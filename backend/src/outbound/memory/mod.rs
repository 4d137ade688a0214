//! In-process storage adapters.
//!
//! Each store keeps an insertion-ordered `Vec` behind a `Mutex` together with
//! the last assigned id. Stores are constructor-injected; nothing here is
//! global.

mod post_store;
mod user_store;

pub use post_store::InMemoryPostRepository;
pub use user_store::InMemoryUserRepository;

use std::sync::{Mutex, MutexGuard};

/// Ordered rows plus the id counter used when callers omit an id.
#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    counter: i32,
}

fn lock<T>(table: &Mutex<Table<T>>) -> MutexGuard<'_, Table<T>> {
    // Rows are pushed or removed whole, so a poisoned table is still usable.
    table
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
