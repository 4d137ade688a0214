//! Builders for the per-scope resource bundles.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::{info, warn};

use rest_ws::domain::seed_users;
use rest_ws::inbound::http::state::{MissingDelete, UserResources};
use rest_ws::outbound::memory::{InMemoryPostRepository, InMemoryUserRepository};
use rest_ws::outbound::persistence::{DbPool, DieselPostRepository, DieselUserRepository};

/// Seeded in-memory stores served under `/`.
pub(super) fn build_root_resources() -> UserResources {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let users = InMemoryUserRepository::new(seed_users(clock.utc().date_naive()));
    UserResources::new(
        Arc::new(users),
        Arc::new(InMemoryPostRepository::new()),
        MissingDelete::NotFound,
        clock,
    )
}

/// Stores served under `/jpa`: Diesel when a pool exists, otherwise empty
/// in-memory stores. Deletes of absent ids succeed either way.
pub(super) fn build_jpa_resources(pool: Option<&DbPool>) -> UserResources {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    match pool {
        Some(pool) => {
            info!("serving /jpa from PostgreSQL");
            UserResources::new(
                Arc::new(DieselUserRepository::new(pool.clone())),
                Arc::new(DieselPostRepository::new(pool.clone())),
                MissingDelete::Ignore,
                clock,
            )
        }
        None => {
            warn!("no database configured; serving /jpa from memory");
            UserResources::new(
                Arc::new(InMemoryUserRepository::empty()),
                Arc::new(InMemoryPostRepository::new()),
                MissingDelete::Ignore,
                clock,
            )
        }
    }
}
