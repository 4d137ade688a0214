//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::App;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

use crate::Trace;
use crate::domain::ports::{PostRepository, UserRepository};
use crate::domain::seed_users;
use crate::inbound::http::configure;
use crate::inbound::http::state::{MissingDelete, UserResources};
use crate::outbound::memory::{InMemoryPostRepository, InMemoryUserRepository};

/// Clock pinned to noon UTC on 2024-06-01.
pub struct FixtureClock;

impl FixtureClock {
    pub fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    pub fn today() -> NaiveDate {
        Self::now().date_naive()
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        Self::now().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Self::now()
    }
}

/// Resources over the given ports with the fixture clock.
pub fn resources_with(
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
    missing_delete: MissingDelete,
) -> UserResources {
    UserResources::new(users, posts, missing_delete, Arc::new(FixtureClock))
}

/// Seeded in-memory resources, as served under `/`.
pub fn seeded_resources() -> UserResources {
    resources_with(
        Arc::new(InMemoryUserRepository::new(seed_users(FixtureClock::today()))),
        Arc::new(InMemoryPostRepository::new()),
        MissingDelete::NotFound,
    )
}

/// Empty in-memory resources with the idempotent delete policy of `/jpa`.
pub fn idempotent_resources() -> UserResources {
    resources_with(
        Arc::new(InMemoryUserRepository::empty()),
        Arc::new(InMemoryPostRepository::new()),
        MissingDelete::Ignore,
    )
}

/// Application with the trace middleware and both resource trees.
pub fn test_app(
    root: UserResources,
    jpa: UserResources,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().wrap(Trace).configure(configure(root, jpa))
}
