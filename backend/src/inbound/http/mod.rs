//! HTTP inbound adapter exposing the user and post resources.

pub mod error;
pub mod health;
pub mod links;
pub mod posts;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;

pub use error::ApiResult;

use actix_web::web;

use self::state::UserResources;

/// Body extractor settings routing decode failures through the translator.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(error::json_error_handler)
}

/// Path extractor settings routing decode failures through the translator.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(error::path_error_handler)
}

fn resource_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(users::retrieve_all_users)
        .service(users::create_user)
        .service(posts::retrieve_all_posts)
        .service(posts::create_post)
        .service(users::retrieve_user)
        .service(users::delete_user);
}

/// Mount every user and post route under `prefix`, backed by `resources`.
pub fn resource_scope(prefix: &str, resources: UserResources) -> actix_web::Scope {
    web::scope(prefix)
        .app_data(web::Data::new(resources))
        .configure(resource_routes)
}

/// Register both resource trees, the extractor settings and the not-found
/// fallback.
///
/// `root` serves `/users…` at application level; `jpa` serves `/jpa/users…`
/// from its own scope, whose data shadows the application-level one.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
/// use actix_web::App;
/// use mockable::DefaultClock;
/// use rest_ws::inbound::http::configure;
/// use rest_ws::inbound::http::state::{MissingDelete, UserResources};
/// use rest_ws::outbound::memory::{InMemoryPostRepository, InMemoryUserRepository};
///
/// let resources = |policy| {
///     UserResources::new(
///         Arc::new(InMemoryUserRepository::empty()),
///         Arc::new(InMemoryPostRepository::new()),
///         policy,
///         Arc::new(DefaultClock),
///     )
/// };
/// let app = App::new().configure(configure(
///     resources(MissingDelete::NotFound),
///     resources(MissingDelete::Ignore),
/// ));
/// ```
pub fn configure(
    root: UserResources,
    jpa: UserResources,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(json_config())
            .app_data(path_config())
            .app_data(web::Data::new(root))
            .service(resource_scope("/jpa", jpa))
            .configure(resource_routes)
            .default_service(web::to(error::unmatched_route));
    }
}
