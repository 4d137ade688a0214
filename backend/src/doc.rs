//! OpenAPI documentation configuration.
//!
//! Paths are documented once, relative to the root scope; every route is
//! also served under `/jpa` with the persisted backend.

use utoipa::OpenApi;

use crate::domain::{Post, User, UserPayload, Violation};
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::links::{Link, UserLinks, UserModel};
use crate::inbound::http::posts::PostPayload;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "rest-ws",
        description = "Users and their posts, in memory under `/` and persisted under `/jpa`."
    ),
    servers(
        (url = "/", description = "In-memory backend"),
        (url = "/jpa", description = "Persisted backend")
    ),
    paths(
        crate::inbound::http::users::retrieve_all_users,
        crate::inbound::http::users::retrieve_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::posts::retrieve_all_posts,
        crate::inbound::http::posts::create_post,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        Post,
        UserPayload,
        PostPayload,
        UserModel,
        UserLinks,
        Link,
        Violation,
        ErrorEnvelope
    )),
    tags(
        (name = "users", description = "User resources"),
        (name = "posts", description = "Posts owned by a user"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
