//! User resource handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users {"name":"Al","birthDate":"2000-01-01"}
//! DELETE /users/{id}
//! ```
//!
//! Mounted under both `/` and `/jpa`; the scope's [`UserResources`] decides
//! the backing store and the missing-id delete policy.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, web};
use tracing::{debug, info};

use crate::domain::{Error, User, UserId, UserPayload, validate_new_user};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::links::{UserModel, created_location};
use crate::inbound::http::state::{MissingDelete, UserResources};

/// List every user.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "Storage failure", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "retrieveAllUsers"
)]
#[get("/users")]
pub async fn retrieve_all_users(
    resources: web::Data<UserResources>,
) -> ApiResult<web::Json<Vec<User>>> {
    let users = resources.users.find_all().await?;
    Ok(web::Json(users))
}

/// Fetch one user, linked to the user collection.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User with an `all-users` link", body = UserModel),
        (status = 400, description = "Non-integer id", body = ErrorEnvelope),
        (status = 404, description = "Unknown id", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "retrieveUser"
)]
#[get("/users/{id}")]
pub async fn retrieve_user(
    req: HttpRequest,
    resources: web::Data<UserResources>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<UserModel>> {
    let id = UserId::new(path.into_inner());
    let user = resources
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::missing_id(id))?;
    Ok(web::Json(UserModel::for_request(user, &req)))
}

/// Create a user; responds with its location and an empty body.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "Created", headers(("Location" = String, description = "URL of the new user"))),
        (status = 400, description = "Malformed body or constraint violation", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    req: HttpRequest,
    resources: web::Data<UserResources>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let new_user = validate_new_user(payload.into_inner(), resources.today())
        .map_err(Error::validation_failed)?;
    let saved = resources.users.save(new_user).await?;
    info!(user_id = %saved.id, "user created");
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, created_location(&req, saved.id)))
        .finish())
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Deleted, or already absent under /jpa"),
        (status = 404, description = "Unknown id under /", body = ErrorEnvelope),
        (status = 500, description = "User still owns posts", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    resources: web::Data<UserResources>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = UserId::new(path.into_inner());
    match (resources.users.delete_by_id(id).await?, resources.missing_delete) {
        (Some(_), _) => info!(user_id = %id, "user deleted"),
        (None, MissingDelete::NotFound) => return Err(Error::missing_id(id)),
        (None, MissingDelete::Ignore) => debug!(user_id = %id, "delete of absent user ignored"),
    }
    Ok(HttpResponse::Ok().finish())
}
