//! Post sub-resource handlers.
//!
//! ```text
//! GET  /users/{id}/posts
//! POST /users/{id}/posts {"description":"..."}
//! ```

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Error, NewPost, Post, PostId, User, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorEnvelope;
use crate::inbound::http::links::created_location;
use crate::inbound::http::state::UserResources;

/// Post create body. The owner always comes from the path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct PostPayload {
    /// Optional explicit identifier.
    pub id: Option<i32>,
    #[schema(example = "My first post")]
    pub description: String,
}

async fn existing_user(resources: &UserResources, id: UserId) -> ApiResult<User> {
    resources
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::missing_id(id))
}

/// List the posts of one user.
#[utoipa::path(
    get,
    path = "/users/{id}/posts",
    params(("id" = i32, Path, description = "Owning user id")),
    responses(
        (status = 200, description = "Posts owned by the user", body = [Post]),
        (status = 404, description = "Unknown user", body = ErrorEnvelope)
    ),
    tags = ["posts"],
    operation_id = "retrieveAllPosts"
)]
#[get("/users/{id}/posts")]
pub async fn retrieve_all_posts(
    resources: web::Data<UserResources>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Vec<Post>>> {
    let user = existing_user(&resources, UserId::new(path.into_inner())).await?;
    let posts = resources.posts.find_by_user(user.id).await?;
    Ok(web::Json(posts))
}

/// Create a post owned by the user in the path.
#[utoipa::path(
    post,
    path = "/users/{id}/posts",
    params(("id" = i32, Path, description = "Owning user id")),
    request_body = PostPayload,
    responses(
        (status = 201, description = "Created", headers(("Location" = String, description = "URL of the new post"))),
        (status = 400, description = "Malformed body", body = ErrorEnvelope),
        (status = 404, description = "Unknown user", body = ErrorEnvelope)
    ),
    tags = ["posts"],
    operation_id = "createPost"
)]
#[post("/users/{id}/posts")]
pub async fn create_post(
    req: HttpRequest,
    resources: web::Data<UserResources>,
    path: web::Path<i32>,
    payload: web::Json<PostPayload>,
) -> ApiResult<HttpResponse> {
    let user = existing_user(&resources, UserId::new(path.into_inner())).await?;
    let PostPayload { id, description } = payload.into_inner();
    let saved = resources
        .posts
        .save(NewPost {
            id: id.map(PostId::new),
            description,
            user_id: user.id,
        })
        .await?;
    info!(user_id = %user.id, post_id = %saved.id, "post created");
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, created_location(&req, saved.id)))
        .finish())
}
