//! Absolute URLs and hypermedia links derived from the current request.

use actix_web::HttpRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::User;

/// `scheme://host` plus `path`, using the request's connection info.
pub fn absolute_url(req: &HttpRequest, path: &str) -> String {
    let info = req.connection_info();
    format!("{}://{}{}", info.scheme(), info.host(), path)
}

/// Location of a resource created by a POST to the current URL.
///
/// `POST /users` creating id 4 yields `http://host/users/4`.
pub fn created_location(req: &HttpRequest, id: impl std::fmt::Display) -> String {
    let base = req.path().trim_end_matches('/');
    absolute_url(req, &format!("{base}/{id}"))
}

/// Collection URL for the current item URL, e.g. `/jpa/users/1` to
/// `http://host/jpa/users`.
pub fn parent_collection(req: &HttpRequest) -> String {
    let path = req.path().trim_end_matches('/');
    let parent = path.rsplit_once('/').map_or("", |(parent, _)| parent);
    absolute_url(req, parent)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Link {
    #[schema(example = "http://localhost:8080/users")]
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserLinks {
    #[serde(rename = "all-users")]
    pub all_users: Link,
}

/// A user plus its `_links` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserModel {
    #[serde(flatten)]
    pub user: User,
    #[serde(rename = "_links")]
    pub links: UserLinks,
}

impl UserModel {
    /// Wrap `user`, linking back to the collection the request came through.
    pub fn for_request(user: User, req: &HttpRequest) -> Self {
        Self {
            user,
            links: UserLinks {
                all_users: Link {
                    href: parent_collection(req),
                },
            },
        }
    }
}
