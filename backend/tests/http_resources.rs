//! End-to-end tests for the `/jpa` resources backed by embedded PostgreSQL.
//!
//! The root `/users` tree keeps its seeded in-memory stores, so these tests
//! also check the two trees never share state.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, test as actix_test};
use mockable::DefaultClock;
use pg_embedded_setup_unpriv::TestCluster;
use rest_ws::Trace;
use rest_ws::domain::seed_users;
use rest_ws::inbound::http::configure;
use rest_ws::inbound::http::state::{MissingDelete, UserResources};
use rest_ws::outbound::memory::{InMemoryPostRepository, InMemoryUserRepository};
use rest_ws::outbound::persistence::{
    DbPool, DieselPostRepository, DieselUserRepository, PoolConfig,
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[path = "support/pg_embed.rs"]
mod pg_embed;

mod support;

use pg_embed::test_cluster;
use support::{handle_cluster_setup_failure, migrate_schema, reset_database};

const TEST_DB: &str = "http_resources_test";

struct TestContext {
    _cluster: TestCluster,
    database_url: String,
}

fn setup_context() -> Result<TestContext, String> {
    let cluster = test_cluster()?;
    reset_database(&cluster, TEST_DB)?;
    let database_url = cluster.connection().database_url(TEST_DB);
    migrate_schema(&database_url)?;
    Ok(TestContext {
        _cluster: cluster,
        database_url,
    })
}

#[fixture]
fn db_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn root_resources() -> UserResources {
    let today = chrono::Utc::now().date_naive();
    UserResources::new(
        Arc::new(InMemoryUserRepository::new(seed_users(today))),
        Arc::new(InMemoryPostRepository::new()),
        MissingDelete::NotFound,
        Arc::new(DefaultClock),
    )
}

fn jpa_resources(pool: &DbPool) -> UserResources {
    UserResources::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(DieselPostRepository::new(pool.clone())),
        MissingDelete::Ignore,
        Arc::new(DefaultClock),
    )
}

/// Build the fully wired app against the test database.
///
/// Must run inside an actix system; the cluster itself is started outside it
/// because its bootstrap blocks.
async fn init_app(
    database_url: &str,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(2))
        .await
        .expect("pool builds");
    actix_test::init_service(
        App::new()
            .wrap(Trace)
            .configure(configure(root_resources(), jpa_resources(&pool))),
    )
    .await
}

async fn send(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    request: actix_test::TestRequest,
) -> ServiceResponse {
    actix_test::call_service(app, request.to_request()).await
}

async fn json_body(response: ServiceResponse) -> Value {
    let body = actix_test::read_body(response).await;
    serde_json::from_slice(&body).expect("JSON body")
}

async fn create_user(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    name: &str,
) -> (i64, String) {
    let response = send(
        app,
        actix_test::TestRequest::post()
            .uri("/jpa/users")
            .set_json(json!({ "name": name, "birthDate": "1990-05-17" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("Location header")
        .to_owned();
    let id = location
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
        .expect("numeric id in Location");
    (id, location)
}

#[rstest]
fn created_user_is_persisted_and_linked(db_context: Option<TestContext>) {
    let Some(ctx) = db_context else {
        eprintln!("SKIP-TEST-CLUSTER: created_user_is_persisted_and_linked skipped");
        return;
    };

    actix_rt::System::new().block_on(async {
        let app = init_app(&ctx.database_url).await;
        let (id, location) = create_user(&app, "Ada").await;
        assert!(location.ends_with(&format!("/jpa/users/{id}")), "{location}");

        let response = send(&app, actix_test::TestRequest::get().uri(&format!("/jpa/users/{id}"))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["name"], json!("Ada"));
        assert_eq!(body["birthDate"], json!("1990-05-17"));
        let all_users = body["_links"]["all-users"]["href"]
            .as_str()
            .expect("all-users link");
        assert!(all_users.ends_with("/jpa/users"), "{all_users}");

        let listed = json_body(send(&app, actix_test::TestRequest::get().uri("/jpa/users")).await).await;
        assert_eq!(listed.as_array().map(Vec::len), Some(1));
    });
}

#[rstest]
fn persisted_tree_is_isolated_from_the_seeded_tree(db_context: Option<TestContext>) {
    let Some(ctx) = db_context else {
        eprintln!("SKIP-TEST-CLUSTER: persisted_tree_is_isolated_from_the_seeded_tree skipped");
        return;
    };

    actix_rt::System::new().block_on(async {
        let app = init_app(&ctx.database_url).await;
        let persisted = json_body(send(&app, actix_test::TestRequest::get().uri("/jpa/users")).await).await;
        assert_eq!(persisted, json!([]));

        let seeded = json_body(send(&app, actix_test::TestRequest::get().uri("/users")).await).await;
        assert_eq!(seeded.as_array().map(Vec::len), Some(3));
    });
}

#[rstest]
fn posts_are_created_and_listed_for_their_owner(db_context: Option<TestContext>) {
    let Some(ctx) = db_context else {
        eprintln!("SKIP-TEST-CLUSTER: posts_are_created_and_listed_for_their_owner skipped");
        return;
    };

    actix_rt::System::new().block_on(async {
        let app = init_app(&ctx.database_url).await;
        let (id, _) = create_user(&app, "Ada").await;
        let posts_uri = format!("/jpa/users/{id}/posts");

        for description in ["first", "second"] {
            let response = send(
                &app,
                actix_test::TestRequest::post()
                    .uri(&posts_uri)
                    .set_json(json!({ "description": description })),
            )
            .await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let body = json_body(send(&app, actix_test::TestRequest::get().uri(&posts_uri)).await).await;
        let descriptions: Vec<_> = body
            .as_array()
            .expect("array body")
            .iter()
            .map(|post| post["description"].as_str().expect("description"))
            .collect();
        assert_eq!(descriptions, vec!["first", "second"]);
        assert!(body[0].get("user").is_none());
    });
}

#[rstest]
fn unknown_ids_report_not_found_but_delete_succeeds(db_context: Option<TestContext>) {
    let Some(ctx) = db_context else {
        eprintln!("SKIP-TEST-CLUSTER: unknown_ids_report_not_found_but_delete_succeeds skipped");
        return;
    };

    actix_rt::System::new().block_on(async {
        let app = init_app(&ctx.database_url).await;
        let response = send(&app, actix_test::TestRequest::get().uri("/jpa/users/999")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["message"], json!("id-999"));
        assert_eq!(body["details"], json!("uri=/jpa/users/999"));

        let response = send(&app, actix_test::TestRequest::get().uri("/jpa/users/999/posts")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, actix_test::TestRequest::delete().uri("/jpa/users/999")).await;
        assert_eq!(response.status(), StatusCode::OK);
    });
}

#[rstest]
fn deleting_a_user_with_posts_is_an_internal_error(db_context: Option<TestContext>) {
    let Some(ctx) = db_context else {
        eprintln!("SKIP-TEST-CLUSTER: deleting_a_user_with_posts_is_an_internal_error skipped");
        return;
    };

    actix_rt::System::new().block_on(async {
        let app = init_app(&ctx.database_url).await;
        let (id, _) = create_user(&app, "Ada").await;
        let response = send(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/jpa/users/{id}/posts"))
                .set_json(json!({ "description": "pinned" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = send(&app, actix_test::TestRequest::delete().uri(&format!("/jpa/users/{id}"))).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert!(body["timeStamp"].is_string());

        let response = send(&app, actix_test::TestRequest::get().uri(&format!("/jpa/users/{id}"))).await;
        assert_eq!(response.status(), StatusCode::OK);
    });
}
