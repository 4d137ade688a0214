//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerSettings;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use color_eyre::eyre::{Context, Result};
use tracing::info;

use rest_ws::Trace;
#[cfg(debug_assertions)]
use rest_ws::doc::ApiDoc;
use rest_ws::inbound::http::configure;
use rest_ws::inbound::http::health::{HealthState, live, ready};
use rest_ws::inbound::http::state::UserResources;
use rest_ws::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use state_builders::{build_jpa_resources, build_root_resources};

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    root: UserResources,
    jpa: UserResources,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        root,
        jpa,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .wrap(Trace)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.configure(configure(root, jpa))
}

/// Migrate and pool the database when one is configured.
async fn connect_database(settings: &ServerSettings) -> Result<Option<DbPool>> {
    let Some(url) = settings.database_url() else {
        return Ok(None);
    };
    run_pending_migrations(url)
        .await
        .wrap_err("failed to migrate database")?;
    let pool = DbPool::new(PoolConfig::new(url).with_max_size(settings.pool_max_size()))
        .await
        .wrap_err("failed to build database pool")?;
    Ok(Some(pool))
}

/// Build the HTTP server from `settings`.
///
/// Marks `health_state` ready once the listener is bound. The returned
/// [`Server`] must be awaited to drive it.
///
/// # Errors
/// Fails when the bind address is invalid, the database cannot be migrated
/// or pooled, or the socket cannot be bound.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    settings: &ServerSettings,
) -> Result<Server> {
    let bind_addr = settings
        .bind_addr()
        .wrap_err("invalid REST_WS_BIND_ADDR")?;
    let pool = connect_database(settings).await?;
    let deps = AppDependencies {
        health_state: health_state.clone(),
        root: build_root_resources(),
        jpa: build_jpa_resources(pool.as_ref()),
    };

    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(bind_addr)
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?
        .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}
