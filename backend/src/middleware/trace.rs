//! Tracing middleware attaching request-scoped context.
//!
//! Each incoming request receives a UUID trace identifier and a short
//! description (`uri=<path>`) stored in task-local storage, so the error
//! translator can fill the `details` field and logs can be correlated.
//!
//! Tokio task-local variables are not inherited across spawned tasks. Use
//! [`RequestContext::scope`] when spawning new tasks or moving work onto
//! blocking threads to keep the active context in scope.

use std::future::Future;
use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tokio::task_local;
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::TRACE_ID_HEADER;

task_local! {
    static REQUEST_CONTEXT: RequestContext;
}

/// Per-request context exposed via task-local storage.
///
/// # Examples
/// ```
/// use rest_ws::middleware::RequestContext;
///
/// async fn handler() {
///     if let Some(ctx) = RequestContext::current() {
///         println!("{} {}", ctx.trace_id(), ctx.description());
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    trace_id: Uuid,
    description: String,
}

impl RequestContext {
    /// Build a context for the request at `path` with a fresh trace id.
    pub fn for_path(path: &str) -> Self {
        Self {
            trace_id: Uuid::new_v4(),
            description: format!("uri={path}"),
        }
    }

    /// Returns a copy of the current context if one is in scope.
    pub fn current() -> Option<Self> {
        REQUEST_CONTEXT.try_with(Clone::clone).ok()
    }

    /// Description of the current request, `None` outside a request.
    pub fn current_description() -> Option<String> {
        REQUEST_CONTEXT
            .try_with(|ctx| ctx.description.clone())
            .ok()
    }

    pub fn trace_id(&self) -> Uuid {
        self.trace_id
    }

    /// Short request description such as `uri=/users/999`.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Execute the provided future with `ctx` in scope.
    ///
    /// # Examples
    /// ```
    /// use rest_ws::middleware::RequestContext;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let ctx = RequestContext::for_path("/users");
    /// let observed = RequestContext::scope(ctx.clone(), async {
    ///     RequestContext::current_description()
    /// })
    /// .await;
    /// assert_eq!(observed.as_deref(), Some("uri=/users"));
    /// # });
    /// ```
    pub async fn scope<Fut>(ctx: RequestContext, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        REQUEST_CONTEXT.scope(ctx, fut).await
    }
}

/// Tracing middleware attaching a [`RequestContext`] and adding a
/// `trace-id` header to every response.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use rest_ws::Trace;
///
/// let app = App::new().wrap(Trace);
/// ```
#[derive(Clone)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// Service wrapper produced by [`Trace`].
pub struct TraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let ctx = RequestContext::for_path(req.path());
        let trace_id = ctx.trace_id;
        let method = req.method().clone();
        let path = req.path().to_owned();
        let fut = REQUEST_CONTEXT.sync_scope(ctx.clone(), || self.service.call(req));
        Box::pin(RequestContext::scope(ctx, async move {
            let mut res = fut.await?;
            debug!(
                %trace_id,
                %method,
                path = %path,
                status = res.status().as_u16(),
                "request completed"
            );
            match HeaderValue::from_str(&trace_id.to_string()) {
                Ok(value) => {
                    res.response_mut()
                        .headers_mut()
                        .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
                }
                Err(error) => {
                    error!(
                        %error,
                        %trace_id,
                        "failed to encode trace identifier header"
                    );
                }
            }
            Ok(res)
        }))
    }
}
