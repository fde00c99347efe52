use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{HeaderMapExt, Origin, UserAgent};
use std::net::SocketAddr;
use std::time::Instant;
use tracing::info;

/// Middleware that logs every HTTP request once its response is ready.
///
/// ### Usage
/// ```ignore
/// use axum::Router;
/// use axum::middleware::from_fn;
/// use api::middleware::log_request;
///
/// let app = Router::new().layer(from_fn(log_request));
/// ```
///
/// ### Fields Logged:
/// - `method`, `path`, `status`, `latency_ms`
/// - `ip`: remote address, when the server was started with `ConnectInfo`
/// - `origin` / `user_agent`: request headers, `unknown` when absent
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    // Skip logging for preflight requests
    if req.method() == Method::OPTIONS {
        return next.run(req).await;
    }

    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".into());
    let origin = req
        .headers()
        .typed_get::<Origin>()
        .map(|o| o.to_string())
        .unwrap_or_else(|| "unknown".into());
    let user_agent = req
        .headers()
        .typed_get::<UserAgent>()
        .map(|ua| ua.to_string())
        .unwrap_or_else(|| "unknown".into());

    let start = Instant::now();
    let response = next.run(req).await;

    info!(
        method = %method,
        path = %path,
        ip = %ip,
        origin = %origin,
        user_agent = %user_agent,
        status = response.status().as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        "Handled request"
    );

    response
}
