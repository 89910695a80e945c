use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod config;
pub mod cors;
pub mod error;
pub mod routes;
pub mod state;

use state::AppState;

/// Assembles the router with request tracing and the given CORS policy.
pub fn create_app(app_state: AppState, cors: CorsLayer) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    Router::new()
        .merge(routes::health::routes())
        .merge(routes::status::routes())
        .merge(routes::games::routes())
        .layer(trace_layer)
        .layer(cors)
        .with_state(app_state)
}
