//! Router assembly
//!
//! [`build_router`] registers the API modules; [`build_app`] wraps them in
//! the tower stack. Unmatched paths and methods answer with `BadRouting`.

use axum::Router;
use http::{HeaderName, HeaderValue, Method, Uri};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::ServerState;
use crate::middleware::logging_middleware;
use crate::utils::AppError;

fn request_id_header() -> HeaderName {
    HeaderName::from_static("x-request-id")
}

/// Fresh UUID v4 for requests that arrive without an id
#[derive(Clone, Copy)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

async fn bad_routing(method: Method, uri: Uri) -> AppError {
    AppError::bad_routing(format!("No route for {method} {}", uri.path()))
}

pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(api::health::router())
        .merge(api::orders::router())
        .fallback(bad_routing)
        .method_not_allowed_fallback(bad_routing)
}

/// Router plus middleware; shared by the listener and by oneshot tests
pub fn build_app() -> Router<ServerState> {
    let stack = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(request_id_header(), XRequestId))
        .layer(PropagateRequestIdLayer::new(request_id_header()))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(logging_middleware))
        .layer(CorsLayer::permissive());

    build_router().layer(stack)
}
