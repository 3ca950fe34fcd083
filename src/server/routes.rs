use super::handlers::{self, AppState};
use axum::{
    Router,
    body::Body,
    http::{Method, Request},
    routing::{MethodRouter, get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, debug, info_span, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    GetResponse,
    CodeReview,
}

impl RouteKind {
    /// Routes mounted when the configuration does not list any.
    pub fn defaults() -> Vec<Self> {
        vec![Self::GetResponse]
    }

    pub fn method(self) -> Method {
        match self {
            Self::GetResponse => Method::GET,
            Self::CodeReview => Method::POST,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::GetResponse => "/get-response",
            Self::CodeReview => "/get-review",
        }
    }

    fn handler(self) -> MethodRouter<AppState> {
        match self {
            Self::GetResponse => get(handlers::get_response),
            Self::CodeReview => post(handlers::review_code),
        }
    }
}

/// Builds a router holding exactly the given routes. Repeated entries are
/// mounted once.
pub fn build_router(state: AppState, routes: &[RouteKind]) -> Router {
    if routes.is_empty() {
        warn!("No routes configured; every request will return 404");
    }

    let mut router = Router::new();
    let mut mounted = Vec::with_capacity(routes.len());
    for route in routes {
        if mounted.contains(route) {
            continue;
        }
        debug!("Mounting {} {}", route.method(), route.path());
        router = router.route(route.path(), route.handler());
        mounted.push(*route);
    }

    router
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = %Uuid::new_v4(),
                    )
                })
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
