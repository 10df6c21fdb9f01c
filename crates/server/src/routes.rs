use std::sync::Arc;

use axum::{
    response::Html,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::resources::{Animal, User};
use service::{RecordRepository, RecordService};

use crate::observability;
use crate::openapi::ApiDoc;

pub mod records;

/// Collections served by the API, one repository per resource.
#[derive(Clone)]
pub struct ServerState {
    pub users: Arc<dyn RecordRepository>,
    pub animals: Arc<dyn RecordRepository>,
}

impl ServerState {
    pub fn new(seed: bool) -> Self {
        Self {
            users: RecordService::<User>::new(seed),
            animals: RecordService::<Animal>::new(seed),
        }
    }

    pub fn from_config(cfg: &configs::StoreConfig) -> Self {
        Self::new(cfg.seed)
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn index() -> Html<&'static str> {
    Html("<p>Hello, World!</p>")
}

async fn metrics() -> (axum::http::StatusCode, String) {
    observability::encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: record collections plus health, metrics and docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/apidocs/openapi.json", get(openapi_json));

    public
        .merge(records::router(state.users))
        .merge(records::router(state.animals))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request, carrying method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx and the like at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
