use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::soda::{repository::SodaRepository, SodaService};

use crate::openapi::ApiDoc;

pub mod sodas;

/// Service handle shared by all handlers; the repository is chosen at startup.
pub type DynSodaService = SodaService<dyn SodaRepository>;

#[derive(Clone)]
pub struct ServerState {
    pub sodas: Arc<DynSodaService>,
}

impl ServerState {
    pub fn new<R: SodaRepository + 'static>(repo: Arc<R>) -> Self {
        let repo: Arc<dyn SodaRepository> = repo;
        Self { sodas: Arc::new(SodaService::new(repo)) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, soda catalog and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let sodas = Router::new()
        .route("/products", get(sodas::list).post(sodas::create))
        .route("/products/:key", get(sodas::find_by_name).delete(sodas::delete_by_id))
        .route("/products/:key/increment", patch(sodas::increment));

    Router::new()
        .route("/health", get(health))
        .merge(sodas)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
