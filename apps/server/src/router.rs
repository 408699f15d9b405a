use axum::Router;
use tessera::kernel::server::ApiState;
use tessera::server::router::{components_router, system_router, themes_router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

const API_PREFIX: &str = "/api";
const DOCS_PATH: &str = "/api/docs";

#[derive(OpenApi)]
#[openapi(
    info(title = "Tessera", description = "Theme and page composition API"),
    tags(
        (name = "System", description = "Liveness and build information"),
        (name = "Components", description = "Component registry"),
        (name = "Themes", description = "Theme resolution"),
    )
)]
struct ApiDoc;

/// Builds the full HTTP surface: every feature router under `/api` plus the Scalar UI.
pub fn init(state: ApiState) -> Router {
    let api = OpenApiRouter::new()
        .merge(system_router())
        .merge(components_router())
        .merge(themes_router());

    let (routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest(API_PREFIX, api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    Router::new().merge(routes).merge(Scalar::with_url(DOCS_PATH, api_doc))
}
