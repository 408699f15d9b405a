use super::state::ApiState;
use super::system;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Status and info endpoints, to be nested under `/api`.
pub fn system_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(system::status_handler))
        .routes(routes!(system::info_handler))
}
