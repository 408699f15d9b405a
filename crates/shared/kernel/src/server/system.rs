use super::response::{ApiResponse, ApiResult};
use super::state::ApiState;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use tessera_derive::{api_handler, api_model};
use tessera_domain::constants::SYSTEM_TAG;

#[api_model]
/// Liveness report
pub struct StatusResponse {
    /// Always `up` while the process serves requests
    status: &'static str,
    /// Uptime in seconds
    uptime: u64,
}

#[api_model]
/// Build and runtime information
pub struct InfoResponse {
    name: &'static str,
    version: &'static str,
    /// Cargo features the server binary was built with
    features: Vec<String>,
    /// Feature slices registered in the API state
    slices: Vec<&'static str>,
}

#[api_handler(
    get,
    path = "/status",
    responses((status = OK, description = "Liveness endpoint", body = ApiResponse<StatusResponse>)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn status_handler(State(state): State<ApiState>) -> impl IntoResponse {
    let body = StatusResponse { status: "up", uptime: state.uptime_secs() };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        ApiResponse::ok(body),
    )
}

#[api_handler(
    get,
    path = "/info",
    responses((status = OK, description = "Service information", body = ApiResponse<InfoResponse>)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn info_handler(State(state): State<ApiState>) -> ApiResult<InfoResponse> {
    Ok(ApiResponse::ok(InfoResponse {
        name: "tessera",
        version: env!("CARGO_PKG_VERSION"),
        features: state.features.clone(),
        slices: state.slice_names(),
    }))
}
