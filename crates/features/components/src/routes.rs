use crate::Components;
use axum::extract::{Path, State};
use tessera_derive::{api_handler, api_model};
use tessera_kernel::prelude::constants::COMPONENTS_TAG;
use tessera_kernel::prelude::{ApiError, ApiResponse, ApiResult, ApiState};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[api_model]
/// A registered component
pub struct ComponentSummary {
    key: String,
    /// Implementation location
    path: String,
    /// Schema flavour validating the settings (`typed`, `fields`, `open`)
    schema: &'static str,
    capabilities: Vec<String>,
}

#[api_model]
/// Capability tags of one component
pub struct CapabilitiesResponse {
    key: String,
    capabilities: Vec<String>,
}

#[api_handler(
    get,
    path = "/components",
    responses((status = OK, description = "Registered components, sorted by key", body = ApiResponse<Vec<ComponentSummary>>)),
    tag = COMPONENTS_TAG,
)]
async fn list_components(State(state): State<ApiState>) -> ApiResult<Vec<ComponentSummary>> {
    let slice = state.try_get_slice::<Components>()?;
    let summaries = slice
        .registry
        .snapshot()
        .iter()
        .map(|d| ComponentSummary {
            key: d.key.clone(),
            path: d.path.clone(),
            schema: d.schema.kind(),
            capabilities: d.capabilities.iter().map(str::to_owned).collect(),
        })
        .collect();

    Ok(ApiResponse::ok(summaries))
}

#[api_handler(
    get,
    path = "/components/{key}/capabilities",
    params(("key" = String, Path, description = "Component key")),
    responses(
        (status = OK, description = "Capability tags", body = ApiResponse<CapabilitiesResponse>),
        (status = NOT_FOUND, description = "Unknown component", body = ApiError),
    ),
    tag = COMPONENTS_TAG,
)]
async fn component_capabilities(
    State(state): State<ApiState>,
    Path(key): Path<String>,
) -> ApiResult<CapabilitiesResponse> {
    let slice = state.try_get_slice::<Components>()?;
    let capabilities = slice
        .registry
        .list_capabilities(&key)
        .map_err(|err| ApiError::not_found(err.to_string()))?;

    Ok(ApiResponse::ok(CapabilitiesResponse {
        capabilities: capabilities.iter().map(str::to_owned).collect(),
        key,
    }))
}

pub fn components_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(list_components))
        .routes(routes!(component_capabilities))
}
