use crate::{ThemeComposition, ThemeError, Themes};
use axum::extract::{Path, State};
use serde_json::json;
use tessera_derive::{api_handler, api_model};
use tessera_kernel::prelude::constants::THEMES_TAG;
use tessera_kernel::prelude::{ApiError, ApiResponse, ApiResult, ApiState};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[api_model]
/// Themes known to the provider
pub struct ThemeList {
    themes: Vec<String>,
}

impl From<ThemeError> for ApiError {
    fn from(err: ThemeError) -> Self {
        let details = json!({ "themeId": err.theme_id() });
        match err {
            ThemeError::ThemeNotFound { .. } => Self::not_found(err.to_string()),
            ThemeError::InvalidThemeSettings { .. } => Self::unprocessable(err.to_string()),
        }
        .with_details(details)
    }
}

#[api_handler(
    get,
    path = "/themes",
    responses(
        (status = OK, description = "Theme ids, sorted", body = ApiResponse<ThemeList>),
        (status = INTERNAL_SERVER_ERROR, description = "Themes could not be listed", body = ApiError),
    ),
    tag = THEMES_TAG,
)]
async fn list_themes(State(state): State<ApiState>) -> ApiResult<ThemeList> {
    let slice = state.try_get_slice::<Themes>()?;
    let themes = slice
        .resolver
        .provider()
        .list_themes()
        .await
        .map_err(|err| ApiError::internal(err.to_string()))?;

    Ok(ApiResponse::ok(ThemeList { themes }))
}

#[api_handler(
    get,
    path = "/themes/{id}",
    params(("id" = String, Path, description = "Theme id")),
    responses(
        (status = OK, description = "Resolved composition: `{ themeId, pages, issues }`"),
        (status = NOT_FOUND, description = "Theme not found", body = ApiError),
        (status = UNPROCESSABLE_ENTITY, description = "Theme settings are unusable", body = ApiError),
    ),
    tag = THEMES_TAG,
)]
async fn resolve_theme(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<ThemeComposition> {
    let slice = state.try_get_slice::<Themes>()?;
    let composition = slice.resolver.resolve_theme(&id).await?;
    Ok(ApiResponse::ok(composition))
}

pub fn themes_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(list_themes)).routes(routes!(resolve_theme))
}
