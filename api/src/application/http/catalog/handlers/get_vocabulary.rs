use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use spatrem_core::domain::knowledge_base::ports::KnowledgeBaseService;
use spatrem_core::domain::knowledge_base::value_objects::QueryResult;

#[utoipa::path(
    get,
    path = "/genres",
    tag = "catalog",
    summary = "List genres",
    description = "Lists the genres assigned to translated works.",
    responses(
        (status = 200, body = QueryResult<String>)
    ),
)]
pub async fn get_genres(
    State(state): State<AppState>,
) -> Result<Response<QueryResult<String>>, ApiError> {
    let values = state.service.genres().await.map_err(ApiError::from)?;

    Ok(Response::OK(values))
}

#[utoipa::path(
    get,
    path = "/genders",
    tag = "catalog",
    summary = "List genders",
    description = "Lists the genders recorded for translators.",
    responses(
        (status = 200, body = QueryResult<String>)
    ),
)]
pub async fn get_genders(
    State(state): State<AppState>,
) -> Result<Response<QueryResult<String>>, ApiError> {
    let values = state.service.genders().await.map_err(ApiError::from)?;

    Ok(Response::OK(values))
}

#[utoipa::path(
    get,
    path = "/nationalities",
    tag = "catalog",
    summary = "List nationalities",
    description = "Lists the nationalities recorded for translators.",
    responses(
        (status = 200, body = QueryResult<String>)
    ),
)]
pub async fn get_nationalities(
    State(state): State<AppState>,
) -> Result<Response<QueryResult<String>>, ApiError> {
    let values = state.service.nationalities().await.map_err(ApiError::from)?;

    Ok(Response::OK(values))
}

#[utoipa::path(
    get,
    path = "/language-areas",
    tag = "catalog",
    summary = "List language areas",
    description = "Lists the language areas recorded for translators.",
    responses(
        (status = 200, body = QueryResult<String>)
    ),
)]
pub async fn get_language_areas(
    State(state): State<AppState>,
) -> Result<Response<QueryResult<String>>, ApiError> {
    let values = state.service.language_areas().await.map_err(ApiError::from)?;

    Ok(Response::OK(values))
}
