use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use spatrem_core::domain::knowledge_base::ports::KnowledgeBaseService;
use spatrem_core::domain::knowledge_base::value_objects::QueryResult;

#[utoipa::path(
    get,
    path = "/pubDates",
    tag = "catalog",
    summary = "List publication dates",
    description = "Lists the distinct issue publication dates in ascending order.",
    responses(
        (status = 200, body = QueryResult<String>)
    ),
)]
pub async fn get_publication_dates(
    State(state): State<AppState>,
) -> Result<Response<QueryResult<String>>, ApiError> {
    let values = state.service.publication_dates().await.map_err(ApiError::from)?;

    Ok(Response::OK(values))
}

#[utoipa::path(
    get,
    path = "/years/birth",
    tag = "catalog",
    summary = "List birth years",
    description = "Lists the distinct birth years of translators.",
    responses(
        (status = 200, body = QueryResult<String>)
    ),
)]
pub async fn get_birth_years(
    State(state): State<AppState>,
) -> Result<Response<QueryResult<String>>, ApiError> {
    let values = state.service.birth_years().await.map_err(ApiError::from)?;

    Ok(Response::OK(values))
}

#[utoipa::path(
    get,
    path = "/years/death",
    tag = "catalog",
    summary = "List death years",
    description = "Lists the distinct death years of translators.",
    responses(
        (status = 200, body = QueryResult<String>)
    ),
)]
pub async fn get_death_years(
    State(state): State<AppState>,
) -> Result<Response<QueryResult<String>>, ApiError> {
    let values = state.service.death_years().await.map_err(ApiError::from)?;

    Ok(Response::OK(values))
}
