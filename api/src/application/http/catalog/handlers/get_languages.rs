use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use spatrem_core::domain::knowledge_base::entities::Language;
use spatrem_core::domain::knowledge_base::ports::KnowledgeBaseService;
use spatrem_core::domain::knowledge_base::value_objects::QueryResult;

#[utoipa::path(
    get,
    path = "/languages",
    tag = "catalog",
    summary = "List languages",
    description = "Lists every language known to the knowledge base.",
    responses(
        (status = 200, body = QueryResult<Language>)
    ),
)]
pub async fn get_languages(
    State(state): State<AppState>,
) -> Result<Response<QueryResult<Language>>, ApiError> {
    let languages = state.service.languages().await.map_err(ApiError::from)?;

    Ok(Response::OK(languages))
}

#[utoipa::path(
    get,
    path = "/languages/source",
    tag = "catalog",
    summary = "List source languages",
    description = "Lists the languages that occur as the language of an original work.",
    responses(
        (status = 200, body = QueryResult<Language>)
    ),
)]
pub async fn get_source_languages(
    State(state): State<AppState>,
) -> Result<Response<QueryResult<Language>>, ApiError> {
    let languages = state
        .service
        .source_languages()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(languages))
}

#[utoipa::path(
    get,
    path = "/languages/target",
    tag = "catalog",
    summary = "List target languages",
    description = "Lists the languages that occur as the language of a translation.",
    responses(
        (status = 200, body = QueryResult<Language>)
    ),
)]
pub async fn get_target_languages(
    State(state): State<AppState>,
) -> Result<Response<QueryResult<Language>>, ApiError> {
    let languages = state
        .service
        .target_languages()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(languages))
}
