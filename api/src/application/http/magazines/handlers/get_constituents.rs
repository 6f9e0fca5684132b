use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use spatrem_core::domain::knowledge_base::entities::ConstituentSummary;
use spatrem_core::domain::knowledge_base::ports::KnowledgeBaseService;
use spatrem_core::domain::knowledge_base::value_objects::QueryResult;

#[utoipa::path(
    get,
    path = "/constituents/{issue_key}",
    tag = "magazines",
    summary = "List constituents",
    params(
        ("issue_key" = String, Path, description = "Issue key"),
    ),
    responses(
        (status = 200, body = QueryResult<ConstituentSummary>)
    ),
)]
pub async fn get_constituents(
    Path(issue_key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<QueryResult<ConstituentSummary>>, ApiError> {
    let constituents = state
        .service
        .constituents(&issue_key)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(constituents))
}
