use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use spatrem_core::domain::knowledge_base::entities::IssueDetail;
use spatrem_core::domain::knowledge_base::ports::KnowledgeBaseService;

#[utoipa::path(
    get,
    path = "/issue/{key}",
    tag = "magazines",
    summary = "Get issue",
    description = "Retrieves an issue with its translated constituents.",
    params(
        ("key" = String, Path, description = "Issue key"),
    ),
    responses(
        (status = 200, body = IssueDetail),
        (status = 404, description = "Issue not found")
    ),
)]
pub async fn get_issue(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<IssueDetail>, ApiError> {
    let issue = state.service.issue(&key).await.map_err(ApiError::from)?;

    Ok(Response::OK(issue))
}
