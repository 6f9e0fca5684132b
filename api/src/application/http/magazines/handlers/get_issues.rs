use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use spatrem_core::domain::knowledge_base::entities::Issue;
use spatrem_core::domain::knowledge_base::ports::KnowledgeBaseService;
use spatrem_core::domain::knowledge_base::value_objects::QueryResult;

#[utoipa::path(
    get,
    path = "/issues/{magazine_key}",
    tag = "magazines",
    summary = "List issues",
    description = "Lists the issues of a magazine ordered by issue id.",
    params(
        ("magazine_key" = String, Path, description = "Magazine key"),
    ),
    responses(
        (status = 200, body = QueryResult<Issue>)
    ),
)]
pub async fn get_issues(
    Path(magazine_key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<QueryResult<Issue>>, ApiError> {
    let issues = state
        .service
        .issues(&magazine_key)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(issues))
}
