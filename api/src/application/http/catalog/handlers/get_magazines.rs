use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use spatrem_core::domain::knowledge_base::entities::Magazine;
use spatrem_core::domain::knowledge_base::ports::KnowledgeBaseService;
use spatrem_core::domain::knowledge_base::value_objects::QueryResult;

#[utoipa::path(
    get,
    path = "/magazines",
    tag = "catalog",
    summary = "List magazines",
    description = "Lists the journals in the knowledge base with their keys.",
    responses(
        (status = 200, body = QueryResult<Magazine>)
    ),
)]
pub async fn get_magazines(
    State(state): State<AppState>,
) -> Result<Response<QueryResult<Magazine>>, ApiError> {
    let magazines = state.service.magazines().await.map_err(ApiError::from)?;

    Ok(Response::OK(magazines))
}
