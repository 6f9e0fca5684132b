use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use spatrem_core::domain::knowledge_base::entities::Constituent;
use spatrem_core::domain::knowledge_base::ports::KnowledgeBaseService;

#[utoipa::path(
    get,
    path = "/constituent/{id}",
    tag = "magazines",
    summary = "Get constituent",
    description = "Retrieves one translated work with its issue, translator and author.",
    params(
        ("id" = String, Path, description = "Constituent id"),
    ),
    responses(
        (status = 200, body = Constituent),
        (status = 404, description = "Constituent not found")
    ),
)]
pub async fn get_constituent(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Constituent>, ApiError> {
    let constituent = state.service.constituent(&id).await.map_err(ApiError::from)?;

    Ok(Response::OK(constituent))
}
