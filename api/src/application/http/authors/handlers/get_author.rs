use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use spatrem_core::domain::knowledge_base::entities::AuthorDetail;
use spatrem_core::domain::knowledge_base::ports::KnowledgeBaseService;

#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    summary = "Get author",
    description = "Retrieves an author with every translation of their works.",
    params(
        ("id" = String, Path, description = "Author id"),
    ),
    responses(
        (status = 200, body = AuthorDetail),
        (status = 404, description = "Author not found")
    ),
)]
pub async fn get_author(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<AuthorDetail>, ApiError> {
    let author = state.service.author(&id).await.map_err(ApiError::from)?;

    Ok(Response::OK(author))
}
