use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use spatrem_core::domain::knowledge_base::entities::MagazineDetail;
use spatrem_core::domain::knowledge_base::ports::KnowledgeBaseService;

#[utoipa::path(
    get,
    path = "/magazines/{key}",
    tag = "magazines",
    summary = "Get magazine",
    description = "Retrieves a magazine's title together with its issues.",
    params(
        ("key" = String, Path, description = "Magazine key"),
    ),
    responses(
        (status = 200, body = MagazineDetail),
        (status = 404, description = "Magazine not found")
    ),
)]
pub async fn get_magazine(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<MagazineDetail>, ApiError> {
    let magazine = state.service.magazine(&key).await.map_err(ApiError::from)?;

    Ok(Response::OK(magazine))
}
