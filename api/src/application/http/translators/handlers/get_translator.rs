use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use spatrem_core::domain::knowledge_base::entities::TranslatorDetail;
use spatrem_core::domain::knowledge_base::ports::KnowledgeBaseService;

#[utoipa::path(
    get,
    path = "/translators/{id}",
    tag = "translators",
    summary = "Get translator",
    description = "Retrieves a translator's biography, aliases and an aggregate of their works. Missing biographical fields are reported as \"unknown\".",
    params(
        ("id" = String, Path, description = "Translator id"),
    ),
    responses(
        (status = 200, body = TranslatorDetail),
        (status = 404, description = "Translator not found")
    ),
)]
pub async fn get_translator(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<TranslatorDetail>, ApiError> {
    let translator = state.service.translator(&id).await.map_err(ApiError::from)?;

    Ok(Response::OK(translator))
}
