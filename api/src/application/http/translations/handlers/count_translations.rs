use crate::application::http::query_extractor::SearchParamsExtractor;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::app_state::AppState;
use axum::{
    extract::State,
    http::{HeaderName, StatusCode},
    response::IntoResponse,
};
use spatrem_core::domain::knowledge_base::ports::KnowledgeBaseService;
use spatrem_core::domain::query::filters::TranslationFilter;

pub const RESULT_COUNT: HeaderName = HeaderName::from_static("x-result-count");

#[utoipa::path(
    head,
    path = "/translations",
    tag = "translations",
    summary = "Count translations",
    description = "Counts every translation matching the filters and returns the total in the X-Result-Count header.",
    params(
        ("sl" = Option<String>, Query, description = "Source language IRI"),
        ("tl" = Option<String>, Query, description = "Target language IRI"),
        ("genre" = Option<String>, Query, description = "Genre"),
        ("magazine" = Option<String>, Query, description = "Magazine IRI"),
        ("after_date" = Option<i64>, Query, description = "Published strictly after this year"),
        ("before_date" = Option<i64>, Query, description = "Published strictly before this year"),
    ),
    responses(
        (status = 200, headers(("x-result-count" = usize, description = "Number of matching translations")))
    ),
)]
pub async fn count_translations(
    State(state): State<AppState>,
    SearchParamsExtractor(params): SearchParamsExtractor,
) -> Result<impl IntoResponse, ApiError> {
    let count = state
        .service
        .count_translations(TranslationFilter::from_raw(&params.filter))
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::OK, [(RESULT_COUNT, count.to_string())]))
}
