use crate::application::http::query_extractor::SearchParamsExtractor;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use spatrem_core::domain::knowledge_base::entities::Translator;
use spatrem_core::domain::knowledge_base::ports::KnowledgeBaseService;
use spatrem_core::domain::knowledge_base::value_objects::Page;
use spatrem_core::domain::query::filters::TranslatorFilter;

#[utoipa::path(
    get,
    path = "/translators",
    tag = "translators",
    summary = "Search translators",
    description = "Returns translators matching the filters, one entry per translator with its multi-valued attributes merged. Pages are cut after merging.",
    params(
        ("sl" = Option<String>, Query, description = "Source language IRI"),
        ("tl" = Option<String>, Query, description = "Target language IRI"),
        ("genre" = Option<String>, Query, description = "Genre"),
        ("magazine" = Option<String>, Query, description = "Magazine IRI"),
        ("after_date" = Option<i64>, Query, description = "Published strictly after this year"),
        ("before_date" = Option<i64>, Query, description = "Published strictly before this year"),
        ("gender" = Option<String>, Query, description = "Gender"),
        ("nationality" = Option<String>, Query, description = "Nationality"),
        ("language_area" = Option<String>, Query, description = "Language area"),
        ("year_birth" = Option<i64>, Query, description = "Born strictly after this year"),
        ("year_death" = Option<i64>, Query, description = "Died strictly before this year"),
        ("sortby" = Option<String>, Query, description = "Sort key, e.g. name, gender, birth_year"),
        ("page" = Option<i64>, Query, description = "1-based page number"),
        ("page_size" = Option<i64>, Query, description = "Page size, 0 for everything"),
    ),
    responses(
        (status = 200, body = Page<Translator>),
        (status = 503, description = "Knowledge base unavailable")
    ),
)]
pub async fn get_translators(
    State(state): State<AppState>,
    SearchParamsExtractor(params): SearchParamsExtractor,
) -> Result<Response<Page<Translator>>, ApiError> {
    let page = state
        .service
        .search_translators(
            TranslatorFilter::from_raw(&params.filter),
            params.pagination.pagination(),
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
