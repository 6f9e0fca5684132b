use crate::application::http::query_extractor::SearchParamsExtractor;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use spatrem_core::domain::knowledge_base::entities::Translation;
use spatrem_core::domain::knowledge_base::ports::KnowledgeBaseService;
use spatrem_core::domain::knowledge_base::value_objects::Page;
use spatrem_core::domain::query::filters::TranslationFilter;

#[utoipa::path(
    get,
    path = "/translations",
    tag = "translations",
    summary = "Search translations",
    description = "Returns one page of translations matching the filters. Filters set to \"any\" or left empty do not constrain the result.",
    params(
        ("sl" = Option<String>, Query, description = "Source language IRI"),
        ("tl" = Option<String>, Query, description = "Target language IRI"),
        ("genre" = Option<String>, Query, description = "Genre"),
        ("magazine" = Option<String>, Query, description = "Magazine IRI"),
        ("after_date" = Option<i64>, Query, description = "Published strictly after this year"),
        ("before_date" = Option<i64>, Query, description = "Published strictly before this year"),
        ("sortby" = Option<String>, Query, description = "Sort key, e.g. title, author, pubDate"),
        ("page" = Option<i64>, Query, description = "1-based page number"),
        ("page_size" = Option<i64>, Query, description = "Page size, 0 for everything"),
    ),
    responses(
        (status = 200, body = Page<Translation>),
        (status = 503, description = "Knowledge base unavailable")
    ),
)]
pub async fn get_translations(
    State(state): State<AppState>,
    SearchParamsExtractor(params): SearchParamsExtractor,
) -> Result<Response<Page<Translation>>, ApiError> {
    let page = state
        .service
        .search_translations(
            TranslationFilter::from_raw(&params.filter),
            params.pagination.pagination(),
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(page))
}
