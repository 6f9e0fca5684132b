use crate::application::http::query_extractor::{QueryMap, SearchForm};
use crate::application::http::query_params::SearchParams;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use spatrem_core::domain::knowledge_base::entities::Translator;
use spatrem_core::domain::knowledge_base::ports::KnowledgeBaseService;
use spatrem_core::domain::knowledge_base::value_objects::Page;
use spatrem_core::domain::query::filters::TranslatorFilter;

#[utoipa::path(
    post,
    path = "/translators",
    tag = "translators",
    summary = "Search translators (form)",
    description = "Form-encoded variant of the translator search. Form fields override query parameters of the same name.",
    request_body(
        content = String,
        content_type = "application/x-www-form-urlencoded",
        description = "sl, tl, genre, magazine, after_date, before_date, gender, nationality, language_area, year_birth, year_death, sortby, page, page_size"
    ),
    responses(
        (status = 200, body = Page<Translator>),
        (status = 400, description = "Unreadable form body"),
        (status = 503, description = "Knowledge base unavailable")
    ),
)]
pub async fn search_translators(
    State(state): State<AppState>,
    QueryMap(query): QueryMap,
    SearchForm(form): SearchForm,
) -> Result<Response<Page<Translator>>, ApiError> {
    let params = SearchParams::from_query_and_form(&query, &form);
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
