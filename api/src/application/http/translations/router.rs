use super::handlers::count_translations::{__path_count_translations, count_translations};
use super::handlers::get_translations::{__path_get_translations, get_translations};
use super::handlers::search_translations::{__path_search_translations, search_translations};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_translations, search_translations, count_translations))]
pub struct TranslationApiDoc;

pub fn translation_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/translations", state.args.server.root_path),
        get(get_translations)
            .post(search_translations)
            .head(count_translations),
    )
}
