use super::handlers::get_translator::{__path_get_translator, get_translator};
use super::handlers::get_translators::{__path_get_translators, get_translators};
use super::handlers::search_translators::{__path_search_translators, search_translators};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_translators, search_translators, get_translator))]
pub struct TranslatorApiDoc;

pub fn translator_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/translators", state.args.server.root_path),
            get(get_translators).post(search_translators),
        )
        .route(
            &format!("{}/api/translators/{{id}}", state.args.server.root_path),
            get(get_translator),
        )
}
