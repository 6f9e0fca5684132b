use super::handlers::get_author::{__path_get_author, get_author};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_author))]
pub struct AuthorApiDoc;

pub fn author_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/authors/{{id}}", state.args.server.root_path),
        get(get_author),
    )
}
