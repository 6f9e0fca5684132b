use super::handlers::get_constituent::{__path_get_constituent, get_constituent};
use super::handlers::get_constituents::{__path_get_constituents, get_constituents};
use super::handlers::get_issue::{__path_get_issue, get_issue};
use super::handlers::get_issues::{__path_get_issues, get_issues};
use super::handlers::get_magazine::{__path_get_magazine, get_magazine};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_magazine, get_issues, get_issue, get_constituents, get_constituent))]
pub struct MagazineApiDoc;

pub fn magazine_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/magazines/{{key}}", state.args.server.root_path),
            get(get_magazine),
        )
        .route(
            &format!(
                "{}/api/issues/{{magazine_key}}",
                state.args.server.root_path
            ),
            get(get_issues),
        )
        .route(
            &format!("{}/api/issue/{{key}}", state.args.server.root_path),
            get(get_issue),
        )
        .route(
            &format!(
                "{}/api/constituents/{{issue_key}}",
                state.args.server.root_path
            ),
            get(get_constituents),
        )
        .route(
            &format!("{}/api/constituent/{{id}}", state.args.server.root_path),
            get(get_constituent),
        )
}
