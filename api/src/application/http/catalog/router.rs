use super::handlers::get_languages::{
    __path_get_languages, __path_get_source_languages, __path_get_target_languages,
    get_languages, get_source_languages, get_target_languages,
};
use super::handlers::get_magazines::{__path_get_magazines, get_magazines};
use super::handlers::get_vocabulary::{
    __path_get_genders, __path_get_genres, __path_get_language_areas, __path_get_nationalities,
    get_genders, get_genres, get_language_areas, get_nationalities,
};
use super::handlers::get_years::{
    __path_get_birth_years, __path_get_death_years, __path_get_publication_dates,
    get_birth_years, get_death_years, get_publication_dates,
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_languages,
    get_source_languages,
    get_target_languages,
    get_publication_dates,
    get_birth_years,
    get_death_years,
    get_genres,
    get_genders,
    get_nationalities,
    get_language_areas,
    get_magazines
))]
pub struct CatalogApiDoc;

pub fn catalog_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/api/languages", root_path), get(get_languages))
        .route(
            &format!("{}/api/languages/source", root_path),
            get(get_source_languages),
        )
        .route(
            &format!("{}/api/languages/target", root_path),
            get(get_target_languages),
        )
        .route(
            &format!("{}/api/pubDates", root_path),
            get(get_publication_dates),
        )
        .route(&format!("{}/api/years/birth", root_path), get(get_birth_years))
        .route(&format!("{}/api/years/death", root_path), get(get_death_years))
        .route(&format!("{}/api/genres", root_path), get(get_genres))
        .route(&format!("{}/api/genders", root_path), get(get_genders))
        .route(
            &format!("{}/api/nationalities", root_path),
            get(get_nationalities),
        )
        .route(
            &format!("{}/api/language-areas", root_path),
            get(get_language_areas),
        )
        .route(&format!("{}/api/magazines", root_path), get(get_magazines))
}
