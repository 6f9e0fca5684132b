use axum::{
    Form,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
    response::Response,
};
use std::collections::HashMap;

use super::query_params::SearchParams;
use super::server::api_entities::api_error::ApiError;

/// Extractor for the filter and pagination parameters of the search endpoints
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     SearchParamsExtractor(params): SearchParamsExtractor,
/// ) -> Result<Response<Page<Translation>>, ApiError> {
///     // Use params.filter, params.pagination
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SearchParamsExtractor(pub SearchParams);

/// Raw query string map, for handlers that merge it with a form body.
#[derive(Debug, Clone, Default)]
pub struct QueryMap(pub HashMap<String, String>);

/// Form-encoded search body; an unreadable body is a 400.
#[derive(Debug, Clone, Default)]
pub struct SearchForm(pub HashMap<String, String>);

fn query_map(parts: &Parts) -> HashMap<String, String> {
    let query_string = parts.uri.query().unwrap_or("");
    serde_urlencoded::from_str(query_string).unwrap_or_default()
}

impl<S> FromRequestParts<S> for SearchParamsExtractor
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(SearchParamsExtractor(SearchParams::from_query_map(
            &query_map(parts),
        )))
    }
}

impl<S> FromRequestParts<S> for QueryMap
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(QueryMap(query_map(parts)))
    }
}

impl<S> FromRequest<S> for SearchForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(form) = Form::<HashMap<String, String>>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(SearchForm(form))
    }
}
