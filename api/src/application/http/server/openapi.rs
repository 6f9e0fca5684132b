use crate::application::http::{
    authors::router::AuthorApiDoc, catalog::router::CatalogApiDoc, health::HealthApiDoc,
    magazines::router::MagazineApiDoc, translations::router::TranslationApiDoc,
    translators::router::TranslatorApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Spatrem API",
        description = "Query API over the Spaces of Translation knowledge base"
    ),
    nest(
        (path = "/api", api = CatalogApiDoc),
        (path = "/api", api = MagazineApiDoc),
        (path = "/api", api = TranslationApiDoc),
        (path = "/api", api = TranslatorApiDoc),
        (path = "/api", api = AuthorApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
