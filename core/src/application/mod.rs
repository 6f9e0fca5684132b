use tracing::info;

use crate::{
    domain::common::{SpatremConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::sparql::SparqlHttpClient,
};

pub type SpatremService = Service<SparqlHttpClient>;

/// Builds the service from validated configuration. Fails before anything is
/// served when the endpoint is missing or unusable.
pub fn create_service(config: SpatremConfig) -> Result<SpatremService, CoreError> {
    let client = SparqlHttpClient::new(&config.sparql)?;
    info!(endpoint = %client.endpoint(), "SPARQL client ready");

    Ok(Service::new(client))
}
