use std::time::Duration;

use reqwest::Url;

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct SpatremConfig {
    pub sparql: SparqlConfig,
}

#[derive(Clone, Debug)]
pub struct SparqlConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub max_retries: u32,
    pub retry_backoff: Duration,
}

impl SparqlConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(10),
            max_retries: 2,
            retry_backoff: Duration::from_millis(200),
        }
    }

    /// Parses the endpoint, refusing empty or non-http(s) addresses.
    pub fn endpoint_url(&self) -> Result<Url, CoreError> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(CoreError::Configuration(
                "SPARQL endpoint is not set".to_string(),
            ));
        }

        let url = Url::parse(endpoint).map_err(|e| {
            CoreError::Configuration(format!("invalid SPARQL endpoint '{}': {}", endpoint, e))
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(CoreError::Configuration(format!(
                "unsupported SPARQL endpoint scheme '{}'",
                scheme
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_rejects_empty() {
        let config = SparqlConfig::new("   ");
        assert!(matches!(
            config.endpoint_url(),
            Err(CoreError::Configuration(_))
        ));
    }

    #[test]
    fn test_endpoint_url_rejects_other_schemes() {
        let config = SparqlConfig::new("ftp://example.org/sparql");
        assert!(matches!(
            config.endpoint_url(),
            Err(CoreError::Configuration(_))
        ));
    }

    #[test]
    fn test_endpoint_url_accepts_http() {
        let config = SparqlConfig::new("http://localhost:7200/repositories/spatrem");
        let url = config.endpoint_url().unwrap();
        assert_eq!(url.path(), "/repositories/spatrem");
    }
}
