use std::time::Duration;

use reqwest::{Client, StatusCode, Url, header::ACCEPT};
use tracing::{error, warn};

use crate::domain::{
    common::{SparqlConfig, entities::app_errors::CoreError},
    knowledge_base::ports::QueryExecutor,
    query::rows::RowRecord,
};
use crate::infrastructure::sparql::results::{SPARQL_RESULTS_JSON, SparqlResponse};

/// Upper bound for a single backoff sleep between attempts.
pub const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

/// Execution client for a SPARQL 1.1 protocol endpoint. Queries are sent as
/// form-encoded POST bodies; transient failures are retried with exponential
/// backoff.
#[derive(Debug, Clone)]
pub struct SparqlHttpClient {
    client: Client,
    endpoint: Url,
    max_retries: u32,
    retry_backoff: Duration,
}

impl SparqlHttpClient {
    pub fn new(config: &SparqlConfig) -> Result<Self, CoreError> {
        let endpoint = config.endpoint_url()?;
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CoreError::Configuration(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            max_retries: config.max_retries,
            retry_backoff: config.retry_backoff,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Delay before retry number `attempt + 1`: `retry_backoff * 2^attempt`,
    /// saturating and capped at [`MAX_RETRY_DELAY`].
    fn retry_delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
        self.retry_backoff
            .saturating_mul(factor)
            .min(MAX_RETRY_DELAY)
    }

    async fn send(&self, query: &str) -> Result<Vec<RowRecord>, CoreError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, SPARQL_RESULTS_JSON)
            .form(&[("query", query)])
            .send()
            .await
            .map_err(|e| {
                error!("SPARQL request failed: {}", e);
                CoreError::UpstreamUnavailable(e.to_string())
            })?;

        let status = response.status();
        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            error!(%status, "SPARQL endpoint unavailable");
            return Err(CoreError::UpstreamUnavailable(format!(
                "endpoint returned {}",
                status
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "SPARQL endpoint rejected query");
            return Err(CoreError::InternalServerError);
        }

        let body: SparqlResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                error!("SPARQL response timed out: {}", e);
                return CoreError::UpstreamUnavailable(e.to_string());
            }
            error!("Failed to parse SPARQL results: {}", e);
            CoreError::MalformedResponse(e.to_string())
        })?;

        Ok(body.into())
    }
}

impl QueryExecutor for SparqlHttpClient {
    async fn execute(&self, query: &str) -> Result<Vec<RowRecord>, CoreError> {
        let mut attempt = 0;
        loop {
            match self.send(query).await {
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    let delay = self.retry_delay(attempt);
                    attempt += 1;
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "retrying SPARQL query"
                    );
                    tokio::time::sleep(delay).await;
                }
                result => return result,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    fn config(endpoint: &str) -> SparqlConfig {
        let mut config = SparqlConfig::new(endpoint);
        config.timeout = Duration::from_millis(500);
        config.max_retries = 0;
        config.retry_backoff = Duration::from_millis(1);
        config
    }

    #[test]
    fn test_new_rejects_missing_endpoint() {
        let result = SparqlHttpClient::new(&SparqlConfig::new(""));
        assert!(matches!(result, Err(CoreError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transient_after_retries() {
        let mut config = SparqlConfig::new("http://127.0.0.1:9/sparql");
        config.timeout = Duration::from_millis(500);
        config.max_retries = 1;
        config.retry_backoff = Duration::from_millis(1);

        let client = SparqlHttpClient::new(&config).unwrap();
        let result = client.execute("SELECT * WHERE { ?s ?p ?o }").await;
        assert!(matches!(result, Err(CoreError::UpstreamUnavailable(_))));
    }

    #[test]
    fn test_retry_delay_doubles_and_saturates() {
        let mut config = config("http://127.0.0.1:9/sparql");
        config.retry_backoff = Duration::from_millis(100);
        let client = SparqlHttpClient::new(&config).unwrap();

        assert_eq!(client.retry_delay(0), Duration::from_millis(100));
        assert_eq!(client.retry_delay(3), Duration::from_millis(800));
        assert_eq!(client.retry_delay(32), MAX_RETRY_DELAY);
        assert_eq!(client.retry_delay(u32::MAX), MAX_RETRY_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_many_retries_end_in_upstream_unavailable() {
        let mut config = config("http://127.0.0.1:9/sparql");
        config.max_retries = 40;
        config.retry_backoff = Duration::from_nanos(1);

        let client = SparqlHttpClient::new(&config).unwrap();
        let result = client.execute("SELECT * WHERE { ?s ?p ?o }").await;
        assert!(matches!(result, Err(CoreError::UpstreamUnavailable(_))));
    }

    #[tokio::test]
    async fn test_stalled_body_is_transient() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\n\
                      Content-Type: application/sparql-results+json\r\n\
                      Content-Length: 1000\r\n\r\n{\"head\": ",
                )
                .await
                .unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let mut config = config(&format!("http://{}/sparql", addr));
        config.timeout = Duration::from_millis(200);
        let client = SparqlHttpClient::new(&config).unwrap();

        let result = client.execute("SELECT * WHERE { ?s ?p ?o }").await;
        assert!(matches!(result, Err(CoreError::UpstreamUnavailable(_))));
    }
}
