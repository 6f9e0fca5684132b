use std::time::Instant;

use tracing::{error, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{entities::UpstreamHealthStatus, ports::HealthCheckService},
    knowledge_base::ports::QueryExecutor,
    query::sparql::SelectQuery,
};

impl<Q> HealthCheckService for Service<Q>
where
    Q: QueryExecutor,
{
    #[instrument(skip(self))]
    async fn readiness(&self) -> Result<UpstreamHealthStatus, CoreError> {
        let mut probe = SelectQuery::select_all();
        probe.limit(1);

        let started = Instant::now();
        self.executor
            .execute(&probe.render())
            .await
            .inspect_err(|e| error!("readiness probe failed: {}", e))?;

        Ok(UpstreamHealthStatus {
            status: "ok".to_string(),
            latency_ms: started.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::knowledge_base::services::tests::StubExecutor;

    #[tokio::test]
    async fn test_readiness_runs_trivial_query() {
        let executor = StubExecutor::default();
        let service = Service::new(executor.clone());

        let status = service.readiness().await.unwrap();
        assert_eq!(status.status, "ok");

        let queries = executor.queries();
        assert_eq!(queries.len(), 1);
        assert!(queries[0].ends_with("SELECT DISTINCT * WHERE {\n}\nLIMIT 1"));
    }

    #[tokio::test]
    async fn test_readiness_reports_upstream_failure() {
        let executor = StubExecutor::new(vec![(
            "LIMIT 1",
            Err(CoreError::UpstreamUnavailable("connection refused".to_string())),
        )]);
        let service = Service::new(executor);

        assert!(matches!(
            service.readiness().await,
            Err(CoreError::UpstreamUnavailable(_))
        ));
    }
}
