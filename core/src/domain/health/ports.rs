use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, health::entities::UpstreamHealthStatus};

pub trait HealthCheckService: Send + Sync {
    /// Probes the query endpoint with a trivial query.
    fn readiness(&self) -> impl Future<Output = Result<UpstreamHealthStatus, CoreError>> + Send;
}
