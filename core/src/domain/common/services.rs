use crate::domain::knowledge_base::ports::QueryExecutor;

/// Request-independent service state. The executor is built once at startup
/// and shared by every handler.
#[derive(Clone)]
pub struct Service<Q>
where
    Q: QueryExecutor,
{
    pub(crate) executor: Q,
}

impl<Q> Service<Q>
where
    Q: QueryExecutor,
{
    pub fn new(executor: Q) -> Self {
        Self { executor }
    }
}
