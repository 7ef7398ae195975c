use deadpool_redis::redis;

use kernel::interface::session::VisitCounter;
use kernel::prelude::entity::{SessionId, VisitCount};
use kernel::KernelError;

use crate::database::RedisDatabase;
use crate::error::ConvertError;

/// Two weeks, matching the lifetime of the session cookie.
const SESSION_TTL_SECONDS: i64 = 60 * 60 * 24 * 14;

fn visit_key(session: &SessionId) -> String {
    format!("session:{}:num_visits", session.as_ref())
}

#[async_trait::async_trait]
impl VisitCounter for RedisDatabase {
    #[tracing::instrument(skip_all)]
    async fn count_visit(
        &self,
        session: &SessionId,
    ) -> error_stack::Result<VisitCount, KernelError> {
        let mut con = self.connection().await?;
        let key = visit_key(session);
        let (visits,): (i64,) = redis::pipe()
            .atomic()
            .incr(&key, 1)
            .expire(&key, SESSION_TTL_SECONDS)
            .ignore()
            .query_async(&mut con)
            .await
            .convert_error()?;
        tracing::debug!("session visit #{visits}");
        Ok(VisitCount::new(visits - 1))
    }
}
