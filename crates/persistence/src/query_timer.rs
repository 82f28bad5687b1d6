//! Query timing.

use std::time::Instant;
use tracing::debug;

/// Times a database operation and logs its duration.
///
/// Usage:
/// ```ignore
/// let timer = QueryTimer::new("find_invite_by_id");
/// let result = sqlx::query_as::<_, InviteEntity>(...).fetch_optional(&pool).await;
/// timer.record();
/// result
/// ```
pub struct QueryTimer {
    query_name: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query_name: &'static str) -> Self {
        Self {
            query_name,
            start: Instant::now(),
        }
    }

    /// Log the elapsed duration.
    pub fn record(self) {
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        debug!(query = self.query_name, elapsed_ms, "Query completed");
    }
}
