//! Dashboard statistics: the one remote fetch the console retries.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::retry::{RetryPolicy, retry_with_backoff};

/// Headline counts shown on the statistics dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStatistics {
    pub open_variations: u32,
    pub pending_notices: u32,
    pub open_claims: u32,
    pub pending_approvals: u32,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatisticsError {
    #[error("statistics source unavailable: {0}")]
    Unavailable(String),

    #[error("statistics response malformed: {0}")]
    Malformed(String),
}

/// Where dashboard statistics come from.
#[async_trait]
pub trait StatisticsSource: Send + Sync {
    async fn fetch(&self) -> Result<DashboardStatistics, StatisticsError>;
}

/// Fetch statistics from `source`, retrying failures per `policy`.
///
/// Returns the last error once the retry budget is spent.
pub async fn load_statistics<S>(
    source: &S,
    policy: &RetryPolicy,
) -> Result<DashboardStatistics, StatisticsError>
where
    S: StatisticsSource + ?Sized,
{
    retry_with_backoff(policy, "dashboard statistics", |_| source.fetch()).await
}

/// Serves a fixed set of statistics.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticStatistics(pub DashboardStatistics);

#[async_trait]
impl StatisticsSource for StaticStatistics {
    async fn fetch(&self) -> Result<DashboardStatistics, StatisticsError> {
        Ok(self.0)
    }
}
