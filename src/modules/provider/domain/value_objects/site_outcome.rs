use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which engine call produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteOperation {
    Search,
    Categories,
    Videos,
}

impl fmt::Display for SiteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SiteOperation::Search => "search",
            SiteOperation::Categories => "categories",
            SiteOperation::Videos => "videos",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reason", rename_all = "camelCase")]
pub enum OutcomeStatus {
    Success,
    Failed(String),
    TimedOut,
}

/// Structured record of one site call within a fan-out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteOutcome {
    pub site_key: String,
    pub site_name: String,
    pub operation: SiteOperation,
    pub status: OutcomeStatus,
    /// Items contributed; always 0 unless the call succeeded
    pub item_count: usize,
    pub elapsed_ms: u64,
    pub finished_at: DateTime<Utc>,
}

impl SiteOutcome {
    pub fn success(
        site_key: &str,
        site_name: &str,
        operation: SiteOperation,
        item_count: usize,
        elapsed_ms: u64,
    ) -> Self {
        Self::with_status(
            site_key,
            site_name,
            operation,
            OutcomeStatus::Success,
            item_count,
            elapsed_ms,
        )
    }

    pub fn failed(
        site_key: &str,
        site_name: &str,
        operation: SiteOperation,
        reason: impl Into<String>,
        elapsed_ms: u64,
    ) -> Self {
        Self::with_status(
            site_key,
            site_name,
            operation,
            OutcomeStatus::Failed(reason.into()),
            0,
            elapsed_ms,
        )
    }

    pub fn timed_out(
        site_key: &str,
        site_name: &str,
        operation: SiteOperation,
        elapsed_ms: u64,
    ) -> Self {
        Self::with_status(
            site_key,
            site_name,
            operation,
            OutcomeStatus::TimedOut,
            0,
            elapsed_ms,
        )
    }

    fn with_status(
        site_key: &str,
        site_name: &str,
        operation: SiteOperation,
        status: OutcomeStatus,
        item_count: usize,
        elapsed_ms: u64,
    ) -> Self {
        Self {
            site_key: site_key.to_string(),
            site_name: site_name.to_string(),
            operation,
            status,
            item_count,
            elapsed_ms,
            finished_at: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }
}
