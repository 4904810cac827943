use std::sync::Mutex;

use crate::modules::provider::domain::value_objects::{OutcomeStatus, SiteOutcome};

/// Receives one record per site call. Reporting never affects control flow.
pub trait OutcomeReporter: Send + Sync {
    fn report(&self, outcome: &SiteOutcome);
}

/// Writes one log line per site call
#[derive(Debug, Default)]
pub struct LoggingOutcomeReporter;

impl LoggingOutcomeReporter {
    pub fn new() -> Self {
        Self
    }
}

impl OutcomeReporter for LoggingOutcomeReporter {
    fn report(&self, outcome: &SiteOutcome) {
        match &outcome.status {
            OutcomeStatus::Success => log::info!(
                "[{}] {} ({}): {} items in {}ms",
                outcome.operation,
                outcome.site_name,
                outcome.site_key,
                outcome.item_count,
                outcome.elapsed_ms
            ),
            OutcomeStatus::Failed(reason) => log::warn!(
                "[{}] {} ({}) failed after {}ms: {}",
                outcome.operation,
                outcome.site_name,
                outcome.site_key,
                outcome.elapsed_ms,
                reason
            ),
            OutcomeStatus::TimedOut => log::warn!(
                "[{}] {} ({}) timed out after {}ms",
                outcome.operation,
                outcome.site_name,
                outcome.site_key,
                outcome.elapsed_ms
            ),
        }
    }
}

/// Keeps every reported outcome in memory, for embedders that surface them later
#[derive(Debug, Default)]
pub struct CollectingOutcomeReporter {
    outcomes: Mutex<Vec<SiteOutcome>>,
}

impl CollectingOutcomeReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcomes(&self) -> Vec<SiteOutcome> {
        match self.outcomes.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl OutcomeReporter for CollectingOutcomeReporter {
    fn report(&self, outcome: &SiteOutcome) {
        match self.outcomes.lock() {
            Ok(mut guard) => guard.push(outcome.clone()),
            Err(poisoned) => poisoned.into_inner().push(outcome.clone()),
        }
    }
}
