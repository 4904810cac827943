pub mod outcome_reporter;

pub use outcome_reporter::{CollectingOutcomeReporter, LoggingOutcomeReporter, OutcomeReporter};
