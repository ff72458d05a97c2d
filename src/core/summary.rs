//! Run summary aggregation.

use crate::models::media::{OutcomeKind, RequestOutcome, RunSummary};

/// Fold per-entry outcomes into a run summary.
///
/// Pure function, no I/O. Every input outcome is kept, in order; the counts
/// always add up to the number of outcomes.
pub fn summarize(outcomes: Vec<RequestOutcome>) -> RunSummary {
    let mut summary = RunSummary {
        outcomes,
        ..Default::default()
    };

    for outcome in &summary.outcomes {
        match outcome.kind {
            OutcomeKind::Requested => summary.requested += 1,
            OutcomeKind::AlreadySatisfied => summary.already_satisfied += 1,
            OutcomeKind::NotFound => summary.not_found += 1,
            OutcomeKind::Error => summary.errors += 1,
        }
    }

    summary
}
