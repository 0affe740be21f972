//! Results aggregation and the persistence-sink seam.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::trial::TierReport;

/// One summarized tier, persisted exactly once per tier per model.
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    pub token_budget: u32,
    pub average_matches: f64,
    pub average_false_positives: f64,
    /// Trials that actually produced an outcome at this tier.
    pub successful_runs: u32,
    pub timestamp: DateTime<Utc>,
}

/// Averages a tier over the nominal run count.
///
/// Division is by `runs`, not by the successes achieved, so an unstable
/// provider scores lower instead of looking better on a thinner sample.
pub fn summarize_tier(report: &TierReport, runs: u32) -> SweepPoint {
    let matches: u64 = report
        .outcomes
        .iter()
        .map(|o| u64::from(o.matches_count))
        .sum();
    let false_positives: i64 = report.outcomes.iter().map(|o| o.false_positives_count).sum();
    SweepPoint {
        token_budget: report.token_budget,
        average_matches: matches as f64 / f64::from(runs),
        average_false_positives: false_positives as f64 / f64::from(runs),
        successful_runs: report.successful_runs,
        timestamp: Utc::now(),
    }
}

/// Append-only destination for per-tier results, keyed by model name.
pub trait ResultSink {
    fn record(&mut self, model_name: &str, point: &SweepPoint) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::TrialOutcome;

    fn outcome(matches: u32, false_positives: i64) -> TrialOutcome {
        TrialOutcome {
            matches_count: matches,
            false_positives_count: false_positives,
        }
    }

    #[test]
    fn full_tier_averages_over_the_run_count() {
        let report = TierReport {
            token_budget: 4000,
            outcomes: vec![outcome(8, 1); 5],
            successful_runs: 5,
            failed_runs: 0,
        };
        let point = summarize_tier(&report, 5);
        assert_eq!(point.token_budget, 4000);
        assert_eq!(point.average_matches, 8.0);
        assert_eq!(point.average_false_positives, 1.0);
        assert_eq!(point.successful_runs, 5);
    }

    #[test]
    fn partial_tier_still_divides_by_the_nominal_run_count() {
        // Two successes out of five nominal runs: instability drags the
        // average down instead of shrinking the sample.
        let report = TierReport {
            token_budget: 8000,
            outcomes: vec![outcome(10, 0), outcome(10, 0)],
            successful_runs: 2,
            failed_runs: 5,
        };
        let point = summarize_tier(&report, 5);
        assert_eq!(point.average_matches, 4.0);
        assert_eq!(point.average_false_positives, 0.0);
        assert_eq!(point.successful_runs, 2);
    }

    #[test]
    fn empty_tier_averages_to_zero() {
        let report = TierReport {
            token_budget: 1000,
            outcomes: vec![],
            successful_runs: 0,
            failed_runs: 5,
        };
        let point = summarize_tier(&report, 5);
        assert_eq!(point.average_matches, 0.0);
        assert_eq!(point.average_false_positives, 0.0);
        assert_eq!(point.successful_runs, 0);
    }

    #[test]
    fn negative_false_positives_survive_aggregation() {
        let report = TierReport {
            token_budget: 2000,
            outcomes: vec![outcome(10, -2), outcome(8, 0)],
            successful_runs: 2,
            failed_runs: 0,
        };
        let point = summarize_tier(&report, 2);
        assert_eq!(point.average_false_positives, -1.0);
    }
}
