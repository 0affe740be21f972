//! Run executor: one trial end-to-end, and the per-tier retry loop.

use tracing::{info, warn};

use crate::config::HaystackConfig;
use crate::error::EvalError;
use crate::parse::parse_completion;
use crate::prompt::synthesize;
use crate::provider::Provider;
use crate::score::{score, TrialOutcome};

/// Outcome of one tier's trial loop.
#[derive(Debug, Clone)]
pub struct TierReport {
    pub token_budget: u32,
    /// Outcomes of the successful trials only.
    pub outcomes: Vec<TrialOutcome>,
    pub successful_runs: u32,
    pub failed_runs: u32,
}

/// One trial: synthesize, complete, parse, score.
///
/// Any error aborts the trial with no partial credit; the caller decides
/// what a failure costs.
pub async fn run_trial(
    provider: &dyn Provider,
    config: &HaystackConfig,
    token_budget: u32,
) -> Result<TrialOutcome, EvalError> {
    let prompt = synthesize(provider, config, token_budget).await?;
    let question = config.question(provider.presentation());
    let response = provider
        .generate_completion(&prompt.text, Some(question))
        .await?;
    let extraction = parse_completion(&response, provider.presentation())?;
    Ok(score(&prompt.needles, &extraction))
}

/// Runs trials until either counter reaches `runs`.
///
/// Success and failure race symmetrically: a tier that fails `runs` times
/// before any trial succeeds terminates with zero outcomes. Failure causes
/// are not differentiated; each is tier-local, logged, and charged against
/// the shared failure cap.
pub async fn run_tier(
    provider: &dyn Provider,
    config: &HaystackConfig,
    token_budget: u32,
    runs: u32,
) -> TierReport {
    let mut outcomes = Vec::new();
    let mut successful_runs = 0u32;
    let mut failed_runs = 0u32;

    while successful_runs < runs && failed_runs < runs {
        match run_trial(provider, config, token_budget).await {
            Ok(outcome) => {
                successful_runs += 1;
                info!(
                    token_budget,
                    run = successful_runs,
                    of = runs,
                    matches = outcome.matches_count,
                    false_positives = outcome.false_positives_count,
                    "trial complete"
                );
                outcomes.push(outcome);
            }
            Err(e) => {
                failed_runs += 1;
                warn!(token_budget, failed = failed_runs, error = %e, "trial failed");
            }
        }
    }

    TierReport {
        token_budget,
        outcomes,
        successful_runs,
        failed_runs,
    }
}
