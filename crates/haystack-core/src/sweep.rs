//! Sweep controller: geometric token budgets up to the provider's ceiling.

use tracing::info;

use crate::config::HaystackConfig;
use crate::provider::Provider;
use crate::report::{summarize_tier, ResultSink, SweepPoint};
use crate::trial::run_tier;

/// First tier of every sweep.
pub const BASE_TOKEN_BUDGET: u32 = 1000;

/// Tokens reserved at the top of the context window so the model has room
/// for its own answer.
pub const CONTEXT_HEADROOM: u32 = 400;

/// The strictly increasing budget sequence for a context window.
///
/// Budgets double from [`BASE_TOKEN_BUDGET`]; once a doubling would reach
/// `max_tokens`, the budget clamps to `max_tokens - CONTEXT_HEADROOM` and
/// the sweep ends there, so the maximum usable context is always tested
/// exactly once. A doubling that lands exactly on the clamp is not repeated.
pub fn tier_sequence(max_tokens: u32) -> Vec<u32> {
    let ceiling = max_tokens.saturating_sub(CONTEXT_HEADROOM);
    let mut tiers = Vec::new();
    let mut budget = BASE_TOKEN_BUDGET;
    loop {
        tiers.push(budget);
        if budget >= ceiling {
            break;
        }
        budget = if budget * 2 >= max_tokens {
            ceiling
        } else {
            budget * 2
        };
    }
    tiers
}

/// Entry point: runs every tier against `provider` and forwards one
/// [`SweepPoint`] per tier to `sink` as soon as the tier completes.
///
/// Trials within a tier and tiers within the sweep run strictly
/// sequentially; the only suspension points are the provider calls.
pub async fn run_sweep(
    provider: &dyn Provider,
    config: &HaystackConfig,
    runs_per_tier: u32,
    sink: &mut dyn ResultSink,
) -> anyhow::Result<Vec<SweepPoint>> {
    let mut points = Vec::new();
    for token_budget in tier_sequence(provider.max_tokens()) {
        info!(model = provider.model_name(), token_budget, "starting tier");
        let report = run_tier(provider, config, token_budget, runs_per_tier).await;
        let point = summarize_tier(&report, runs_per_tier);
        sink.record(provider.model_name(), &point)?;
        info!(
            token_budget,
            average_matches = point.average_matches,
            average_false_positives = point.average_false_positives,
            successful_runs = point.successful_runs,
            "tier complete"
        );
        points.push(point);
    }
    Ok(points)
}
