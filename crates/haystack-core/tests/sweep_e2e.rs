//! End-to-end sweep over a scripted provider and an in-memory sink.

use async_trait::async_trait;

use haystack_core::{
    run_sweep, EvalError, HaystackConfig, Presentation, Provider, ResultSink, SweepPoint,
};

/// Always answers with the same canned completion; counting is local.
struct CannedProvider {
    max_tokens: u32,
    completion: &'static str,
}

#[async_trait]
impl Provider for CannedProvider {
    fn model_name(&self) -> &str {
        "canned-3k"
    }

    fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    fn presentation(&self) -> Presentation {
        Presentation::Record
    }

    async fn count_tokens(&self, text: &str) -> Result<u32, EvalError> {
        Ok(text.split_whitespace().count() as u32)
    }

    async fn generate_completion(
        &self,
        _user_text: &str,
        _system_text: Option<&str>,
    ) -> Result<String, EvalError> {
        Ok(self.completion.to_string())
    }
}

#[derive(Default)]
struct VecSink {
    records: Vec<(String, SweepPoint)>,
}

impl ResultSink for VecSink {
    fn record(&mut self, model_name: &str, point: &SweepPoint) -> anyhow::Result<()> {
        self.records.push((model_name.to_string(), point.clone()));
        Ok(())
    }
}

#[tokio::test]
async fn sweep_covers_every_tier_and_persists_each_once() {
    let provider = CannedProvider {
        max_tokens: 3000,
        completion: "[{\"name\":\"Zzyzx\",\"fruit\":\"granite\"}]",
    };
    let config = HaystackConfig::default();
    let mut sink = VecSink::default();

    let points = run_sweep(&provider, &config, 2, &mut sink)
        .await
        .expect("sweep should complete");

    let budgets: Vec<u32> = points.iter().map(|p| p.token_budget).collect();
    assert_eq!(budgets, vec![1000, 2000, 2600]);

    for point in &points {
        assert_eq!(point.successful_runs, 2);
        // The canned answer names nobody real: one false positive per trial,
        // averaged over two runs.
        assert_eq!(point.average_matches, 0.0);
        assert_eq!(point.average_false_positives, 1.0);
    }

    assert_eq!(sink.records.len(), points.len());
    for ((model, recorded), computed) in sink.records.iter().zip(&points) {
        assert_eq!(model, "canned-3k");
        assert_eq!(recorded.token_budget, computed.token_budget);
    }
}

#[tokio::test]
async fn an_unusable_provider_yields_empty_tiers_not_a_crash() {
    let provider = CannedProvider {
        max_tokens: 3000,
        completion: "I refuse to answer in the requested format.",
    };
    let config = HaystackConfig::default();
    let mut sink = VecSink::default();

    let points = run_sweep(&provider, &config, 3, &mut sink)
        .await
        .expect("sweep should complete");

    assert_eq!(points.len(), 3);
    for point in &points {
        assert_eq!(point.successful_runs, 0);
        assert_eq!(point.average_matches, 0.0);
    }
}
