//! Error types shared across the benchmark engine.

use thiserror::Error;

/// Everything that can go wrong between synthesis and scoring.
///
/// All three kinds are tier-local: the run executor logs the error and
/// charges the shared failure cap without distinguishing the cause. The only
/// fatal condition, an unknown model name at adapter construction, is raised
/// by the driver before the engine ever runs.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The provider's token-counting capability failed.
    #[error("token counting failed: {0}")]
    TokenCount(String),

    /// The provider's completion capability failed or returned an unusable
    /// response.
    #[error("completion request failed: {0}")]
    Completion(String),

    /// The response carried no decodable answer set.
    #[error("answer extraction failed: {0}")]
    Parse(String),
}
