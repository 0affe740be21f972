//! Needle-in-a-haystack retrieval benchmark engine.
//!
//! Measures how reliably a completion provider retrieves ten planted facts
//! ("needles") from a synthetic filler corpus ("haystack") as the corpus size
//! sweeps up to the provider's context ceiling.
//!
//! # Architecture
//!
//! ```text
//! Sweep Controller (geometric token budgets, clamped to the ceiling)
//!        ↓ per tier
//! Run Executor (success/failure race up to the trial cap)
//!        ↓ per trial
//! Prompt Synthesizer → provider completion → Completion Parser → Fuzzy Matcher
//!        ↓
//! Results Aggregator → ResultSink (one SweepPoint per tier)
//! ```
//!
//! The engine depends only on the [`Provider`] capability trait; concrete
//! API adapters and persistence live with the driver binary.

pub mod config;
pub mod error;
pub mod parse;
pub mod prompt;
pub mod provider;
pub mod report;
pub mod score;
pub mod sweep;
pub mod trial;

pub use config::HaystackConfig;
pub use error::EvalError;
pub use parse::{parse_completion, ExtractedRecord, ExtractionResult};
pub use prompt::{synthesize, HaystackPrompt, NeedleFact};
pub use provider::{ModelSpec, Presentation, Provider};
pub use report::{summarize_tier, ResultSink, SweepPoint};
pub use score::{score, TrialOutcome};
pub use sweep::{run_sweep, tier_sequence, BASE_TOKEN_BUDGET, CONTEXT_HEADROOM};
pub use trial::{run_tier, run_trial, TierReport};
