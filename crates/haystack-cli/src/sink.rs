//! CSV persistence: one append-only file per model.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use haystack_core::{ResultSink, SweepPoint};

const HEADER: &str = "maxTokens,matches,falsePositives,runs,timestamp\n";

/// Appends one row per completed tier to `<dir>/<model>.csv`, writing the
/// header row the first time a model's file is created.
pub struct CsvSink {
    dir: PathBuf,
}

impl CsvSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ResultSink for CsvSink {
    fn record(&mut self, model_name: &str, point: &SweepPoint) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating results directory {}", self.dir.display()))?;
        let path = self.dir.join(format!("{model_name}.csv"));
        let fresh = !path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening {}", path.display()))?;
        if fresh {
            file.write_all(HEADER.as_bytes())?;
        }
        writeln!(
            file,
            "{},{},{},{},{}",
            point.token_budget,
            point.average_matches,
            point.average_false_positives,
            point.successful_runs,
            point.timestamp.to_rfc3339(),
        )?;
        Ok(())
    }
}
