use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::analyzer::analyzer::TranscriptAnalyzer;
use crate::evaluator::evaluator::EvaluationResult;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read transcripts: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub file_name: String,
    pub result: EvaluationResult,
}

/// Aggregate totals across one batch of transcripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub transcripts: u32,
    pub undefined_words: u32,
    pub positive_words: u32,
    pub negative_words: u32,
    pub neutral_words: u32,
    pub experience_score: i32,
    pub performance_score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub entries: Vec<ReportEntry>,
    pub summary: ReportSummary,
}

impl BatchReport {
    /// Render the batch as a plain-text report.
    pub fn render(&self) -> String {
        let mut out = String::new();
        writeln!(out, "Transcript evaluation report").unwrap();
        writeln!(out, "============================").unwrap();

        for entry in &self.entries {
            let r = &entry.result;
            writeln!(out, "\n{}", entry.file_name).unwrap();
            writeln!(out, "  undefined words:   {}", r.undefined_words).unwrap();
            writeln!(out, "  positive words:    {}", r.positive_words).unwrap();
            writeln!(out, "  negative words:    {}", r.negative_words).unwrap();
            writeln!(out, "  neutral words:     {}", r.neutral_words).unwrap();
            writeln!(out, "  experience score:  {}", r.experience_score).unwrap();
            writeln!(out, "  performance score: {}", r.performance_score).unwrap();
        }

        let s = &self.summary;
        writeln!(out, "\nTotals ({} transcripts)", s.transcripts).unwrap();
        writeln!(out, "  undefined words:   {}", s.undefined_words).unwrap();
        writeln!(out, "  positive words:    {}", s.positive_words).unwrap();
        writeln!(out, "  negative words:    {}", s.negative_words).unwrap();
        writeln!(out, "  neutral words:     {}", s.neutral_words).unwrap();
        writeln!(out, "  experience score:  {}", s.experience_score).unwrap();
        writeln!(out, "  performance score: {}", s.performance_score).unwrap();
        out
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ReportError> {
        fs::write(path, self.render())?;
        Ok(())
    }
}

/// Evaluate every `.txt` transcript in `dir` and aggregate the results.
///
/// Entries are processed in file-name order, which makes the report
/// deterministic for a fixed directory and classifier state.
pub fn run_batch<P: AsRef<Path>>(
    analyzer: &TranscriptAnalyzer,
    dir: P,
) -> Result<BatchReport, ReportError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("txt") {
            paths.push(path);
        }
    }
    paths.sort();

    info!(count = paths.len(), "evaluating transcript batch");

    let mut entries = Vec::with_capacity(paths.len());
    let mut summary = ReportSummary::default();

    for path in paths {
        let text = fs::read_to_string(&path)?;
        let result = analyzer.evaluate(&text);
        debug!(file = %path.display(), "transcript evaluated");

        summary.transcripts += 1;
        summary.undefined_words += result.undefined_words;
        summary.positive_words += result.positive_words;
        summary.negative_words += result.negative_words;
        summary.neutral_words += result.neutral_words;
        summary.experience_score += result.experience_score;
        summary.performance_score += result.performance_score;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        entries.push(ReportEntry { file_name, result });
    }

    Ok(BatchReport { entries, summary })
}
