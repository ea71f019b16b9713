//! Report rendering and export

use crate::change::{AlignmentResult, LineChange, WordDiffEntry};
use crate::compare::{Comparison, KeywordHits};
use crate::stats::{most_common, word_frequencies};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Number of most frequent words listed per document in JSON reports
const TOP_WORDS: usize = 10;

#[derive(Error, Debug)]
pub enum ReportWriteError {
    #[error("Failed to write report to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output format of the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format '{other}': use 'text' or 'json'")),
        }
    }
}

/// Line counts of the alignment
pub fn format_line_summary(alignment: &AlignmentResult) -> String {
    [
        format!("Identical lines: {}", alignment.identical.len()),
        format!("Lines only in file 1: {}", alignment.only_in_first.len()),
        format!("Lines only in file 2: {}", alignment.only_in_second.len()),
        format!("Total differing lines: {}", alignment.combined_different.len()),
    ]
    .join("\n")
}

/// The raw line diff, one marked line per alignment step
pub fn format_diff_output(changes: &[LineChange]) -> String {
    changes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_word_differences(word_diffs: &[WordDiffEntry]) -> String {
    let mut lines = Vec::new();
    for entry in word_diffs {
        let old_tokens = entry.old_tokens();
        let new_tokens = entry.new_tokens();

        lines.push(format!("Line {}:", entry.line_number()));
        lines.push(format!("  - File 1: {}", entry.line1));
        lines.push(format!("  - File 2: {}", entry.line2));
        for op in &entry.ops {
            lines.push(format!(
                "    * {} : {} -> {}",
                op.kind.as_str().to_uppercase(),
                op.old_slice(&old_tokens).join(" "),
                op.new_slice(&new_tokens).join(" ")
            ));
        }
    }
    lines.join("\n")
}

pub fn format_similarity_report(
    similarity: f64,
    word_count1: usize,
    word_count2: usize,
    unique1: &BTreeSet<String>,
    unique2: &BTreeSet<String>,
) -> String {
    [
        format!("Similarity: {} %", format_percentage(similarity)),
        format!("Total words in file 1: {word_count1}"),
        format!("Total words in file 2: {word_count2}"),
        format!(
            "Words only in file 1 ({}): {}",
            unique1.len(),
            join_sorted(unique1)
        ),
        format!(
            "Words only in file 2 ({}): {}",
            unique2.len(),
            join_sorted(unique2)
        ),
    ]
    .join("\n")
}

pub fn format_keyword_search(hits: &KeywordHits) -> String {
    format!(
        "Keyword '{}' found {} times in file 1, {} times in file 2.",
        hits.keyword, hits.first, hits.second
    )
}

/// Render a percentage with at least one decimal, e.g. `50.0` or `33.33`
pub fn format_percentage(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn join_sorted(words: &BTreeSet<String>) -> String {
    words
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The full plain text report, sections in fixed order
pub fn build_report(cmp: &Comparison) -> String {
    let mut sections = vec![
        format_line_summary(&cmp.alignment),
        "\nLine differences:".to_string(),
        format_diff_output(&cmp.alignment.changes),
        "\nWord-level differences:".to_string(),
        format_word_differences(&cmp.word_diffs),
        "\nSimilarity summary:".to_string(),
        format_similarity_report(
            cmp.similarity,
            cmp.word_count1,
            cmp.word_count2,
            &cmp.unique1,
            &cmp.unique2,
        ),
    ];

    if let Some(hits) = &cmp.keyword {
        sections.push("\nKeyword search:".to_string());
        sections.push(format_keyword_search(hits));
    }

    sections.join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    similarity: f64,
    identical_lines: usize,
    lines_only_in_first: usize,
    lines_only_in_second: usize,
    alignment: &'a AlignmentResult,
    word_diffs: &'a [WordDiffEntry],
    word_count1: usize,
    word_count2: usize,
    unique1: &'a BTreeSet<String>,
    unique2: &'a BTreeSet<String>,
    top_words1: Vec<(String, usize)>,
    top_words2: Vec<(String, usize)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keyword: Option<&'a KeywordHits>,
}

/// Render the report in the requested format
pub fn render(cmp: &Comparison, format: ReportFormat) -> Result<String, ReportWriteError> {
    match format {
        ReportFormat::Text => Ok(build_report(cmp)),
        ReportFormat::Json => {
            let report = JsonReport {
                similarity: cmp.similarity,
                identical_lines: cmp.alignment.identical.len(),
                lines_only_in_first: cmp.alignment.only_in_first.len(),
                lines_only_in_second: cmp.alignment.only_in_second.len(),
                alignment: &cmp.alignment,
                word_diffs: &cmp.word_diffs,
                word_count1: cmp.word_count1,
                word_count2: cmp.word_count2,
                unique1: &cmp.unique1,
                unique2: &cmp.unique2,
                top_words1: most_common(&word_frequencies(&cmp.text1), TOP_WORDS),
                top_words2: most_common(&word_frequencies(&cmp.text2), TOP_WORDS),
                keyword: cmp.keyword.as_ref(),
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

/// Write `report` to `path` as UTF-8, replacing any existing file.
pub fn export_report(path: impl AsRef<Path>, report: &str) -> Result<(), ReportWriteError> {
    let path = path.as_ref();
    let io_err = |source| ReportWriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(report.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)?;

    tracing::info!(path = %path.display(), bytes = report.len(), "report written");
    Ok(())
}
