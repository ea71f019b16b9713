//! Doccmp Core - document comparison engine
//!
//! This library aligns two documents line by line and word by word,
//! scores their similarity and renders the result as a report.

pub mod align;
pub mod change;
pub mod compare;
pub mod diff;
pub mod loader;
pub mod normalize;
pub mod report;
pub mod stats;

pub use change::{AlignmentResult, EditKind, EditOp, LineChange, LineTag, WordDiffEntry};
pub use compare::{CompareOptions, Comparison, KeywordHits};
pub use diff::{calculate_similarity, compare_lines, compare_words_in_lines};
pub use loader::{load_text, DocumentReadError};
pub use normalize::{
    normalize, preprocess_lines, preprocess_text, Mode, NormalizeError, NormalizeOptions,
    PreprocessOptions,
};
pub use report::{build_report, export_report, render, ReportFormat, ReportWriteError};
