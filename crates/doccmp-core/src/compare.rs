//! One comparison run over two raw documents

use crate::change::{AlignmentResult, WordDiffEntry};
use crate::diff::{calculate_similarity, compare_lines, compare_words_in_lines};
use crate::normalize::{count_words, preprocess_text, PreprocessOptions};
use crate::stats::{keyword_frequency, unique_words};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Options for a comparison run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareOptions {
    pub preprocess: PreprocessOptions,
    /// Word to count in both documents
    pub keyword: Option<String>,
}

impl CompareOptions {
    pub fn new(preprocess: PreprocessOptions) -> Self {
        Self {
            preprocess,
            keyword: None,
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }
}

/// Occurrences of the searched keyword in each document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHits {
    pub keyword: String,
    pub first: usize,
    pub second: usize,
}

/// Everything the report needs about two documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub text1: String,
    pub text2: String,
    pub lines1: Vec<String>,
    pub lines2: Vec<String>,
    pub alignment: AlignmentResult,
    pub word_diffs: Vec<WordDiffEntry>,
    /// Percentage in `[0, 100]`, two decimals
    pub similarity: f64,
    pub word_count1: usize,
    pub word_count2: usize,
    pub unique1: BTreeSet<String>,
    pub unique2: BTreeSet<String>,
    pub keyword: Option<KeywordHits>,
}

impl Comparison {
    /// Preprocess both documents and run every comparison over them.
    pub fn new(raw1: &str, raw2: &str, options: &CompareOptions) -> Self {
        let text1 = preprocess_text(raw1, &options.preprocess);
        let text2 = preprocess_text(raw2, &options.preprocess);

        let lines1: Vec<String> = text1.lines().map(str::to_string).collect();
        let lines2: Vec<String> = text2.lines().map(str::to_string).collect();

        let alignment = compare_lines(&lines1, &lines2);
        let word_diffs = compare_words_in_lines(&lines1, &lines2);
        let similarity = calculate_similarity(&lines1, &lines2);

        let (unique1, unique2) = unique_words(&text1, &text2);
        let keyword = options.keyword.as_ref().map(|keyword| KeywordHits {
            keyword: keyword.clone(),
            first: keyword_frequency(&text1, keyword),
            second: keyword_frequency(&text2, keyword),
        });

        tracing::info!(
            lines1 = lines1.len(),
            lines2 = lines2.len(),
            word_diffs = word_diffs.len(),
            similarity,
            "comparison complete"
        );

        Self {
            word_count1: count_words(&lines1),
            word_count2: count_words(&lines2),
            text1,
            text2,
            lines1,
            lines2,
            alignment,
            word_diffs,
            similarity,
            unique1,
            unique2,
            keyword,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::Mode;

    #[test]
    fn test_lenient_comparison() {
        let raw1 = "The cat sat.\nOn the mat!";
        let raw2 = "the CAT sat\non a mat";

        let cmp = Comparison::new(raw1, raw2, &CompareOptions::default().with_keyword("cat"));

        assert_eq!(cmp.lines1, vec!["the cat sat", "on the mat"]);
        assert_eq!(cmp.alignment.identical, vec!["the cat sat"]);
        assert_eq!(cmp.similarity, 50.0);
        assert_eq!(cmp.word_count1, 6);
        assert_eq!(cmp.word_count2, 6);
        assert!(cmp.unique1.is_empty());
        assert_eq!(cmp.unique2.iter().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(
            cmp.keyword,
            Some(KeywordHits {
                keyword: "cat".to_string(),
                first: 1,
                second: 1
            })
        );
    }

    #[test]
    fn test_strict_comparison_keeps_case() {
        let options = CompareOptions::new(PreprocessOptions::new(Mode::Strict));

        let cmp = Comparison::new(" Foo \nbar", "foo\nbar", &options);

        assert_eq!(cmp.lines1, vec!["Foo", "bar"]);
        assert_eq!(cmp.alignment.only_in_first, vec!["Foo"]);
        assert_eq!(cmp.alignment.only_in_second, vec!["foo"]);
        assert_eq!(cmp.word_diffs.len(), 1);
        assert!(cmp.keyword.is_none());
    }

    #[test]
    fn test_empty_documents() {
        let cmp = Comparison::new("", "", &CompareOptions::default());

        assert!(cmp.lines1.is_empty());
        assert_eq!(cmp.similarity, 100.0);
        assert!(cmp.word_diffs.is_empty());
    }
}
