//! Line and word level comparison engine

use crate::align::{capture_grouped_ops, capture_ops, matched_len};
use crate::change::{
    tokenize_words, AlignmentResult, EditKind, EditOp, LineChange, WordDiffEntry,
};
use similar::DiffOp;

/// Classify every line of two documents as identical, only in the first or
/// only in the second, following a minimal LCS alignment.
pub fn compare_lines<S: AsRef<str>>(lines1: &[S], lines2: &[S]) -> AlignmentResult {
    let old: Vec<&str> = lines1.iter().map(AsRef::as_ref).collect();
    let new: Vec<&str> = lines2.iter().map(AsRef::as_ref).collect();
    let mut result = AlignmentResult::default();

    for op in capture_ops(&old, &new) {
        match op {
            DiffOp::Equal { old_index, len, .. } => {
                for &line in &old[old_index..old_index + len] {
                    result.identical.push(line.to_string());
                    result.changes.push(LineChange::equal(line));
                }
            }
            DiffOp::Delete {
                old_index, old_len, ..
            } => {
                for &line in &old[old_index..old_index + old_len] {
                    result.only_in_first.push(line.to_string());
                    result.changes.push(LineChange::delete(line));
                }
            }
            DiffOp::Insert {
                new_index, new_len, ..
            } => {
                for &line in &new[new_index..new_index + new_len] {
                    result.only_in_second.push(line.to_string());
                    result.changes.push(LineChange::insert(line));
                }
            }
            DiffOp::Replace { .. } => unreachable!("ungrouped alignment produced a replace"),
        }
    }

    result.combined_different = result
        .only_in_first
        .iter()
        .chain(&result.only_in_second)
        .cloned()
        .collect();

    tracing::debug!(
        identical = result.identical.len(),
        only_in_first = result.only_in_first.len(),
        only_in_second = result.only_in_second.len(),
        "line alignment complete"
    );

    result
}

/// Compare position-paired lines word by word.
///
/// Only the first `min(len1, len2)` positions are paired; extra lines on the
/// longer side are ignored. Pairs with equal text are skipped.
pub fn compare_words_in_lines<S: AsRef<str>>(lines1: &[S], lines2: &[S]) -> Vec<WordDiffEntry> {
    lines1
        .iter()
        .zip(lines2)
        .enumerate()
        .filter_map(|(index, (l1, l2))| {
            let (line1, line2): (&str, &str) = (l1.as_ref(), l2.as_ref());
            if line1 == line2 {
                return None;
            }
            Some(WordDiffEntry {
                index,
                line1: line1.to_string(),
                line2: line2.to_string(),
                ops: word_edits(&tokenize_words(line1), &tokenize_words(line2)),
            })
        })
        .collect()
}

/// Non-equal edits turning `old` tokens into `new` tokens, left to right.
pub fn word_edits(old: &[&str], new: &[&str]) -> Vec<EditOp> {
    capture_grouped_ops(old, new)
        .into_iter()
        .filter_map(|op| match op {
            DiffOp::Equal { .. } => None,
            DiffOp::Delete {
                old_index,
                old_len,
                new_index,
            } => Some(EditOp::new(
                EditKind::Delete,
                old_index..old_index + old_len,
                new_index..new_index,
            )),
            DiffOp::Insert {
                old_index,
                new_index,
                new_len,
            } => Some(EditOp::new(
                EditKind::Insert,
                old_index..old_index,
                new_index..new_index + new_len,
            )),
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => Some(EditOp::new(
                EditKind::Replace,
                old_index..old_index + old_len,
                new_index..new_index + new_len,
            )),
        })
        .collect()
}

/// Similarity percentage of two line sequences, rounded to two decimals.
///
/// `2 * matches / (len1 + len2)` over the line alignment; two empty
/// documents are 100% similar.
pub fn calculate_similarity<S: AsRef<str>>(lines1: &[S], lines2: &[S]) -> f64 {
    let total = lines1.len() + lines2.len();
    if total == 0 {
        return 100.0;
    }

    let old: Vec<&str> = lines1.iter().map(AsRef::as_ref).collect();
    let new: Vec<&str> = lines2.iter().map(AsRef::as_ref).collect();
    let matches = matched_len(&capture_ops(&old, &new));

    let ratio = 2.0 * matches as f64 / total as f64;
    round2(ratio * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    /// Apply edits right to left so earlier spans stay valid.
    fn apply_edits(old: &[&str], new: &[&str], ops: &[EditOp]) -> Vec<String> {
        let mut out: Vec<String> = old.iter().map(|s| s.to_string()).collect();
        for op in ops.iter().rev() {
            let replacement: Vec<String> = op.new_slice(new).iter().map(|s| s.to_string()).collect();
            out.splice(op.old.clone(), replacement);
        }
        out
    }

    #[test]
    fn test_compare_lines_example() {
        let a = lines(&["the cat sat", "on the mat"]);
        let b = lines(&["the cat sat", "on a mat"]);

        let result = compare_lines(&a, &b);

        assert_eq!(result.identical, vec!["the cat sat"]);
        assert_eq!(result.only_in_first, vec!["on the mat"]);
        assert_eq!(result.only_in_second, vec!["on a mat"]);
        assert_eq!(result.combined_different, vec!["on the mat", "on a mat"]);
        assert_eq!(result.matches(), 1);
        assert_eq!(result.significant_changes().count(), 2);
        assert_eq!(calculate_similarity(&a, &b), 50.0);
    }

    #[test]
    fn test_compare_lines_self() {
        let a = lines(&["x", "y", "x", "", "y"]);

        let result = compare_lines(&a, &a);

        assert_eq!(result.identical, a);
        assert!(result.only_in_first.is_empty());
        assert!(result.only_in_second.is_empty());
        assert!(result.is_identical());
        assert_eq!(calculate_similarity(&a, &a), 100.0);
    }

    #[test]
    fn test_compare_lines_keeps_duplicates() {
        let a = lines(&["dup", "dup", "other"]);
        let b = lines(&["dup", "other"]);

        let result = compare_lines(&a, &b);

        assert_eq!(result.identical, vec!["dup", "other"]);
        assert_eq!(result.only_in_first, vec!["dup"]);
        assert!(result.only_in_second.is_empty());
    }

    #[test]
    fn test_every_line_classified_once() {
        let a = lines(&["a", "b", "c", "b", "d", "a", "b"]);
        let b = lines(&["b", "d", "c", "a", "b", "a"]);

        let result = compare_lines(&a, &b);

        assert_eq!(result.identical.len() + result.only_in_first.len(), a.len());
        assert_eq!(result.identical.len() + result.only_in_second.len(), b.len());
        assert_eq!(result.changes.len(), a.len() + b.len() - result.identical.len());
    }

    #[test]
    fn test_compare_lines_empty_sides() {
        let empty: Vec<String> = Vec::new();
        let a = lines(&["one", "two"]);

        let left = compare_lines(&a, &empty);
        assert!(left.identical.is_empty());
        assert_eq!(left.only_in_first, a);
        assert!(left.only_in_second.is_empty());

        let right = compare_lines(&empty, &a);
        assert_eq!(right.only_in_second, a);
        assert!(right.only_in_first.is_empty());

        let both = compare_lines(&empty, &empty);
        assert_eq!(both, AlignmentResult::default());
        assert_eq!(calculate_similarity(&empty, &empty), 100.0);
    }

    #[test]
    fn test_similarity_disjoint_and_symmetric() {
        let a = lines(&["alpha", "beta"]);
        let b = lines(&["gamma", "delta", "epsilon"]);
        assert_eq!(calculate_similarity(&a, &b), 0.0);

        let c = lines(&["a", "b", "c"]);
        let d = lines(&["c", "a", "x", "b", "y", "z"]);
        assert_eq!(calculate_similarity(&c, &d), calculate_similarity(&d, &c));
        // 2 * 2 / 9
        assert_eq!(calculate_similarity(&c, &d), 44.44);
    }

    #[test]
    fn test_compare_words_skips_equal_lines() {
        let a = lines(&["same", "on the mat", "tail"]);
        let b = lines(&["same", "on a mat"]);

        let diffs = compare_words_in_lines(&a, &b);

        assert_eq!(diffs.len(), 1);
        let entry = &diffs[0];
        assert_eq!(entry.index, 1);
        assert_eq!(entry.line_number(), 2);
        assert_eq!(entry.ops, vec![EditOp::new(EditKind::Replace, 1..2, 1..2)]);
    }

    #[test]
    fn test_word_edits_insert_and_delete() {
        let ops = word_edits(&["a", "b", "c"], &["a", "c", "d"]);
        assert_eq!(
            ops,
            vec![
                EditOp::new(EditKind::Delete, 1..2, 1..1),
                EditOp::new(EditKind::Insert, 3..3, 2..3),
            ]
        );
    }

    #[test]
    fn test_word_edits_reconstruct_second_line() {
        let pairs = [
            ("the quick brown fox", "the slow brown dog jumps"),
            ("a b c d e", "e d c b a"),
            ("", "brand new words"),
            ("all of this goes", ""),
            ("x y x y", "y x y x z"),
        ];

        for (l1, l2) in pairs {
            let old = tokenize_words(l1);
            let new = tokenize_words(l2);
            let ops = word_edits(&old, &new);
            assert_eq!(apply_edits(&old, &new, &ops), new, "{l1:?} -> {l2:?}");
        }
    }

    #[test]
    fn test_whitespace_only_difference_has_no_edits() {
        let diffs = compare_words_in_lines(&["a  b"], &["a b"]);
        assert_eq!(diffs.len(), 1);
        assert!(diffs[0].ops.is_empty());
    }
}
