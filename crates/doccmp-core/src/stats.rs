//! Vocabulary statistics over preprocessed documents

use std::collections::{BTreeMap, BTreeSet};

/// Words found only in `text1` and only in `text2`, sorted
pub fn unique_words(text1: &str, text2: &str) -> (BTreeSet<String>, BTreeSet<String>) {
    let words1: BTreeSet<&str> = text1.split_whitespace().collect();
    let words2: BTreeSet<&str> = text2.split_whitespace().collect();

    let only1 = words1.difference(&words2).map(|w| w.to_string()).collect();
    let only2 = words2.difference(&words1).map(|w| w.to_string()).collect();
    (only1, only2)
}

/// Occurrence count of every word in `text`
pub fn word_frequencies(text: &str) -> BTreeMap<String, usize> {
    let mut freqs = BTreeMap::new();
    for word in text.split_whitespace() {
        *freqs.entry(word.to_string()).or_insert(0) += 1;
    }
    freqs
}

/// Case-insensitive count of `keyword` as a whole token
pub fn keyword_frequency(text: &str, keyword: &str) -> usize {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return 0;
    }
    word_frequencies(&text.to_lowercase())
        .get(&keyword)
        .copied()
        .unwrap_or(0)
}

/// The `n` most frequent words, most frequent first; ties sort alphabetically
pub fn most_common(freqs: &BTreeMap<String, usize>, n: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = freqs.iter().map(|(w, &c)| (w.clone(), c)).collect();
    // BTreeMap iteration is already alphabetical, a stable sort keeps it for ties
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_words_sorted() {
        let (only1, only2) = unique_words("zeta alpha cat", "cat beta alpha beta");
        assert_eq!(only1.into_iter().collect::<Vec<_>>(), vec!["zeta"]);
        assert_eq!(only2.into_iter().collect::<Vec<_>>(), vec!["beta"]);
    }

    #[test]
    fn test_keyword_frequency_case_insensitive() {
        assert_eq!(keyword_frequency("Cat and cat\ncatalog CAT", "cat"), 3);
        assert_eq!(keyword_frequency("a cat", "CAT"), 1);
        assert_eq!(keyword_frequency("dog", "cat"), 0);
        assert_eq!(keyword_frequency("cat", "  "), 0);
    }

    #[test]
    fn test_most_common() {
        let freqs = word_frequencies("b a c a b a d");
        assert_eq!(
            most_common(&freqs, 3),
            vec![
                ("a".to_string(), 3),
                ("b".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }
}
