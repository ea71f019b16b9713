//! Text normalization ahead of comparison

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// Characters always stripped when punctuation removal is on
static FIXED_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[.,;:!?"()\[\]{}<>\-]"#).expect("valid punctuation class"));

/// Unicode punctuation and symbol classes
static UNICODE_PUNCTUATION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[\p{P}\p{S}]").ok());

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace class"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Invalid preprocessing mode '{0}': use 'strict' or 'lenient'")]
    InvalidConfiguration(String),
}

/// Normalization intensity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Trim each line, keep case and punctuation
    Strict,
    /// Fold case, strip punctuation, collapse whitespace
    #[default]
    Lenient,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Strict => "strict",
            Mode::Lenient => "lenient",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = NormalizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Mode::Strict),
            "lenient" | "souple" => Ok(Mode::Lenient),
            other => Err(NormalizeError::InvalidConfiguration(other.to_string())),
        }
    }
}

/// Switches for [`normalize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub to_lower: bool,
    pub remove_punctuation: bool,
    pub normalize_spaces: bool,
    /// Also strip the Unicode punctuation and symbol classes
    pub unicode_punctuation: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            to_lower: true,
            remove_punctuation: true,
            normalize_spaces: true,
            unicode_punctuation: true,
        }
    }
}

impl NormalizeOptions {
    /// Options that leave the text untouched apart from trimming
    pub fn none() -> Self {
        Self {
            to_lower: false,
            remove_punctuation: false,
            normalize_spaces: false,
            unicode_punctuation: false,
        }
    }

    pub fn with_unicode_punctuation(mut self, enabled: bool) -> Self {
        self.unicode_punctuation = enabled;
        self
    }
}

/// Options for a whole-document pass, see [`preprocess_text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreprocessOptions {
    pub mode: Mode,
    /// Lowercase every line regardless of mode
    pub ignore_case: bool,
    /// Strip punctuation and collapse spaces regardless of mode
    pub clean: bool,
    pub unicode_punctuation: bool,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            ignore_case: false,
            clean: false,
            unicode_punctuation: true,
        }
    }
}

impl PreprocessOptions {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_ignore_case(mut self, enabled: bool) -> Self {
        self.ignore_case = enabled;
        self
    }

    pub fn with_clean(mut self, enabled: bool) -> Self {
        self.clean = enabled;
        self
    }

    pub fn with_unicode_punctuation(mut self, enabled: bool) -> Self {
        self.unicode_punctuation = enabled;
        self
    }
}

/// Clean `text` according to `options`, then trim it.
pub fn normalize(text: &str, options: &NormalizeOptions) -> String {
    let mut text = if options.to_lower {
        text.to_lowercase()
    } else {
        text.to_string()
    };

    if options.remove_punctuation {
        if options.unicode_punctuation {
            match UNICODE_PUNCTUATION.as_ref() {
                Some(re) => text = re.replace_all(&text, "").into_owned(),
                None => tracing::debug!("unicode punctuation class unavailable, using fixed set"),
            }
        }
        text = FIXED_PUNCTUATION.replace_all(&text, "").into_owned();
    }

    if options.normalize_spaces {
        text = WHITESPACE_RUN.replace_all(&text, " ").into_owned();
    }

    text.trim().to_string()
}

/// Preprocess each line for `mode`.
pub fn preprocess_lines<S: AsRef<str>>(lines: &[S], mode: Mode) -> Vec<String> {
    mode_pass(lines, mode, &NormalizeOptions::default())
}

fn mode_pass<S: AsRef<str>>(lines: &[S], mode: Mode, options: &NormalizeOptions) -> Vec<String> {
    lines
        .iter()
        .map(|line| match mode {
            Mode::Strict => line.as_ref().trim().to_string(),
            Mode::Lenient => normalize(line.as_ref(), options),
        })
        .collect()
}

/// Preprocess a whole document line by line and join it back with `\n`.
///
/// The mode pass runs first. `ignore_case` and `clean` are then applied on
/// top, so they also take effect in strict mode.
pub fn preprocess_text(text: &str, options: &PreprocessOptions) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let mode_options =
        NormalizeOptions::default().with_unicode_punctuation(options.unicode_punctuation);
    let mut processed = mode_pass(&lines, options.mode, &mode_options);

    if options.ignore_case || options.clean {
        let extra = NormalizeOptions {
            to_lower: options.ignore_case,
            remove_punctuation: options.clean,
            normalize_spaces: options.clean,
            unicode_punctuation: options.unicode_punctuation,
        };
        for line in &mut processed {
            *line = normalize(line, &extra);
        }
    }

    tracing::debug!(
        mode = %options.mode,
        ignore_case = options.ignore_case,
        clean = options.clean,
        lines = processed.len(),
        "preprocessed document"
    );

    processed.join("\n")
}

/// Total number of whitespace-delimited words over all lines
pub fn count_words<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|line| line.as_ref().split_whitespace().count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("strict".parse::<Mode>(), Ok(Mode::Strict));
        assert_eq!("lenient".parse::<Mode>(), Ok(Mode::Lenient));
        assert_eq!("souple".parse::<Mode>(), Ok(Mode::Lenient));
        assert_eq!(
            "loose".parse::<Mode>(),
            Err(NormalizeError::InvalidConfiguration("loose".to_string()))
        );
    }

    #[test]
    fn test_strict_only_trims() {
        let lines = preprocess_lines(&[" Foo ", "bar"], Mode::Strict);
        assert_eq!(lines, vec!["Foo", "bar"]);
    }

    #[test]
    fn test_lenient_folds_everything() {
        let lines = preprocess_lines(&["  Hello,   World! (test) -- ok  "], Mode::Lenient);
        assert_eq!(lines, vec!["hello world test ok"]);
    }

    #[test]
    fn test_fixed_set_without_unicode() {
        let options = NormalizeOptions::default().with_unicode_punctuation(false);
        // '@' and '#' are outside the fixed set
        assert_eq!(normalize("a.b@c#d<e>", &options), "ab@c#de");
        assert_eq!(normalize("[x]{y}\"z\";:", &options), "xyz");
    }

    #[test]
    fn test_unicode_symbols_removed() {
        let options = NormalizeOptions::default();
        assert_eq!(normalize("«café» — 5€ ¿sí?", &options), "café 5 sí");
    }

    #[test]
    fn test_normalize_idempotent() {
        let options = NormalizeOptions::default();
        for text in ["  The  Cat, sat!\ton\u{a0}the mat. ", "«A» - b", "", "...", "MiXeD Case"] {
            let once = normalize(text, &options);
            assert_eq!(normalize(&once, &options), once, "{text:?}");
        }
    }

    #[test]
    fn test_normalize_none_only_trims() {
        assert_eq!(normalize("  A,  b ", &NormalizeOptions::none()), "A,  b");
    }

    #[test]
    fn test_preprocess_text_strict_with_flags() {
        let text = " Foo, Bar \n  Baz  Qux!";
        let strict = PreprocessOptions::new(Mode::Strict);

        assert_eq!(preprocess_text(text, &strict), "Foo, Bar\nBaz  Qux!");
        assert_eq!(
            preprocess_text(text, &strict.with_ignore_case(true)),
            "foo, bar\nbaz  qux!"
        );
        assert_eq!(
            preprocess_text(text, &strict.with_clean(true)),
            "Foo Bar\nBaz Qux"
        );
    }

    #[test]
    fn test_preprocess_text_keeps_blank_lines() {
        let text = "One.\n\nTwo!\r\n";
        let out = preprocess_text(text, &PreprocessOptions::default());
        assert_eq!(out, "one\n\ntwo");
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(&["a b  c", "", "d"]), 4);
    }
}
