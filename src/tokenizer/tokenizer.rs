use once_cell::sync::Lazy;
use regex::Regex;

use crate::tokenizer::normalizer::normalize;

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());

/// One word occurrence: the case-folded surface text paired with its
/// canonical form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub canonical: String,
}

/// Split raw text into word tokens.
///
/// The whole text is lowercased first, then scanned for maximal runs of word
/// characters (letters, digits, underscore). Punctuation and whitespace are
/// discarded, order of occurrence is preserved and duplicates are kept.
pub fn tokenize(text: &str) -> Vec<Token> {
    let lowered = text.to_lowercase();

    WORD_PATTERN
        .find_iter(&lowered)
        .map(|word| Token {
            surface: word.as_str().to_string(),
            canonical: normalize(word.as_str()),
        })
        .collect()
}
