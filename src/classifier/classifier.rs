use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::classifier::store::WordStore;

/// The three classification categories a canonical word can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Positive,
    Negative,
    Neutral,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Positive => "positive",
            Category::Negative => "negative",
            Category::Neutral => "neutral",
        }
    }

    pub fn parse(name: &str) -> Option<Category> {
        match name {
            "positive" => Some(Category::Positive),
            "negative" => Some(Category::Negative),
            "neutral" => Some(Category::Neutral),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddWordError {
    #[error("word '{word}' is already classified as {}", .category.as_str())]
    AlreadyClassified { word: String, category: Category },
}

// Store order has to survive a load/save round trip, so each category keeps
// its words in an ordered vec and maintains a hash index for lookups.
#[derive(Debug, Clone, Default)]
struct WordList {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl WordList {
    fn from_words(words: Vec<String>) -> Self {
        let index = words.iter().cloned().collect();
        Self { words, index }
    }

    fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    fn push(&mut self, word: String) {
        if self.index.insert(word.clone()) {
            self.words.push(word);
        }
    }
}

/// In-memory view of the three category word lists.
///
/// Lists hold canonical forms. A loaded store may place a word in more than
/// one category; such overlap is preserved and every lookup treats the
/// categories independently. New classifications added through [`add_word`]
/// are kept exclusive.
///
/// [`add_word`]: WordClassifier::add_word
#[derive(Debug, Clone, Default)]
pub struct WordClassifier {
    positive: WordList,
    negative: WordList,
    neutral: WordList,
}

impl WordClassifier {
    pub fn from_store(store: WordStore) -> Self {
        Self {
            positive: WordList::from_words(store.positive),
            negative: WordList::from_words(store.negative),
            neutral: WordList::from_words(store.neutral),
        }
    }

    pub fn to_store(&self) -> WordStore {
        WordStore {
            positive: self.positive.words.clone(),
            negative: self.negative.words.clone(),
            neutral: self.neutral.words.clone(),
        }
    }

    fn list(&self, category: Category) -> &WordList {
        match category {
            Category::Positive => &self.positive,
            Category::Negative => &self.negative,
            Category::Neutral => &self.neutral,
        }
    }

    fn list_mut(&mut self, category: Category) -> &mut WordList {
        match category {
            Category::Positive => &mut self.positive,
            Category::Negative => &mut self.negative,
            Category::Neutral => &mut self.neutral,
        }
    }

    pub fn contains(&self, category: Category, canonical: &str) -> bool {
        self.list(category).contains(canonical)
    }

    /// True iff the canonical form is absent from all three lists.
    pub fn is_undefined(&self, canonical: &str) -> bool {
        !self.positive.contains(canonical)
            && !self.negative.contains(canonical)
            && !self.neutral.contains(canonical)
    }

    /// First category containing the word, resolved in positive, negative,
    /// neutral order. Scoring does not use this; it exists for callers that
    /// need a single answer for an overlapping store.
    pub fn category_of(&self, canonical: &str) -> Option<Category> {
        [Category::Positive, Category::Negative, Category::Neutral]
            .into_iter()
            .find(|&category| self.list(category).contains(canonical))
    }

    /// Append a canonical form to the chosen category list.
    ///
    /// Words that already carry a classification anywhere are rejected, so a
    /// word added through this path ends up in exactly one category. The
    /// mutation is in-memory only; persisting is the caller's concern.
    pub fn add_word(&mut self, canonical: &str, category: Category) -> Result<(), AddWordError> {
        if let Some(existing) = self.category_of(canonical) {
            return Err(AddWordError::AlreadyClassified {
                word: canonical.to_string(),
                category: existing,
            });
        }

        self.list_mut(category).push(canonical.to_string());
        Ok(())
    }

    pub fn words(&self, category: Category) -> &[String] {
        &self.list(category).words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_classifier() -> WordClassifier {
        WordClassifier::from_store(WordStore {
            positive: vec!["bueno".to_string(), "excelente".to_string()],
            negative: vec!["malo".to_string()],
            neutral: vec!["neutral_number".to_string(), "cuento".to_string()],
        })
    }

    #[test]
    fn test_contains_per_category() {
        let classifier = test_classifier();
        assert!(classifier.contains(Category::Positive, "bueno"));
        assert!(!classifier.contains(Category::Negative, "bueno"));
        assert!(classifier.contains(Category::Neutral, "neutral_number"));
    }

    #[test]
    fn test_is_undefined() {
        let classifier = test_classifier();
        assert!(classifier.is_undefined("desconocido"));
        assert!(!classifier.is_undefined("malo"));
    }

    #[test]
    fn test_category_of_resolution_order() {
        let mut classifier = test_classifier();
        // Force an overlap the way a hand-edited store could.
        classifier.neutral.push("bueno".to_string());

        assert_eq!(classifier.category_of("bueno"), Some(Category::Positive));
        assert_eq!(classifier.category_of("cuento"), Some(Category::Neutral));
        assert_eq!(classifier.category_of("desconocido"), None);
    }

    #[test]
    fn test_add_word_appends_to_chosen_list() {
        let mut classifier = test_classifier();
        classifier.add_word("amable", Category::Positive).unwrap();

        assert!(classifier.contains(Category::Positive, "amable"));
        assert!(!classifier.contains(Category::Negative, "amable"));
        assert!(!classifier.contains(Category::Neutral, "amable"));
        assert_eq!(
            classifier.words(Category::Positive).last().unwrap(),
            "amable"
        );
    }

    #[test]
    fn test_add_word_rejects_existing_classification() {
        let mut classifier = test_classifier();
        let err = classifier.add_word("malo", Category::Positive).unwrap_err();

        match err {
            AddWordError::AlreadyClassified { word, category } => {
                assert_eq!(word, "malo");
                assert_eq!(category, Category::Negative);
            }
        }
        assert!(!classifier.contains(Category::Positive, "malo"));
    }

    #[test]
    fn test_store_round_trip_preserves_order() {
        let classifier = test_classifier();
        let store = classifier.to_store();

        assert_eq!(store.positive, vec!["bueno", "excelente"]);
        assert_eq!(store.negative, vec!["malo"]);
        assert_eq!(store.neutral, vec!["neutral_number", "cuento"]);
    }

    #[test]
    fn test_category_parse_and_as_str() {
        assert_eq!(Category::parse("positive"), Some(Category::Positive));
        assert_eq!(Category::parse("negative"), Some(Category::Negative));
        assert_eq!(Category::parse("neutral"), Some(Category::Neutral));
        assert_eq!(Category::parse("other"), None);
        assert_eq!(Category::Negative.as_str(), "negative");
    }
}
