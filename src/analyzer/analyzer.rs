use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::classifier::classifier::{AddWordError as ClassifyError, Category, WordClassifier};
use crate::classifier::store::{LoadError, PersistError, WordStore};
use crate::evaluator::criteria::CriteriaSet;
use crate::evaluator::evaluator::{self, EvaluationResult};
use crate::tokenizer::normalizer::normalize;
use crate::tokenizer::tokenizer::{Token, tokenize};

#[derive(Debug, Error)]
pub enum AddWordError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    /// The word was classified in memory but the store rewrite failed. The
    /// analyzer stays usable; a later add or an explicit save may retry.
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Owns the classifier, the criteria set and the path of the backing store.
///
/// Every evaluation goes through an explicit instance of this type; there is
/// no shared ambient classifier. Mutations apply to the owned classifier and
/// rewrite the backing store in place, so embedders running concurrently must
/// serialize calls to [`add_word`].
///
/// [`add_word`]: TranscriptAnalyzer::add_word
pub struct TranscriptAnalyzer {
    classifier: WordClassifier,
    criteria: CriteriaSet,
    store_path: PathBuf,
}

impl TranscriptAnalyzer {
    /// Load the word store at `store_path` and build an analyzer with the
    /// default criteria. A failed load fails construction; there is no
    /// partially initialized analyzer.
    pub fn new<P: AsRef<Path>>(store_path: P) -> Result<Self, LoadError> {
        let store = WordStore::load(&store_path)?;
        Ok(Self {
            classifier: WordClassifier::from_store(store),
            criteria: CriteriaSet::default(),
            store_path: store_path.as_ref().to_path_buf(),
        })
    }

    pub fn with_criteria(mut self, criteria: CriteriaSet) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn classifier(&self) -> &WordClassifier {
        &self.classifier
    }

    pub fn criteria(&self) -> &CriteriaSet {
        &self.criteria
    }

    pub fn evaluate(&self, text: &str) -> EvaluationResult {
        evaluator::evaluate(text, &self.classifier, &self.criteria)
    }

    pub fn undefined_words(&self, text: &str) -> Vec<Token> {
        let tokens = tokenize(text);
        evaluator::undefined_words(&tokens, &self.classifier)
    }

    /// Classify a word and persist the updated store.
    ///
    /// The word is normalized first, so surface forms and canonical forms are
    /// both accepted. On a persist failure the in-memory classification is
    /// kept and the error is surfaced to the caller.
    pub fn add_word(&mut self, word: &str, category: Category) -> Result<(), AddWordError> {
        let canonical = normalize(word);
        self.classifier.add_word(&canonical, category)?;
        self.classifier.to_store().save(&self.store_path)?;
        Ok(())
    }

    /// Discard in-memory state and re-read the backing store.
    pub fn reload(&mut self) -> Result<(), LoadError> {
        let store = WordStore::load(&self.store_path)?;
        self.classifier = WordClassifier::from_store(store);
        Ok(())
    }
}
