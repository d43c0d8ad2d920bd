use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::classifier::classifier::WordClassifier;
use crate::evaluator::criteria::CriteriaSet;
use crate::evaluator::performance::evaluate_performance;
use crate::evaluator::sentiment::evaluate_experience;
use crate::tokenizer::tokenizer::{Token, tokenize};

/// Result record for one evaluated transcript. Counts are word occurrences
/// except `undefined_words`, which counts distinct canonical forms with no
/// classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub undefined_words: u32,
    pub positive_words: u32,
    pub negative_words: u32,
    pub neutral_words: u32,
    pub experience_score: i32,
    pub performance_score: u32,
}

/// Collect the tokens whose canonical form is absent from every category
/// list. One token is reported per distinct canonical form, the first
/// occurrence in text order.
pub fn undefined_words(tokens: &[Token], classifier: &WordClassifier) -> Vec<Token> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut undefined = Vec::new();

    for token in tokens {
        if classifier.is_undefined(&token.canonical) && seen.insert(token.canonical.as_str()) {
            undefined.push(token.clone());
        }
    }

    undefined
}

/// Evaluate one transcript: tokenize, count sentiment hits, count undefined
/// forms and score the scripted-behavior rubric.
pub fn evaluate(
    text: &str,
    classifier: &WordClassifier,
    criteria: &CriteriaSet,
) -> EvaluationResult {
    let tokens = tokenize(text);
    let counts = evaluate_experience(&tokens, classifier);
    let undefined = undefined_words(&tokens, classifier);

    EvaluationResult {
        undefined_words: undefined.len() as u32,
        positive_words: counts.positive,
        negative_words: counts.negative,
        neutral_words: counts.neutral,
        experience_score: counts.score,
        performance_score: evaluate_performance(text, criteria),
    }
}
