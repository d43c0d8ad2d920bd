use crate::evaluator::criteria::CriteriaSet;

/// Score the scripted-behavior rubric over the raw conversation text.
///
/// The full text is lowercased once, then every criterion is tested in
/// definition order: if any of its phrase variants occurs as a contiguous
/// substring the criterion scores exactly one point, no matter how many
/// variants match or how often. Phrases are matched against the raw text,
/// not the token stream, so multi-word variants must appear in order.
pub fn evaluate_performance(raw_text: &str, criteria: &CriteriaSet) -> u32 {
    let lowered = raw_text.to_lowercase();

    let mut score = 0;
    for criterion in criteria.criteria() {
        if criterion.variants.iter().any(|v| lowered.contains(v.as_str())) {
            score += 1;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::criteria::{Criterion, default_criteria};

    #[test]
    fn test_two_criteria_met_scores_two() {
        // The repeated greeting must not push the score past one point for
        // that criterion.
        let text = "Agente: Buenas noches, ¿me da su número de cuenta?\n\
                    Cliente: claro, es 4471. Buenas noches a usted.\n\
                    Agente: adiós.";

        assert_eq!(evaluate_performance(text, default_criteria()), 2);
    }

    #[test]
    fn test_repeated_variant_still_scores_one() {
        let text = "Buenas noches. Le repito: buenas noches y buenos días.";
        assert_eq!(evaluate_performance(text, default_criteria()), 1);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let text = "BUENAS NOCHES, señor.";
        assert_eq!(evaluate_performance(text, default_criteria()), 1);
    }

    #[test]
    fn test_phrase_must_be_contiguous() {
        // Both words appear but never as the scripted phrase.
        let text = "noches buenas, dijo el cliente";
        assert_eq!(evaluate_performance(text, default_criteria()), 0);
    }

    #[test]
    fn test_full_script_scores_all_criteria() {
        let text = "Agente: Buenos días, bienvenido a soporte. \
                    ¿Me proporciona su número de cuenta? \
                    Le informo que su servicio está activo. \
                    ¿Hay algo más en lo que pueda apoyarle? \
                    Gracias por su llamada.";

        let criteria = default_criteria();
        assert_eq!(evaluate_performance(text, criteria), criteria.len() as u32);
    }

    #[test]
    fn test_empty_criteria_set_scores_zero() {
        let criteria = CriteriaSet::new(vec![]);
        assert_eq!(evaluate_performance("buenas noches", &criteria), 0);
    }

    #[test]
    fn test_custom_criterion() {
        let criteria = CriteriaSet::new(vec![Criterion::new("farewell", &["hasta pronto"])]);
        assert_eq!(evaluate_performance("Hasta pronto y gracias", &criteria), 1);
        assert_eq!(evaluate_performance("hasta otro momento", &criteria), 0);
    }
}
