/// Canonical form assigned to every all-numeric token.
pub const NEUTRAL_NUMBER: &str = "neutral_number";

/// Fold a surface word into its canonical form.
///
/// Steps run in a fixed order: lowercase, all-numeric sentinel, strip one
/// plural 's', fold a trailing 'a' to 'o'. Every input maps to some output,
/// the empty string included.
pub fn normalize(word: &str) -> String {
    let mut updated = word.to_lowercase();

    if !updated.is_empty() && updated.chars().all(|c| c.is_numeric()) {
        return NEUTRAL_NUMBER.to_string();
    }

    if updated.ends_with('s') {
        updated.pop();
    }

    // The fold only looks at the final character, so a word that just lost
    // its plural 's' can still be folded ("mesas" -> "mesa" -> "meso").
    if updated.ends_with('a') {
        updated.pop();
        updated.push('o');
    }

    updated
}
