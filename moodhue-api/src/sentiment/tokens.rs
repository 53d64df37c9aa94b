//! Word splitting for the pattern analyzer

/// Lowercased words with surrounding punctuation stripped
///
/// Inner apostrophes survive so "don't" stays one token.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\''))
        .map(|word| word.trim_matches('\''))
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Negation words, including contracted forms
pub(crate) fn is_negation(word: &str) -> bool {
    matches!(
        word,
        "not" | "no" | "never" | "neither" | "nor" | "none" | "nobody" | "nothing"
            | "nowhere" | "without" | "cannot"
    ) || word.ends_with("n't")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(
            tokenize("Hello, world!  I don't know..."),
            vec!["hello", "world", "i", "don't", "know"]
        );
    }

    #[test]
    fn test_negation_forms() {
        assert!(is_negation("not"));
        assert!(is_negation("isn't"));
        assert!(is_negation("won't"));
        assert!(!is_negation("note"));
    }
}
