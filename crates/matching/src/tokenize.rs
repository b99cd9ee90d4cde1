//! Free-text normalization for the overlap signals.

/// Words too common to carry any matching signal.
const STOP_WORDS: &[&str] = &[
    "the", "is", "at", "which", "on", "a", "an", "and", "or", "but", "in", "with", "to", "for",
    "of", "as", "by",
];

/// Tokens shorter than this are discarded along with stop words.
const MIN_TOKEN_CHARS: usize = 4;

/// Split free text into comparable word tokens.
///
/// Lowercases the input, treats every non-word character as a separator,
/// drops stop words and tokens shorter than four characters. Empty input
/// yields an empty sequence.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}
