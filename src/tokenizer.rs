//! Tokenization and normalization of transcript text
//!
//! Successive transcriptions of the same audio window drift in punctuation
//! ("hello there" vs "hello, there."), so matching runs on token sequences
//! with a fixed set of separator characters stripped out. Tokens keep their
//! original casing and characters; only separators are discarded.

use serde::{Deserialize, Serialize};

/// Characters treated as token separators.
///
/// The default set is space, comma, period, semicolon and hyphen. The set is
/// configurable because transcription sources differ in which punctuation
/// they emit between passes, but the default must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SeparatorSet {
    chars: Vec<char>,
}

pub const DEFAULT_SEPARATORS: [char; 5] = [' ', ',', '.', ';', '-'];

impl SeparatorSet {
    /// Build a separator set from any collection of characters.
    /// Duplicates are dropped; order is irrelevant.
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut set = Vec::new();
        for ch in chars {
            if !set.contains(&ch) {
                set.push(ch);
            }
        }
        Self { chars: set }
    }

    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// The set as a plain string, for config files and display.
    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS)
    }
}

impl From<String> for SeparatorSet {
    fn from(s: String) -> Self {
        Self::new(s.chars())
    }
}

impl From<SeparatorSet> for String {
    fn from(set: SeparatorSet) -> Self {
        set.as_string()
    }
}

/// Split `text` into maximal runs of non-separator characters.
///
/// Single left-to-right scan; tokens borrow from `text`, so nothing is
/// allocated per token. Empty input yields an empty vector, and the output
/// never contains empty tokens.
pub fn tokenize<'a>(text: &'a str, separators: &SeparatorSet) -> Vec<&'a str> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut tokens = Vec::with_capacity(text.len() / 5 + 1);
    let mut start = None;

    for (i, ch) in text.char_indices() {
        if separators.contains(ch) {
            if let Some(s) = start.take() {
                tokens.push(&text[s..i]);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(&text[s..]);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_tokens(text: &str) -> Vec<&str> {
        tokenize(text, &SeparatorSet::default())
    }

    #[test]
    fn test_empty_input() {
        assert!(default_tokens("").is_empty());
    }

    #[test]
    fn test_separators_only() {
        assert!(default_tokens(" ,.;- -- ..").is_empty());
    }

    #[test]
    fn test_basic_split() {
        assert_eq!(default_tokens("hello world"), vec!["hello", "world"]);
    }

    #[test]
    fn test_punctuation_stripped() {
        assert_eq!(
            default_tokens("I said, hello there."),
            vec!["I", "said", "hello", "there"]
        );
    }

    #[test]
    fn test_casing_preserved() {
        assert_eq!(default_tokens("Hello WORLD"), vec!["Hello", "WORLD"]);
    }

    #[test]
    fn test_hyphen_splits() {
        assert_eq!(default_tokens("real-time"), vec!["real", "time"]);
    }

    #[test]
    fn test_unstripped_punctuation_stays() {
        // '!' and '?' are not in the default set and remain part of tokens
        assert_eq!(default_tokens("hello there!"), vec!["hello", "there!"]);
    }

    #[test]
    fn test_duplicates_kept_in_order() {
        assert_eq!(default_tokens("a b a b"), vec!["a", "b", "a", "b"]);
    }

    #[test]
    fn test_multibyte_tokens() {
        assert_eq!(
            default_tokens("über die Brücke"),
            vec!["über", "die", "Brücke"]
        );
    }

    #[test]
    fn test_custom_separator_set() {
        let set = SeparatorSet::new([' ', ':', '!']);
        assert_eq!(
            tokenize("note: hello there!", &set),
            vec!["note", "hello", "there"]
        );
    }

    #[test]
    fn test_separator_set_string_round_trip() {
        let set = SeparatorSet::default();
        assert_eq!(SeparatorSet::from(set.as_string()), set);
    }
}
