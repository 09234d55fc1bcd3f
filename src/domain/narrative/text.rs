//! Transcript normalization and whole-word matching.
//!
//! A word is a maximal run of alphanumeric characters (any script) plus
//! combining diacritical marks, so `responsável`, `coração` and decomposed
//! `responsa\u{301}vel` stay single words. Everything else separates words.
//!
//! Transcripts and lexicon entries are both folded to NFC before lowercasing,
//! so composed and decomposed accents compare equal.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block (U+0300..=U+036F).
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || is_combining_mark(c)
}

/// Canonical composition followed by lowercasing.
pub(crate) fn fold(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// Splits already-folded text into words.
pub(crate) fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
}

/// Folds and tokenizes a trigger phrase the same way transcripts are.
pub(crate) fn phrase_words(phrase: &str) -> Vec<String> {
    let lowered = fold(phrase);
    split_words(&lowered).map(str::to_string).collect()
}

/// A transcript prepared for matching. The original text is never stored.
#[derive(Debug, Clone)]
pub(crate) struct NormalizedText {
    lowered: String,
    words: Vec<String>,
}

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        let lowered = fold(raw);
        let words = split_words(&lowered).map(str::to_string).collect();
        Self { lowered, words }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Counts every window equal to the phrase, overlaps included.
    pub fn count_phrase(&self, phrase: &[String]) -> u32 {
        if phrase.is_empty() || phrase.len() > self.words.len() {
            return 0;
        }
        let hits = self
            .words
            .windows(phrase.len())
            .filter(|window| *window == phrase)
            .count();
        u32::try_from(hits).unwrap_or(u32::MAX)
    }

    pub fn contains_phrase(&self, phrase: &[String]) -> bool {
        self.count_phrase(phrase) > 0
    }

    pub fn contains_substring(&self, needle: &str) -> bool {
        !needle.is_empty() && self.lowered.contains(needle)
    }

    pub fn char_count(&self) -> usize {
        self.lowered.chars().count()
    }
}
