//! Case policy and word splitting shared by the rankers.
//!
//! A query typed entirely in lower case matches case-insensitively; any
//! capital letter in it makes the comparison exact (`"XI."` must not match
//! `"xi"`).

use std::borrow::Cow;

/// True when `s` has at least one cased character and none of them is upper case.
/// Strings of digits or punctuation only are not lower case.
pub fn is_lowercase(s: &str) -> bool {
    let mut cased = false;
    for c in s.chars() {
        if c.is_uppercase() {
            return false;
        }
        cased |= c.is_lowercase();
    }
    cased
}

/// Candidate text as it should be compared against `query`
pub fn fold_candidate<'a>(query: &str, candidate: &'a str) -> Cow<'a, str> {
    if is_lowercase(query) {
        Cow::Owned(candidate.to_lowercase())
    } else {
        Cow::Borrowed(candidate)
    }
}

/// Split on Unicode whitespace. Punctuation stays attached to its word.
pub fn split_words(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// Number of whitespace-delimited words in a run of characters
pub fn count_words(chars: &[char]) -> usize {
    let mut count = 0;
    let mut in_word = false;
    for c in chars {
        if c.is_whitespace() {
            in_word = false;
        } else if !in_word {
            in_word = true;
            count += 1;
        }
    }
    count
}

/// Substring test under the query case policy
pub fn contains_word(field: &str, word: &str) -> bool {
    if is_lowercase(word) {
        field.to_lowercase().contains(word)
    } else {
        field.contains(word)
    }
}

/// Field text with its lower-case form computed at most once
#[derive(Debug, Clone)]
pub struct FoldedText<'a> {
    text: Cow<'a, str>,
    lower: Option<String>,
}

impl<'a> FoldedText<'a> {
    /// Wrap `text`, lower-casing it up front when `fold` is set
    pub fn new(text: impl Into<Cow<'a, str>>, fold: bool) -> Self {
        let text = text.into();
        let lower = fold.then(|| text.to_lowercase());
        Self { text, lower }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// [`contains_word`] reusing the folded text when there is one
    pub fn contains_word(&self, word: &str) -> bool {
        match &self.lower {
            Some(lower) if is_lowercase(word) => lower.contains(word),
            _ => contains_word(&self.text, word),
        }
    }
}
