//! English Snowball stemmer.

use std::borrow::Cow;
use std::fmt;

use rust_stemmers::{Algorithm, Stemmer};

/// Reduces single tokens to their Snowball (Porter2) English stem.
///
/// The token is case-folded first, since the rule set only recognises
/// lowercase suffixes. Tokens too short for the algorithm pass through
/// (lowercased) by its own rules.
pub struct EnglishStemmer {
    inner: Stemmer,
}

impl EnglishStemmer {
    /// Creates the stemmer.
    pub fn new() -> Self {
        Self {
            inner: Stemmer::create(Algorithm::English),
        }
    }

    /// Stems one token.
    pub fn stem<'t>(&self, token: &'t str) -> Cow<'t, str> {
        if token.chars().any(char::is_uppercase) {
            let lowered = token.to_lowercase();
            return Cow::Owned(self.inner.stem(&lowered).into_owned());
        }
        self.inner.stem(token)
    }
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnglishStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EnglishStemmer")
    }
}
