//! Token-level cleaning: stopword admission, contraction expansion, stemming.

use std::borrow::Cow;

use crate::analyzer::normalizer::unescape_entities;
use crate::analyzer::stemmer::EnglishStemmer;
use crate::analyzer::tokenizer::Tokenizer;
use crate::resources::LexicalResources;

/// Shortest token (in characters) that survives stopword removal is one
/// longer than this.
pub const MIN_KEPT_LEN: usize = 3;

/// Applies the per-token decision procedure and rejoins with single spaces.
#[derive(Debug, Clone, Copy)]
pub struct TokenFilter<'r> {
    resources: &'r LexicalResources,
    stemmer: &'r EnglishStemmer,
    tokenizer: Tokenizer,
}

impl<'r> TokenFilter<'r> {
    /// Creates a filter over shared resources and stemmer.
    pub const fn new(resources: &'r LexicalResources, stemmer: &'r EnglishStemmer) -> Self {
        Self {
            resources,
            stemmer,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Decodes HTML entities, tokenizes, filters and rejoins `text`.
    ///
    /// With `remove_stopwords`, a token is admitted only if it is longer than
    /// three characters and not a stopword. Contraction expansion and
    /// stemming are governed by their own flags alone and apply the same way
    /// whether or not stopword removal is on.
    pub fn clean_tokens(
        &self,
        text: &str,
        remove_stopwords: bool,
        stem: bool,
        map_contractions: bool,
    ) -> String {
        let decoded = unescape_entities(text);
        let mut out = String::with_capacity(decoded.len());

        self.tokenizer.tokenize(&decoded, |token, _| {
            if remove_stopwords {
                if token.chars().count() > MIN_KEPT_LEN && !self.resources.is_stopword(token) {
                    let kept = self.transform(token, stem, map_contractions);
                    push_joined(&mut out, &kept);
                }
            } else {
                let kept = self.transform(token, stem, map_contractions);
                push_joined(&mut out, &kept);
            }
        });

        out
    }

    fn transform<'t>(&self, token: &'t str, stem: bool, map_contractions: bool) -> Cow<'t, str>
    where
        'r: 't,
    {
        let mut t: Cow<'t, str> = Cow::Borrowed(token);
        if map_contractions {
            if let Some(expansion) = self.resources.contraction(&t) {
                t = Cow::Borrowed(expansion);
            }
        }
        if stem {
            let stemmed = self.stemmer.stem(&t).into_owned();
            t = Cow::Owned(stemmed);
        }
        t
    }
}

#[inline]
fn push_joined(out: &mut String, token: &str) {
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(token);
}
