//! The `clean` entry point.
//!
//! Threads a string through the fixed stage order:
//!
//! ```text
//! lowercase -> map punctuation -> special chars -> spelling
//!           -> token filter (always) -> collapse whitespace (always)
//! ```
//!
//! A flag only decides whether its stage runs, never where.
//!
//! Threading:
//! - [`Pipeline`] is `Send + Sync`. It holds no per-call state, so a single
//!   instance can clean from any number of threads at once.

use std::sync::Arc;

use rayon::prelude::*;
use scour_types::{CleanConfig, EncodingError, ResourceError};

use crate::analyzer::{EnglishStemmer, TextNormalizer, TokenFilter};
use crate::resources::LexicalResources;

/// Shared resources plus stemmer, ready to clean.
#[derive(Debug, Clone)]
pub struct Pipeline {
    resources: Arc<LexicalResources>,
    stemmer: Arc<EnglishStemmer>,
}

impl Pipeline {
    /// Creates a pipeline over already-built resources.
    pub fn new(resources: impl Into<Arc<LexicalResources>>) -> Self {
        Self {
            resources: resources.into(),
            stemmer: Arc::new(EnglishStemmer::new()),
        }
    }

    /// Creates a pipeline over the compiled-in English tables.
    ///
    /// # Errors
    ///
    /// Returns the `ResourceError` raised while building the tables.
    pub fn english() -> Result<Self, ResourceError> {
        LexicalResources::english().map(Self::new)
    }

    /// The tables this pipeline consults.
    #[inline]
    pub fn resources(&self) -> &LexicalResources {
        &self.resources
    }

    /// Character-level stages over this pipeline's tables.
    #[inline]
    pub fn normalizer(&self) -> TextNormalizer<'_> {
        TextNormalizer::new(&self.resources)
    }

    /// Token-level stages over this pipeline's tables and stemmer.
    #[inline]
    pub fn token_filter(&self) -> TokenFilter<'_> {
        TokenFilter::new(&self.resources, &self.stemmer)
    }

    /// Cleans one string. Total: every input and every config yields a
    /// string, and the empty string yields the empty string.
    pub fn clean(&self, text: &str, config: CleanConfig) -> String {
        let normalizer = self.normalizer();
        let mut text = text.to_owned();

        if config.lowercase {
            text = normalizer.lowercase(&text);
        }
        if config.map_punctuation {
            text = normalizer.map_punctuation(&text);
        }
        if config.clean_special_chars {
            text = normalizer.clean_special_chars(&text);
        }
        if config.spell_check {
            text = normalizer.correct_spelling(&text);
        }

        let joined = self.token_filter().clean_tokens(
            &text,
            config.remove_stopwords,
            config.stem,
            config.map_contractions,
        );

        // Reuse the stage buffer for the final pass.
        normalizer.collapse_whitespace_into(&joined, &mut text);
        text
    }

    /// Cleans raw bytes, rejecting input that is not UTF-8.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError` locating the first invalid sequence; no stage
    /// runs in that case.
    pub fn clean_bytes(&self, bytes: &[u8], config: CleanConfig) -> Result<String, EncodingError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(self.clean(text, config))
    }

    /// Cleans raw bytes, replacing each invalid sequence with U+FFFD first.
    pub fn clean_bytes_lossy(&self, bytes: &[u8], config: CleanConfig) -> String {
        self.clean(&String::from_utf8_lossy(bytes), config)
    }

    /// Cleans every string in `texts`, in parallel, preserving order.
    pub fn clean_batch<S>(&self, texts: &[S], config: CleanConfig) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        tracing::trace!(len = texts.len(), %config, "cleaning batch");
        texts
            .par_iter()
            .map(|t| self.clean(t.as_ref(), config))
            .collect()
    }
}
