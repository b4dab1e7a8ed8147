//! Text analysis stages.
//!
//! This module provides the cleaning components:
//! - **Normalizer**: Character-level stages (case, punctuation, special
//!   characters, spelling, whitespace)
//! - **Tokenizer**: Splits text into social-media-aware tokens
//! - **Stemmer**: Reduces tokens to their English stem
//! - **Filter**: Token-level stages (stopwords, contractions, stemming)

pub mod filter;
pub mod normalizer;
pub mod stemmer;
pub mod tokenizer;

pub use filter::TokenFilter;
pub use normalizer::TextNormalizer;
pub use stemmer::EnglishStemmer;
pub use tokenizer::{Tokenizer, Tokens};
