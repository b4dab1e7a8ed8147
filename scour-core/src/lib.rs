//! Deterministic, table-driven cleaning for noisy social-media text.
//!
//! ```
//! use scour_core::{CleanConfig, Pipeline};
//!
//! let pipeline = Pipeline::english().unwrap();
//! let config = CleanConfig {
//!     lowercase: true,
//!     map_punctuation: true,
//!     map_contractions: true,
//!     ..CleanConfig::none()
//! };
//! assert_eq!(pipeline.clean("I can't  believe it!!!", config), "i can not believe it");
//! ```

pub mod analyzer;
pub mod pipeline;
pub mod resources;

pub use pipeline::Pipeline;
pub use resources::{LexicalResources, ResourceBuilder};
pub use scour_types::{CleanConfig, ConfigError, EncodingError, ResourceError, Table};
