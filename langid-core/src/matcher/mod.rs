//! Language matching against a directory of stored profiles.
//!
//! - Model parameters encoded in the directory name (`ModelParams`)
//! - Profile loading and cosine ranking (`LangMatcher`)

/// `"{n}-{limit}"` model parameters.
pub mod params;

/// Read-only matcher over one model directory.
pub mod lang_matcher;

pub use lang_matcher::{LangMatcher, Score};
pub use params::ModelParams;
