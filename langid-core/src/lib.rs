//! Character n-gram language identification.
//!
//! This crate provides:
//! - Word tokenization and boundary-marked character n-grams
//! - Frequency profiles with top-K truncation and a line-oriented file format
//! - Cosine similarity between profiles
//! - A read-only matcher ranking texts against a `"{n}-{limit}"` model
//!   directory
//! - Model training from a folder of corpora, and accuracy evaluation

/// Profile building, persistence and similarity.
pub mod profile;

/// Language matching against a model directory.
pub mod matcher;

/// Model directory generation from training corpora.
pub mod training;

/// Accuracy counting over labelled test folders.
pub mod evaluation;

/// File reading, encodings and directory helpers.
pub mod io;

pub mod error;

pub use error::{LangIdError, Result};
pub use io::TextEncoding;
pub use matcher::{LangMatcher, ModelParams, Score};
pub use profile::{
	build_profile, char_ngrams, cosine_similarity, ngrams, read_profile, read_profile_file, tokenize,
	write_profile, write_profile_file, FrequencyTable,
};
pub use training::train_profiles;
