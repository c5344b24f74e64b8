//! Character n-gram profiles.
//!
//! - Word tokenization (`tokenizer`)
//! - Boundary-marked n-gram extraction (`ngram`)
//! - Frequency tables and top-K truncation (`table`, `builder`)
//! - Line-oriented persistence (`store`)
//! - Cosine similarity between profiles (`similarity`)

pub mod builder;
pub mod ngram;
pub mod similarity;
pub mod store;
pub mod table;
pub mod tokenizer;

pub use builder::build_profile;
pub use ngram::{char_ngrams, mark_boundaries, ngrams, DEFAULT_N};
pub use similarity::cosine_similarity;
pub use store::{read_profile, read_profile_file, write_profile, write_profile_file};
pub use table::FrequencyTable;
pub use tokenizer::tokenize;
