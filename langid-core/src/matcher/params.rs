use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LangIdError, Result};
use crate::io;

/// Parameters shared by every profile of a model directory.
///
/// Rendered as, and parsed from, `"{ngram_size}-{table_limit}"`
/// (e.g. `"3-200"`), which is also the model directory name.
///
/// # Invariants
/// - `ngram_size >= 1`
/// - `table_limit == 0` means profiles are not truncated
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ModelParams {
	pub ngram_size: usize,
	pub table_limit: usize,
}

impl ModelParams {
	/// Creates parameters, rejecting a zero n-gram size.
	pub fn new(ngram_size: usize, table_limit: usize) -> Result<Self> {
		if ngram_size == 0 {
			return Err(LangIdError::Config("n-gram size must be >= 1".to_owned()));
		}
		Ok(Self { ngram_size, table_limit })
	}

	/// Parses the parameters from the base name of a model directory.
	pub fn from_model_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
		io::dir_name(dir)?.parse()
	}

	/// Human name of the n-gram kind: `Bigram`, `Trigram`, `4gram`...
	pub fn ngram_kind(&self) -> String {
		match self.ngram_size {
			2 => "Bigram".to_owned(),
			3 => "Trigram".to_owned(),
			n => format!("{n}gram"),
		}
	}
}

impl fmt::Display for ModelParams {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{}", self.ngram_size, self.table_limit)
	}
}

impl FromStr for ModelParams {
	type Err = LangIdError;

	fn from_str(s: &str) -> Result<Self> {
		let malformed = |why: &str| {
			LangIdError::Config(format!("model name '{s}' is not '<n>-<limit>': {why}"))
		};

		let (n, limit) = s.split_once('-').ok_or_else(|| malformed("missing '-'"))?;
		let ngram_size = n
			.parse::<usize>()
			.map_err(|_| malformed("n-gram size is not a non-negative integer"))?;
		let table_limit = limit
			.parse::<usize>()
			.map_err(|_| malformed("limit is not a non-negative integer"))?;

		Self::new(ngram_size, table_limit).map_err(|_| malformed("n-gram size must be >= 1"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_directory_names() {
		assert_eq!("3-200".parse::<ModelParams>().unwrap(), ModelParams { ngram_size: 3, table_limit: 200 });
		assert_eq!("2-0".parse::<ModelParams>().unwrap(), ModelParams { ngram_size: 2, table_limit: 0 });
		assert_eq!(
			ModelParams::from_model_dir("./models/4-50/").unwrap(),
			ModelParams { ngram_size: 4, table_limit: 50 }
		);
	}

	#[test]
	fn display_round_trips() {
		let params = ModelParams::new(3, 200).unwrap();
		assert_eq!(params.to_string(), "3-200");
		assert_eq!(params.to_string().parse::<ModelParams>().unwrap(), params);
	}

	#[test]
	fn malformed_names_are_config_errors() {
		for bad in ["3", "3-", "-200", "a-200", "3-b", "3-200-1", "0-200", "3--1", " 3-200"] {
			let err = bad.parse::<ModelParams>().unwrap_err();
			assert!(matches!(err, LangIdError::Config(_)), "{bad}");
		}
	}

	#[test]
	fn ngram_kind_names() {
		assert_eq!(ModelParams::new(2, 0).unwrap().ngram_kind(), "Bigram");
		assert_eq!(ModelParams::new(3, 0).unwrap().ngram_kind(), "Trigram");
		assert_eq!(ModelParams::new(5, 0).unwrap().ngram_kind(), "5gram");
	}
}
