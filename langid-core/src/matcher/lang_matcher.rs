use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::params::ModelParams;
use crate::error::{LangIdError, Result};
use crate::io::{self, TextEncoding};
use crate::profile::{build_profile, cosine_similarity, read_profile_file, FrequencyTable};

/// Similarity of an unknown text to one language profile.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Score {
	/// Profile label (the profile's file name).
	pub label: String,
	/// Cosine similarity in `[0, 1]`.
	pub similarity: f64,
}

/// Ranks texts against the language profiles of one model directory.
///
/// # Responsibilities
/// - Load every profile of a `"{n}-{limit}"` directory
/// - Profile unknown texts with the same `(n, limit)`
/// - Rank all languages by cosine similarity
///
/// # Invariants
/// - Never mutated after construction; a single instance can be shared
///   between threads
/// - Profiles are kept sorted by label, which fixes the order of equal
///   scores
#[derive(Clone, Debug)]
pub struct LangMatcher {
	model_dir: PathBuf,
	params: ModelParams,
	profiles: Vec<(String, FrequencyTable)>,
}

impl LangMatcher {
	/// Loads all profiles from a model directory.
	///
	/// # Parameters
	/// - `model_dir`: directory named `"{n}-{limit}"`. Both `"3-200"` and
	///   `"3-200/"` are accepted.
	///
	/// # Errors
	/// - `Config` if the directory name is malformed, the path is not a
	///   directory, or it holds no profile
	/// - `Io` if the directory is missing or a profile cannot be read
	/// - `Parse` if a profile file is malformed
	pub fn new<P: AsRef<Path>>(model_dir: P) -> Result<Self> {
		let model_dir = model_dir.as_ref().to_path_buf();
		let params = ModelParams::from_model_dir(&model_dir)?;

		if !model_dir.exists() {
			return Err(LangIdError::io(&model_dir, std::io::ErrorKind::NotFound.into()));
		}
		if !model_dir.is_dir() {
			return Err(LangIdError::Config(format!("expected a directory, got: {}", model_dir.display())));
		}

		let mut profiles = Vec::new();
		for file in io::list_files(&model_dir)? {
			let table = read_profile_file(model_dir.join(&file))?;
			log::debug!("Loaded profile '{}' ({} n-grams)", file, table.len());
			profiles.push((file, table));
		}

		if profiles.is_empty() {
			return Err(LangIdError::Config(format!("no profiles in {}", model_dir.display())));
		}

		log::info!("Loaded {} profiles from {} (n={}, limit={})",
			profiles.len(), model_dir.display(), params.ngram_size, params.table_limit);

		Ok(Self { model_dir, params, profiles })
	}

	/// Parameters parsed from the model directory name.
	pub fn params(&self) -> ModelParams {
		self.params
	}

	pub fn model_dir(&self) -> &Path {
		&self.model_dir
	}

	/// Labels of the loaded profiles, in ranking tie-break order.
	pub fn labels(&self) -> impl Iterator<Item = &str> {
		self.profiles.iter().map(|(label, _)| label.as_str())
	}

	/// Number of loaded profiles.
	pub fn len(&self) -> usize {
		self.profiles.len()
	}

	/// Always false: construction fails on an empty model directory.
	pub fn is_empty(&self) -> bool {
		self.profiles.is_empty()
	}

	/// Profile loaded for `label`, if any.
	pub fn profile(&self, label: &str) -> Option<&FrequencyTable> {
		self.profiles
			.iter()
			.find(|(name, _)| name == label)
			.map(|(_, table)| table)
	}

	/// Ranks `text` against every loaded profile.
	///
	/// Returns the `k_best` best scores, highest first. `k_best` is clamped
	/// to `1..=len()`. Equal scores keep label order.
	///
	/// # Errors
	/// `EmptyProfile` if `text` yields no n-gram (empty, punctuation only,
	/// or words too short for the model's n).
	pub fn score(&self, text: &str, k_best: usize) -> Result<Vec<Score>> {
		let unknown = build_profile(text, self.params.ngram_size, self.params.table_limit);

		let mut scores = Vec::with_capacity(self.profiles.len());
		for (label, known) in &self.profiles {
			scores.push(Score { label: label.clone(), similarity: cosine_similarity(known, &unknown)? });
		}

		scores.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
		scores.truncate(k_best.clamp(1, self.profiles.len()));
		Ok(scores)
	}

	/// Reads a UTF-8 file and returns its best matching language.
	pub fn recognize<P: AsRef<Path>>(&self, path: P) -> Result<Score> {
		self.recognize_with_encoding(path, TextEncoding::Utf8)
	}

	/// Reads a file with `encoding` and returns its best matching language.
	///
	/// # Errors
	/// `Io` / `Decode` if the file cannot be read, plus the errors of
	/// [`LangMatcher::score`].
	pub fn recognize_with_encoding<P: AsRef<Path>>(&self, path: P, encoding: TextEncoding) -> Result<Score> {
		let text = io::read_text(path, encoding)?;
		self.score(&text, 1)?
			.into_iter()
			.next()
			.ok_or_else(|| LangIdError::Config("no profiles to match against".to_owned()))
	}
}
