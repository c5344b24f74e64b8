use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::error::{LangIdError, Result};
use crate::io;
use crate::matcher::{LangMatcher, ModelParams};

/// Language codes of the Europarl test sentences.
pub const EUROPARL_CODES: [(&str, &str); 11] = [
	("da", "Danish"),
	("de", "German"),
	("el", "Greek"),
	("en", "English"),
	("es", "Spanish"),
	("fi", "Finnish"),
	("fr", "French"),
	("it", "Italian"),
	("nl", "Dutch"),
	("pt", "Portuguese"),
	("sv", "Swedish"),
];

/// Maps test-file extensions to the profile labels they should match.
pub type LanguageCodes = HashMap<String, String>;

/// Returns [`EUROPARL_CODES`] as an owned map.
pub fn europarl_codes() -> LanguageCodes {
	EUROPARL_CODES
		.iter()
		.map(|(code, name)| (code.to_string(), name.to_string()))
		.collect()
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Misclassification {
	pub file: String,
	pub expected: String,
	pub predicted: String,
}

/// Outcome of classifying one folder of test files.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct EvaluationReport {
	pub correct: usize,
	pub incorrect: usize,
	pub misses: Vec<Misclassification>,
}

impl EvaluationReport {
	pub fn total(&self) -> usize {
		self.correct + self.incorrect
	}

	/// Percentage of correct predictions, 0 for an empty folder.
	pub fn accuracy(&self) -> f64 {
		if self.total() == 0 {
			return 0.0;
		}
		100.0 * self.correct as f64 / self.total() as f64
	}
}

/// Classifies every file of `test_dir` and counts hits and misses.
///
/// Test files are named `<anything>.<code>`; the code (text after the
/// first `.`) is mapped through `codes` to the expected label.
///
/// # Errors
/// - `Config` for a file without a code or with an unknown code
/// - any error raised while recognizing a file
pub fn evaluate<P: AsRef<Path>>(matcher: &LangMatcher, test_dir: P, codes: &LanguageCodes) -> Result<EvaluationReport> {
	let test_dir = test_dir.as_ref();
	let mut report = EvaluationReport::default();

	for file in io::list_files(test_dir)? {
		let expected = expected_label(&file, codes)?;
		let predicted = matcher.recognize(test_dir.join(&file))?.label;

		if predicted == expected {
			report.correct += 1;
		} else {
			log::debug!("{file}: predicted {predicted}, expected {expected}");
			report.incorrect += 1;
			report.misses.push(Misclassification { file, expected: expected.to_owned(), predicted });
		}
	}

	Ok(report)
}

fn expected_label<'a>(file: &str, codes: &'a LanguageCodes) -> Result<&'a str> {
	let code = file
		.split('.')
		.nth(1)
		.ok_or_else(|| LangIdError::Config(format!("test file '{file}' has no language code")))?;
	codes
		.get(code)
		.map(String::as_str)
		.ok_or_else(|| LangIdError::Config(format!("unknown language code '{code}' in '{file}'")))
}

/// One model × test folder combination of a sweep.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SweepRow {
	pub params: ModelParams,
	pub ngram_kind: String,
	/// Suffix of the test folder name after its last `-` (`europarl-30` → `30`).
	pub sentence_length: String,
	pub report: EvaluationReport,
}

/// Evaluates every model directory of `models_root` on every test folder.
///
/// Rows come out ordered by model directory name, then by test folder.
pub fn evaluate_sweep<P, T>(models_root: P, test_dirs: &[T], codes: &LanguageCodes) -> Result<Vec<SweepRow>>
where
	P: AsRef<Path>,
	T: AsRef<Path>,
{
	let mut rows = Vec::new();

	for model_dir in io::list_dirs(models_root)? {
		let matcher = LangMatcher::new(&model_dir)?;
		let params = matcher.params();

		for test_dir in test_dirs {
			let test_name = io::dir_name(test_dir)?;
			let sentence_length = test_name.rsplit('-').next().unwrap_or(&test_name).to_owned();
			let report = evaluate(&matcher, test_dir, codes)?;

			log::info!("{} models with limit {} for {}-word sentences: {} correct, {} incorrect.",
				params.ngram_kind(), params.table_limit, sentence_length, report.correct, report.incorrect);

			rows.push(SweepRow { params, ngram_kind: params.ngram_kind(), sentence_length, report });
		}
	}

	Ok(rows)
}
