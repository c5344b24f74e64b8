use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use crate::error::{LangIdError, Result};
use crate::io::{self, TextEncoding};
use crate::matcher::ModelParams;
use crate::profile::{build_profile, write_profile_file};

/// One training corpus and the profile it produces.
#[derive(Clone, Debug)]
struct TrainingJob {
	corpus: PathBuf,
	encoding: TextEncoding,
	output: PathBuf,
}

/// Builds a model directory from a folder of training corpora.
///
/// # Parameters
/// - `data_dir`: folder with one corpus file per language.
/// - `models_root`: where the `"{n}-{limit}"` model directory is created.
/// - `params`: n-gram size and table limit of every profile.
///
/// # Returns
/// The path of the model directory.
///
/// # Behavior
/// - Corpora ending in `-Latin1` are decoded as Latin-1, others as UTF-8.
/// - The profile label is the corpus name up to its first `-`
///   (`Ewe-UTF8` → `Ewe`).
/// - Corpora are split into chunks (based on CPU cores) processed by
///   worker threads; each profile goes to its own file.
///
/// # Errors
/// - `Config` if two corpora map to the same label.
/// - The first I/O or decode error reported by a worker.
pub fn train_profiles<PD, PM>(data_dir: PD, models_root: PM, params: ModelParams) -> Result<PathBuf>
where
	PD: AsRef<Path>,
	PM: AsRef<Path>,
{
	let data_dir = data_dir.as_ref();
	let model_dir = models_root.as_ref().join(params.to_string());
	fs::create_dir_all(&model_dir).map_err(|e| LangIdError::io(&model_dir, e))?;

	let jobs = plan_jobs(data_dir, &model_dir)?;
	if jobs.is_empty() {
		log::warn!("No training corpora found in {}", data_dir.display());
		return Ok(model_dir);
	}

	let chunks = num_cpus::get().max(1);
	let chunk_size = jobs.len().div_ceil(chunks);

	let (tx, rx) = mpsc::channel();
	let mut workers = Vec::new();
	for chunk in jobs.chunks(chunk_size) {
		let tx = tx.clone();
		let chunk: Vec<TrainingJob> = chunk.to_vec();

		workers.push(thread::spawn(move || {
			for job in chunk {
				let result = train_one(&job, params);
				// The receiver only hangs up after the first error
				if tx.send(result).is_err() {
					return;
				}
			}
		}));
	}
	drop(tx);

	let mut first_error = None;
	for result in rx.iter() {
		match result {
			Ok(profile) => log::debug!("Wrote profile {}", profile.display()),
			Err(e) => {
				first_error = Some(e);
				break;
			}
		}
	}
	// Workers stop at their next send once the receiver is gone
	drop(rx);
	for worker in workers {
		if worker.join().is_err() {
			first_error.get_or_insert_with(|| LangIdError::Config("training worker panicked".to_owned()));
		}
	}
	if let Some(e) = first_error {
		return Err(e);
	}

	log::info!("Trained {} profiles into {}", jobs.len(), model_dir.display());
	Ok(model_dir)
}

/// Maps every corpus of `data_dir` to its encoding and output path.
fn plan_jobs(data_dir: &Path, model_dir: &Path) -> Result<Vec<TrainingJob>> {
	let mut seen: HashMap<String, String> = HashMap::new();
	let mut jobs = Vec::new();

	for file in io::list_files(data_dir)? {
		let label = io::profile_label(&file).to_owned();
		if label.is_empty() {
			return Err(LangIdError::Config(format!("corpus '{file}' has an empty label")));
		}
		if let Some(previous) = seen.insert(label.clone(), file.clone()) {
			return Err(LangIdError::Config(format!(
				"corpora '{previous}' and '{file}' both map to label '{label}'"
			)));
		}

		jobs.push(TrainingJob {
			corpus: data_dir.join(&file),
			encoding: TextEncoding::for_file_name(&file),
			output: model_dir.join(&label),
		});
	}

	Ok(jobs)
}

fn train_one(job: &TrainingJob, params: ModelParams) -> Result<PathBuf> {
	let text = io::read_text(&job.corpus, job.encoding)?;
	let table = build_profile(&text, params.ngram_size, params.table_limit);
	write_profile_file(&table, &job.output)?;
	Ok(job.output.clone())
}
