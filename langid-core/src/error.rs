use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by profile building, persistence and matching.
#[derive(Debug, Error)]
pub enum LangIdError {
	/// Bad model configuration (directory name, empty model, label clash...).
	#[error("configuration error: {0}")]
	Config(String),

	/// A profile line could not be parsed.
	#[error("{source_name}:{line}: malformed profile line ({reason})")]
	Parse {
		source_name: String,
		line: usize,
		reason: String,
	},

	#[error("I/O error on {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// File content is not valid under the requested encoding.
	#[error("cannot decode {} as {encoding}", path.display())]
	Decode { path: PathBuf, encoding: &'static str },

	/// Cosine similarity is undefined for a zero-magnitude vector.
	#[error("cannot score empty profile")]
	EmptyProfile,
}

impl LangIdError {
	pub(crate) fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}
}

pub type Result<T> = std::result::Result<T, LangIdError>;
