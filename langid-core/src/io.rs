use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LangIdError, Result};

/// File-name suffix marking a Latin-1 encoded corpus.
pub const LATIN1_SUFFIX: &str = "-Latin1";

/// Text encodings understood when reading corpora and samples.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
	#[default]
	Utf8,
	Latin1,
}

impl TextEncoding {
	/// Picks the encoding from the corpus naming convention.
	///
	/// - `"Danish-Latin1"` → `Latin1`
	/// - anything else → `Utf8`
	pub fn for_file_name(name: &str) -> Self {
		if name.ends_with(LATIN1_SUFFIX) {
			TextEncoding::Latin1
		} else {
			TextEncoding::Utf8
		}
	}

	pub fn name(self) -> &'static str {
		match self {
			TextEncoding::Utf8 => "utf-8",
			TextEncoding::Latin1 => "latin1",
		}
	}
}

impl fmt::Display for TextEncoding {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for TextEncoding {
	type Err = LangIdError;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_ascii_lowercase().as_str() {
			"utf-8" | "utf8" => Ok(TextEncoding::Utf8),
			"latin1" | "latin-1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
			other => Err(LangIdError::Config(format!("unknown encoding '{other}'"))),
		}
	}
}

/// Reads a whole file and decodes it with `encoding`.
///
/// UTF-8 decoding is strict: malformed input is a `Decode` error, never
/// replaced. A leading BOM is kept as part of the text.
pub fn read_text<P: AsRef<Path>>(path: P, encoding: TextEncoding) -> Result<String> {
	let path = path.as_ref();
	let bytes = fs::read(path).map_err(|e| LangIdError::io(path, e))?;

	match encoding {
		TextEncoding::Utf8 => encoding_rs::UTF_8
			.decode_without_bom_handling_and_without_replacement(&bytes)
			.map(|text| text.into_owned())
			.ok_or_else(|| LangIdError::Decode { path: path.to_owned(), encoding: encoding.name() }),
		TextEncoding::Latin1 => Ok(encoding_rs::mem::decode_latin1(&bytes).into_owned()),
	}
}

/// Lists the regular files of a directory, sorted by name.
///
/// Returns file names only (no paths). Sub-directories are skipped.
pub fn list_files<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
	let dir = dir.as_ref();
	let mut files = Vec::new();

	for entry in fs::read_dir(dir).map_err(|e| LangIdError::io(dir, e))? {
		let entry = entry.map_err(|e| LangIdError::io(dir, e))?;
		let path = entry.path();

		if !path.is_file() {
			log::warn!("Skipping non-file entry {}", path.display());
			continue;
		}
		match path.file_name().and_then(|name| name.to_str()) {
			Some(name) => files.push(name.to_owned()),
			None => log::warn!("Skipping non UTF-8 file name {}", path.display()),
		}
	}

	files.sort();
	Ok(files)
}

/// Lists the sub-directories of a directory, sorted by name.
pub fn list_dirs<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
	let dir = dir.as_ref();
	let mut dirs = Vec::new();

	for entry in fs::read_dir(dir).map_err(|e| LangIdError::io(dir, e))? {
		let path = entry.map_err(|e| LangIdError::io(dir, e))?.path();
		if path.is_dir() {
			dirs.push(path);
		}
	}

	dirs.sort();
	Ok(dirs)
}

/// Returns the last component of a directory path.
///
/// Examples:
/// - `"./models/3-200/"` → `"3-200"`
/// - `"3-200"` → `"3-200"`
pub fn dir_name<P: AsRef<Path>>(dir: P) -> Result<String> {
	let dir = dir.as_ref();
	dir.components()
		.next_back()
		.and_then(|c| c.as_os_str().to_str())
		.filter(|name| !name.is_empty() && *name != "." && *name != "..")
		.map(str::to_owned)
		.ok_or_else(|| LangIdError::Config(format!("cannot take a model name from '{}'", dir.display())))
}

/// Derives a language label from a training file name.
///
/// Everything from the first `-` on is dropped:
/// - `"Ewe-UTF8"` → `"Ewe"`
/// - `"Danish_Dansk-Latin1"` → `"Danish_Dansk"`
/// - `"English"` → `"English"`
pub fn profile_label(file_name: &str) -> &str {
	match file_name.split_once('-') {
		Some((label, _)) => label,
		None => file_name,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn encoding_follows_file_suffix() {
		assert_eq!(TextEncoding::for_file_name("Danish-Latin1"), TextEncoding::Latin1);
		assert_eq!(TextEncoding::for_file_name("Ewe-UTF8"), TextEncoding::Utf8);
		assert_eq!(TextEncoding::for_file_name("Latin1-notes"), TextEncoding::Utf8);
	}

	#[test]
	fn encoding_parses_common_names() {
		assert_eq!("UTF-8".parse::<TextEncoding>().unwrap(), TextEncoding::Utf8);
		assert_eq!("latin1".parse::<TextEncoding>().unwrap(), TextEncoding::Latin1);
		assert!("ebcdic".parse::<TextEncoding>().is_err());
	}

	#[test]
	fn labels_drop_pipeline_suffix() {
		assert_eq!(profile_label("Ewe-UTF8"), "Ewe");
		assert_eq!(profile_label("Danish_Dansk-Latin1"), "Danish_Dansk");
		assert_eq!(profile_label("English"), "English");
	}

	#[test]
	fn dir_name_ignores_trailing_separator() {
		assert_eq!(dir_name("./models/3-200/").unwrap(), "3-200");
		assert_eq!(dir_name("2-0").unwrap(), "2-0");
		assert!(dir_name("..").is_err());
	}

	#[test]
	fn latin1_bytes_map_to_code_points() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(&[b'f', 0xE9, b'e']).unwrap();

		assert_eq!(read_text(file.path(), TextEncoding::Latin1).unwrap(), "fée");
		assert!(matches!(
			read_text(file.path(), TextEncoding::Utf8),
			Err(LangIdError::Decode { .. })
		));
	}

	#[test]
	fn missing_file_is_io_error() {
		let err = read_text("/definitely/not/here.txt", TextEncoding::Utf8).unwrap_err();
		assert!(matches!(err, LangIdError::Io { .. }));
	}
}
