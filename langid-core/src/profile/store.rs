use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use super::table::FrequencyTable;
use crate::error::{LangIdError, Result};

/// Writes a table as `"{count} {ngram}\n"` lines, most frequent first.
///
/// Equal counts keep the table's own order.
pub fn write_profile<W: Write>(table: &FrequencyTable, mut writer: W) -> io::Result<()> {
	for (ngram, count) in table.most_common() {
		writeln!(writer, "{count} {ngram}")?;
	}
	writer.flush()
}

/// Writes a table to `path`.
///
/// The profile is written to a temporary file next to `path` and renamed
/// over it once complete, so readers never see a half-written profile.
pub fn write_profile_file<P: AsRef<Path>>(table: &FrequencyTable, path: P) -> Result<()> {
	let path = path.as_ref();
	let parent_dir = match path.parent() {
		Some(dir) if !dir.as_os_str().is_empty() => dir,
		_ => Path::new("."),
	};

	let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| LangIdError::io(parent_dir, e))?;
	write_profile(table, BufWriter::new(&temp_file)).map_err(|e| LangIdError::io(temp_file.path(), e))?;
	temp_file.persist(path).map_err(|e| LangIdError::io(path, e.error))?;
	Ok(())
}

/// Reads a table written by [`write_profile`].
///
/// Each line is split on its first space into a count and an n-gram.
/// `source_name` is only used in error messages.
///
/// # Errors
/// Any malformed line aborts the whole read with a `Parse` error.
pub fn read_profile<R: BufRead>(reader: R, source_name: &str) -> Result<FrequencyTable> {
	let mut table = FrequencyTable::new();

	for (index, line) in reader.lines().enumerate() {
		let line = line.map_err(|e| LangIdError::io(source_name, e))?;
		let (ngram, count) = parse_line(&line).map_err(|reason| LangIdError::Parse {
			source_name: source_name.to_owned(),
			line: index + 1,
			reason,
		})?;
		table.set(ngram.to_owned(), count);
	}

	Ok(table)
}

/// Reads a profile file.
pub fn read_profile_file<P: AsRef<Path>>(path: P) -> Result<FrequencyTable> {
	let path = path.as_ref();
	let file = File::open(path).map_err(|e| LangIdError::io(path, e))?;
	read_profile(BufReader::new(file), &path.display().to_string())
}

fn parse_line(line: &str) -> std::result::Result<(&str, u64), String> {
	let line = line.strip_suffix('\r').unwrap_or(line);
	let (count, ngram) = line
		.split_once(' ')
		.ok_or_else(|| format!("expected '<count> <ngram>', got '{line}'"))?;

	if ngram.is_empty() {
		return Err("empty n-gram".to_owned());
	}
	if ngram.contains(' ') {
		return Err(format!("more than two fields in '{line}'"));
	}
	let count: u64 = count
		.parse()
		.map_err(|_| format!("count '{count}' is not a non-negative integer"))?;
	if count == 0 {
		return Err(format!("zero count for '{ngram}'"));
	}

	Ok((ngram, count))
}
