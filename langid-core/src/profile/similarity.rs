use super::table::FrequencyTable;
use crate::error::{LangIdError, Result};

/// Cosine similarity between two frequency tables.
///
/// Tables are sparse vectors over their own keys. The dot product only
/// visits keys present in both; each magnitude covers all of a table's own
/// counts. Sums are accumulated as integers, so the result is exactly
/// symmetric and a table compared with itself scores exactly `1.0`.
///
/// # Errors
/// Returns `EmptyProfile` if either table is empty.
pub fn cosine_similarity(known: &FrequencyTable, unknown: &FrequencyTable) -> Result<f64> {
	if known.is_empty() || unknown.is_empty() {
		return Err(LangIdError::EmptyProfile);
	}

	let (small, large) = if known.len() <= unknown.len() { (known, unknown) } else { (unknown, known) };
	let dot: u128 = small
		.iter()
		.filter_map(|(ngram, count)| large.get(ngram).map(|other| count as u128 * other as u128))
		.sum();

	let norm = (squared_magnitude(known) as f64 * squared_magnitude(unknown) as f64).sqrt();
	Ok(dot as f64 / norm)
}

fn squared_magnitude(table: &FrequencyTable) -> u128 {
	table.iter().map(|(_, count)| count as u128 * count as u128).sum()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::profile::build_profile;

	fn table(entries: &[(&str, u64)]) -> FrequencyTable {
		entries.iter().map(|(k, v)| (*k, *v)).collect()
	}

	#[test]
	fn partially_overlapping_tables() {
		let a = table(&[("<he", 2), ("het", 1)]);
		let b = table(&[("<he", 2), ("hem", 1)]);
		let score = cosine_similarity(&a, &b).unwrap();
		assert!((score - 0.8).abs() < 1e-6, "{score}");
	}

	#[test]
	fn disjoint_tables_score_zero() {
		let a = table(&[("ab", 3)]);
		let b = table(&[("cd", 1), ("de", 7)]);
		assert_eq!(cosine_similarity(&a, &b).unwrap(), 0.0);
	}

	#[test]
	fn symmetric_and_self_similar() {
		let a = build_profile("Het valt voor, dat bij één roveroverval, één rover voorover valt.", 3, 0);
		let b = build_profile("The rover fell over during the robbery, as rovers do.", 3, 0);

		assert_eq!(cosine_similarity(&a, &b).unwrap(), cosine_similarity(&b, &a).unwrap());
		assert_eq!(cosine_similarity(&a, &a).unwrap(), 1.0);
		assert_eq!(cosine_similarity(&b, &b).unwrap(), 1.0);
	}

	#[test]
	fn scale_does_not_matter() {
		let a = table(&[("x", 1), ("y", 2)]);
		let b = table(&[("x", 10), ("y", 20)]);
		let score = cosine_similarity(&a, &b).unwrap();
		assert!((score - 1.0).abs() < 1e-12);
	}

	#[test]
	fn score_stays_in_unit_range() {
		let a = build_profile("aaa bbb ccc abc", 2, 0);
		let b = build_profile("abc cab bca", 2, 0);
		let score = cosine_similarity(&a, &b).unwrap();
		assert!((0.0..=1.0).contains(&score));
	}

	#[test]
	fn empty_table_is_an_error() {
		let a = table(&[("ab", 1)]);
		let empty = FrequencyTable::new();
		assert!(matches!(cosine_similarity(&a, &empty), Err(LangIdError::EmptyProfile)));
		assert!(matches!(cosine_similarity(&empty, &a), Err(LangIdError::EmptyProfile)));
	}
}
