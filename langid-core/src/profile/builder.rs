use super::ngram::{char_ngrams, mark_boundaries};
use super::table::FrequencyTable;
use super::tokenizer::tokenize;

/// Builds the n-gram frequency table of a text.
///
/// Each word from [`tokenize`] is wrapped as `<word>` and cut into
/// character n-grams of length `n`; n-grams never span two words. With
/// `limit > 0` only the `limit` most frequent n-grams are kept, equal counts
/// ranked by first occurrence in the text. `limit == 0` keeps every n-gram.
pub fn build_profile(text: &str, n: usize, limit: usize) -> FrequencyTable {
	let mut table = FrequencyTable::new();

	for token in tokenize(text) {
		for ngram in char_ngrams(&mark_boundaries(token), n) {
			table.increment(ngram);
		}
	}

	if limit > 0 {
		table.truncated(limit)
	} else {
		table
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn top_four_trigrams() {
		let table = build_profile("hiep, hiep, hoera!", 3, 4);
		let expected: FrequencyTable =
			[("<hi", 2), ("hie", 2), ("ep>", 2), ("iep", 2)].into_iter().collect();
		assert_eq!(table, expected);
	}

	#[test]
	fn unlimited_keeps_every_ngram() {
		let table = build_profile("hiep, hiep, hoera!", 3, 0);
		// <hiep> x2 gives 4 distinct trigrams, <hoera> gives 5
		assert_eq!(table.len(), 9);
		assert_eq!(table.total(), 4 * 2 + 5);
		assert_eq!(table.get("<ho"), Some(1));
	}

	#[test]
	fn kept_counts_dominate_excluded_counts() {
		let text = "Het valt voor, dat bij één roveroverval, één rover voorover over één roverval valt.";
		let full = build_profile(text, 3, 0);
		let top = build_profile(text, 3, 10);

		assert_eq!(top.len(), 10);
		let min_kept = top.iter().map(|(_, c)| c).min().unwrap();
		let max_excluded = full
			.iter()
			.filter(|(k, _)| !top.contains(k))
			.map(|(_, c)| c)
			.max()
			.unwrap();
		assert!(min_kept >= max_excluded);
	}

	#[test]
	fn ngrams_stay_inside_words() {
		let table = build_profile("ab cd", 2, 0);
		assert!(table.contains("<a"));
		assert!(table.contains("b>"));
		assert!(!table.contains("bc"));
		assert!(!table.contains("> "));
	}

	#[test]
	fn degenerate_input_gives_empty_table() {
		assert!(build_profile("", 3, 0).is_empty());
		assert!(build_profile("...!!!", 3, 10).is_empty());
		// a one-letter word is "<a>", too short for 4-grams
		assert!(build_profile("a b c", 4, 0).is_empty());
	}

	#[test]
	fn build_is_repeatable() {
		let text = "the quick brown fox jumps over the lazy dog";
		assert_eq!(
			build_profile(text, 2, 5).most_common(),
			build_profile(text, 2, 5).most_common()
		);
	}
}
