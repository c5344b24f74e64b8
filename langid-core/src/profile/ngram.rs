/// Marker prepended to every word before n-gram extraction.
pub const START_CHAR: char = '<';

/// Marker appended to every word before n-gram extraction.
pub const END_CHAR: char = '>';

/// Default n-gram length.
pub const DEFAULT_N: usize = 3;

/// Sliding windows of length `n` over `seq`, advancing by one.
///
/// Yields `max(0, len - n + 1)` windows; nothing when `n == 0` or the
/// sequence is shorter than `n`.
pub fn ngrams<T>(seq: &[T], n: usize) -> impl Iterator<Item = &[T]> {
	// `windows` panics on a zero size
	let seq = if n == 0 { &seq[..0] } else { seq };
	seq.windows(n.max(1))
}

/// Character n-grams of a string, counted in Unicode scalar values.
///
/// `char_ngrams("R2.D2", 3)` → `["R2.", "2.D", ".D2"]`
pub fn char_ngrams(word: &str, n: usize) -> Vec<String> {
	let chars: Vec<char> = word.chars().collect();
	ngrams(&chars, n).map(|window| window.iter().collect()).collect()
}

/// Wraps a word in boundary markers: `it` → `<it>`.
pub fn mark_boundaries(word: &str) -> String {
	let mut marked = String::with_capacity(word.len() + 2);
	marked.push(START_CHAR);
	marked.push_str(word);
	marked.push(END_CHAR);
	marked
}
