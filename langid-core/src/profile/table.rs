use indexmap::IndexMap;

/// Frequency table mapping n-grams to their occurrence counts.
///
/// Entries keep the order in which each n-gram was first seen (first
/// occurrence in the text, or line order when read from a file). That order
/// is the tie-break whenever entries are ranked by count.
///
/// # Invariants
/// - Keys are unique
/// - Every stored count is >= 1
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
	counts: IndexMap<String, u64>,
}

impl FrequencyTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self { counts: IndexMap::new() }
	}

	/// Number of distinct n-grams.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Count of `ngram`, if present.
	pub fn get(&self, ngram: &str) -> Option<u64> {
		self.counts.get(ngram).copied()
	}

	pub fn contains(&self, ngram: &str) -> bool {
		self.counts.contains_key(ngram)
	}

	/// Iterates over `(ngram, count)` in first-occurrence order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
		self.counts.iter().map(|(k, v)| (k.as_str(), *v))
	}

	/// Sum of all counts.
	pub fn total(&self) -> u64 {
		self.counts.values().sum()
	}

	/// Entries sorted by descending count.
	///
	/// The sort is stable: equal counts stay in first-occurrence order.
	pub fn most_common(&self) -> Vec<(&str, u64)> {
		let mut entries: Vec<(&str, u64)> = self.iter().collect();
		entries.sort_by(|a, b| b.1.cmp(&a.1));
		entries
	}

	/// Returns a new table holding the `limit` most common entries.
	///
	/// A `limit` of 0 keeps everything. The result is ordered by
	/// descending count.
	pub fn truncated(&self, limit: usize) -> FrequencyTable {
		let entries = self.most_common();
		let keep = if limit == 0 { entries.len() } else { limit.min(entries.len()) };
		entries.into_iter().take(keep).collect()
	}

	/// Records one occurrence of `ngram`.
	pub(crate) fn increment(&mut self, ngram: String) {
		*self.counts.entry(ngram).or_insert(0) += 1;
	}

	/// Sets the count of `ngram`, keeping its original position if it was
	/// already present. Zero counts are ignored.
	pub(crate) fn set(&mut self, ngram: String, count: u64) {
		if count == 0 {
			return;
		}
		self.counts.insert(ngram, count);
	}
}

impl<K: Into<String>> FromIterator<(K, u64)> for FrequencyTable {
	/// Builds a table from `(ngram, count)` pairs. Later duplicates
	/// overwrite earlier ones and zero counts are dropped.
	fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
		let mut table = FrequencyTable::new();
		for (ngram, count) in iter {
			table.set(ngram.into(), count);
		}
		table
	}
}
