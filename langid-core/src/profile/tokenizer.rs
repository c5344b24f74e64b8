/// Punctuation replaced by a space before splitting into words.
pub const STRIPPED_PUNCTUATION: [char; 9] = ['!', '?', '"', ',', '.', '(', ')', '<', '>'];

/// Splits a text into words.
///
/// Every character of [`STRIPPED_PUNCTUATION`] acts as whitespace, then the
/// text is split on whitespace runs. The ASCII information separators
/// (U+001C to U+001F) count as whitespace too. Apostrophes and hyphens stay inside
/// words and case is preserved.
pub fn tokenize(text: &str) -> Vec<&str> {
	text.split(is_separator)
		.filter(|token| !token.is_empty())
		.collect()
}

fn is_separator(c: char) -> bool {
	c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c) || STRIPPED_PUNCTUATION.contains(&c)
}
