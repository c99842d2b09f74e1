/// What a single physical line of INI text holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
	/// `[name]`, with the name trimmed. `[]` names the global section.
	SectionHeader(&'a str),

	/// `key = value`, split at the first `=` and trimmed on both sides.
	Parameter { key: &'a str, value: &'a str },

	/// Nothing but a `#` comment.
	Comment(&'a str),

	Blank,
}

/// Classify one line.
///
/// Everything from the first `#` on is a comment; there is no escape. On
/// failure the comment-stripped, trimmed text is returned.
pub fn classify(raw: &str) -> Result<Line<'_>, &str> {
	let (content, comment) = match raw.split_once('#') {
		Some((content, comment)) => (content, Some(comment)),
		None => (raw, None),
	};

	let text = content.trim();

	if text.is_empty() {
		return Ok(comment.map_or(Line::Blank, |comment| Line::Comment(comment.trim())));
	}

	if let Some(name) = text.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
		return Ok(Line::SectionHeader(name.trim()));
	}

	if let Some((key, value)) = text.split_once('=') {
		return Ok(Line::Parameter {
			key: key.trim(),
			value: value.trim(),
		});
	}

	Err(text)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_blank_lines() {
		assert_eq!(classify(""), Ok(Line::Blank));
		assert_eq!(classify("   \t "), Ok(Line::Blank));
	}

	#[test]
	fn test_comment_lines() {
		assert_eq!(classify("# note"), Ok(Line::Comment("note")));
		assert_eq!(classify("   #"), Ok(Line::Comment("")));
	}

	#[test]
	fn test_section_headers() {
		assert_eq!(classify("[section]"), Ok(Line::SectionHeader("section")));
		assert_eq!(classify("  [  a.b.c  ]  "), Ok(Line::SectionHeader("a.b.c")));
		assert_eq!(classify("[]"), Ok(Line::SectionHeader("")));
		assert_eq!(classify("[s] # trailing"), Ok(Line::SectionHeader("s")));
	}

	#[test]
	fn test_parameters() {
		assert_eq!(classify("K = V"), Ok(Line::Parameter { key: "K", value: "V" }));
		assert_eq!(classify("K=a=b"), Ok(Line::Parameter { key: "K", value: "a=b" }));
		assert_eq!(classify("K ="), Ok(Line::Parameter { key: "K", value: "" }));
		assert_eq!(
			classify("K = V # trailing"),
			Ok(Line::Parameter { key: "K", value: "V" })
		);
	}

	#[test]
	fn test_hash_truncates_value() {
		assert_eq!(
			classify("url = http://host/#anchor"),
			Ok(Line::Parameter { key: "url", value: "http://host/" })
		);
	}

	#[test]
	fn test_unparseable_lines() {
		assert_eq!(classify("xxx"), Err("xxx"));
		assert_eq!(classify("  [open  # comment"), Err("[open"));
		assert_eq!(classify("close]"), Err("close]"));
	}
}
