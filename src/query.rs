use crate::error::{IniError, Result};
use crate::model::Configuration;
use regex::Regex;

/// One value located by [`find_entries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
	pub section: &'a str,
	pub key: &'a str,
	pub value: &'a str,
}

/// Compile a regex pattern string.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| IniError::InvalidRegex {
		pattern: pattern.to_string(),
		source,
	})
}

/// Every entry whose key matches `pattern`, in document order.
pub fn find_entries<'a>(configuration: &'a Configuration, pattern: &Regex) -> Vec<Match<'a>> {
	configuration
		.entries()
		.filter(|(_, key, _)| pattern.is_match(key))
		.map(|(section, key, value)| Match {
			section,
			key,
			value,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_compile_valid_pattern() {
		assert!(compile_pattern(r"^log\.").is_ok());
	}

	#[test]
	fn test_compile_invalid_pattern() {
		let result = compile_pattern(r"[invalid");
		assert!(result.is_err());
		match result.unwrap_err() {
			IniError::InvalidRegex { pattern, .. } => {
				assert_eq!(pattern, "[invalid");
			}
			_ => panic!("Expected InvalidRegex error"),
		}
	}

	#[test]
	fn test_find_entries_across_sections() {
		let configuration = Configuration::from_entries([
			("", "timeout", "5"),
			("db", "host", "localhost"),
			("db", "timeout_ms", "100"),
			("cache", "ttl", "60"),
		]);

		let pattern = compile_pattern("^timeout").unwrap();
		let found = find_entries(&configuration, &pattern);

		assert_eq!(
			found,
			vec![
				Match { section: "", key: "timeout", value: "5" },
				Match { section: "db", key: "timeout_ms", value: "100" },
			]
		);
	}

	#[test]
	fn test_find_entries_no_match() {
		let configuration = Configuration::from_entries([("db", "host", "localhost")]);
		let pattern = compile_pattern("port").unwrap();

		assert!(find_entries(&configuration, &pattern).is_empty());
	}
}
